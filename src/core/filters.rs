use std::collections::HashMap;
use crate::models::{Donor, Victim};

/// Group donors by their lowercased resource type
///
/// Donors keep their input order inside each group, which is what makes the
/// "first affordable donor" pick deterministic.
pub fn group_donors_by_type(donors: &[Donor]) -> HashMap<String, Vec<&Donor>> {
    let mut groups: HashMap<String, Vec<&Donor>> = HashMap::new();
    for donor in donors {
        groups.entry(donor.resource_key()).or_default().push(donor);
    }
    groups
}

/// Check whether a donor's budget covers the victim's request (inclusive)
#[inline]
pub fn can_afford(donor: &Donor, victim: &Victim) -> bool {
    donor.donation_amount >= victim.amount_needed
}

/// Pick the first donor in group order that can fund the victim
#[inline]
pub fn first_affordable<'a>(group: &[&'a Donor], victim: &Victim) -> Option<&'a Donor> {
    group.iter().copied().find(|donor| can_afford(donor, victim))
}
