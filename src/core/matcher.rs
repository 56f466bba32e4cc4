use crate::models::{Donor, Match, NeedWeights, ScoredVictim, Victim};
use crate::core::{
    filters::{first_affordable, group_donors_by_type},
    scoring::calculate_need_score_with,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Match>,
    pub total_victims: usize,
    pub total_donors: usize,
}

/// Main matching orchestrator - pairs each victim with one donor who can fund them
///
/// # Pipeline Stages
/// 1. Group donors by lowercased resource type
/// 2. For each victim, pick the first affordable donor of the needed type
/// 3. Score matched victims
/// 4. Rank by need score
///
/// Donor budgets are not drawn down, so one donor may fund any number of
/// victims within a run.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: NeedWeights,
}

impl Matcher {
    pub fn new(weights: NeedWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: NeedWeights::default(),
        }
    }

    pub fn weights(&self) -> &NeedWeights {
        &self.weights
    }

    /// Pair victims with donors and rank the pairs by need score
    ///
    /// # Arguments
    /// * `victims` - All victims, in the order they were recorded
    /// * `donors` - All donors, in the order they were recorded
    ///
    /// # Returns
    /// MatchResult with at most one match per victim, highest need first.
    /// Victims with equal scores keep their input order.
    pub fn find_matches(&self, victims: &[Victim], donors: &[Donor]) -> MatchResult {
        let donors_by_type = group_donors_by_type(donors);

        let mut matches: Vec<Match> = victims
            .iter()
            .filter_map(|victim| {
                let group = donors_by_type.get(&victim.need_key())?;
                let donor = first_affordable(group, victim)?;

                let need_score = calculate_need_score_with(
                    &self.weights,
                    &victim.urgency,
                    victim.income,
                    victim.has_home,
                    victim.amount_needed,
                );

                Some(Match {
                    victim: ScoredVictim::new(victim, need_score),
                    donor: donor.clone(),
                })
            })
            .collect();

        // Stable sort keeps victim order for equal scores
        matches.sort_by(|a, b| {
            b.victim
                .need_score
                .partial_cmp(&a.victim.need_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Matched {} of {} victims against {} donors ({} resource types)",
            matches.len(),
            victims.len(),
            donors.len(),
            donors_by_type.len()
        );

        MatchResult {
            matches,
            total_victims: victims.len(),
            total_donors: donors.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Match victims to donors with the default weights
pub fn match_victims(victims: &[Victim], donors: &[Donor]) -> Vec<Match> {
    Matcher::with_default_weights().find_matches(victims, donors).matches
}
