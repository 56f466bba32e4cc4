use serde::{Deserialize, Serialize};

/// A recorded person with an unmet need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Victim {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub need_type: String,
    pub urgency: String,
    pub income: i64,
    pub has_home: bool,
    pub amount_needed: i64,
}

impl Victim {
    /// Need type normalized for case-insensitive lookups
    pub fn need_key(&self) -> String {
        self.need_type.to_lowercase()
    }
}

/// Victim fields as captured by intake, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVictim {
    pub name: String,
    pub location: String,
    pub need_type: String,
    pub urgency: String,
    pub income: i64,
    pub has_home: bool,
    pub amount_needed: i64,
}

impl NewVictim {
    pub fn with_id(self, id: i64) -> Victim {
        Victim {
            id,
            name: self.name,
            location: self.location,
            need_type: self.need_type,
            urgency: self.urgency,
            income: self.income,
            has_home: self.has_home,
            amount_needed: self.amount_needed,
        }
    }
}

/// A recorded person offering a resource and budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub resource_type: String,
    pub donation_amount: i64,
}

impl Donor {
    /// Resource type normalized for case-insensitive lookups
    pub fn resource_key(&self) -> String {
        self.resource_type.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDonor {
    pub name: String,
    pub location: String,
    pub resource_type: String,
    pub donation_amount: i64,
}

impl NewDonor {
    pub fn with_id(self, id: i64) -> Donor {
        Donor {
            id,
            name: self.name,
            location: self.location,
            resource_type: self.resource_type,
            donation_amount: self.donation_amount,
        }
    }
}

/// Urgency tiers recognised by the need scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Map a stored urgency label to its tier.
    ///
    /// Labels are matched exactly; anything unrecognised (including other
    /// casings) falls back to `Low`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => Urgency::High,
            "Medium" => Urgency::Medium,
            _ => Urgency::Low,
        }
    }
}

/// Victim attributes as reported in a match, annotated with the need score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVictim {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub need_type: String,
    pub urgency: String,
    pub income: i64,
    pub has_home: bool,
    pub amount_needed: i64,
    pub need_score: f64,
}

impl ScoredVictim {
    pub fn new(victim: &Victim, need_score: f64) -> Self {
        Self {
            id: victim.id,
            name: victim.name.clone(),
            location: victim.location.clone(),
            need_type: victim.need_type.clone(),
            urgency: victim.urgency.clone(),
            income: victim.income,
            has_home: victim.has_home,
            amount_needed: victim.amount_needed,
            need_score,
        }
    }
}

/// Pairing of one victim with the donor able to fund them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub victim: ScoredVictim,
    pub donor: Donor,
}

/// Weights feeding the need score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub income_scale: f64,
    pub homeless_bonus: f64,
    pub amount_divisor: f64,
}

impl NeedWeights {
    pub fn urgency_weight(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::High => self.high,
            Urgency::Medium => self.medium,
            Urgency::Low => self.low,
        }
    }
}

impl Default for NeedWeights {
    fn default() -> Self {
        Self {
            high: 3.0,
            medium: 2.0,
            low: 1.0,
            income_scale: 10000.0,
            homeless_bonus: 1.0,
            amount_divisor: 10000.0,
        }
    }
}
