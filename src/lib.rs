//! Donation Matcher - pairs people in need with donors who can fund them
//!
//! This library provides the matching engine behind the Donation Matcher
//! service: a need scorer, a greedy type-and-budget matcher, the intake
//! coercion that feeds it, and the HTTP/storage plumbing around it.

pub mod config;
pub mod core;
pub mod intake;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, calculate_need_score, match_victims};
pub use crate::models::{Victim, Donor, Match, ScoredVictim, NeedWeights, Urgency};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let score = calculate_need_score("High", 1000, false, 200);
        assert_eq!(score, 31.02);
        assert!(match_victims(&[], &[]).is_empty());
    }
}
