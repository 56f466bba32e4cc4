// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{group_donors_by_type, can_afford, first_affordable};
pub use matcher::{Matcher, MatchResult, match_victims};
pub use scoring::{calculate_need_score, calculate_need_score_with};
