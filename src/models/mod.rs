// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Victim, NewVictim, Donor, NewDonor, Urgency, ScoredVictim, Match, NeedWeights};
pub use requests::{CreateVictimRequest, CreateDonorRequest};
pub use responses::{CreatedResponse, OkResponse, HealthResponse, ErrorResponse};
