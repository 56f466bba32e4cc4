use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Donor, NewDonor, NewVictim, Victim};

/// Errors that can occur when reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Persistence for victims and donors
///
/// Lists come back in insertion order; the matcher relies on that order for
/// donor selection and tie-breaking.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a victim and return its assigned id
    async fn insert_victim(&self, victim: &NewVictim) -> Result<i64, StoreError>;

    /// Store a donor and return its assigned id
    async fn insert_donor(&self, donor: &NewDonor) -> Result<i64, StoreError>;

    async fn list_victims(&self) -> Result<Vec<Victim>, StoreError>;

    async fn list_donors(&self) -> Result<Vec<Donor>, StoreError>;

    /// Delete every victim and donor
    async fn reset(&self) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
