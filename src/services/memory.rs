use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::models::{Donor, NewDonor, NewVictim, Victim};
use crate::services::store::{RecordStore, StoreError};

#[derive(Debug, Default)]
struct Records {
    victims: Vec<Victim>,
    donors: Vec<Donor>,
    next_victim_id: i64,
    next_donor_id: i64,
}

/// In-process record store
///
/// Used when no database is configured. Ids start at 1 and keep increasing
/// across resets, like a serial column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_victim(&self, victim: &NewVictim) -> Result<i64, StoreError> {
        let mut records = self.records.write().await;
        records.next_victim_id += 1;
        let id = records.next_victim_id;
        records.victims.push(victim.clone().with_id(id));
        Ok(id)
    }

    async fn insert_donor(&self, donor: &NewDonor) -> Result<i64, StoreError> {
        let mut records = self.records.write().await;
        records.next_donor_id += 1;
        let id = records.next_donor_id;
        records.donors.push(donor.clone().with_id(id));
        Ok(id)
    }

    async fn list_victims(&self) -> Result<Vec<Victim>, StoreError> {
        Ok(self.records.read().await.victims.clone())
    }

    async fn list_donors(&self) -> Result<Vec<Donor>, StoreError> {
        Ok(self.records.read().await.donors.clone())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        tracing::info!(
            "Cleared {} victims and {} donors",
            records.victims.len(),
            records.donors.len()
        );
        records.victims.clear();
        records.donors.clear();
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
