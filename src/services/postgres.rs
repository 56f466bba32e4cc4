use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use crate::models::{Donor, NewDonor, NewVictim, Victim};
use crate::services::store::{RecordStore, StoreError};

/// PostgreSQL-backed record store
///
/// Holds victims and donors in two tables keyed by `BIGSERIAL` ids, so id
/// order is insertion order.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn victim_from_row(row: &PgRow) -> Victim {
    Victim {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        need_type: row.get("need_type"),
        urgency: row.get("urgency"),
        income: row.get("income"),
        has_home: row.get("has_home"),
        amount_needed: row.get("amount_needed"),
    }
}

fn donor_from_row(row: &PgRow) -> Donor {
    Donor {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        resource_type: row.get("resource_type"),
        donation_amount: row.get("donation_amount"),
    }
}

#[async_trait]
impl RecordStore for PostgresClient {
    async fn insert_victim(&self, victim: &NewVictim) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO victims (name, location, need_type, urgency, income, has_home, amount_needed)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&victim.name)
            .bind(&victim.location)
            .bind(&victim.need_type)
            .bind(&victim.urgency)
            .bind(victim.income)
            .bind(victim.has_home)
            .bind(victim.amount_needed)
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.get("id");
        tracing::debug!("Inserted victim {} ({})", id, victim.need_type);

        Ok(id)
    }

    async fn insert_donor(&self, donor: &NewDonor) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO donors (name, location, resource_type, donation_amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&donor.name)
            .bind(&donor.location)
            .bind(&donor.resource_type)
            .bind(donor.donation_amount)
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.get("id");
        tracing::debug!("Inserted donor {} ({})", id, donor.resource_type);

        Ok(id)
    }

    async fn list_victims(&self) -> Result<Vec<Victim>, StoreError> {
        let query = r#"
            SELECT id, name, location, need_type, urgency, income, has_home, amount_needed
            FROM victims
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(victim_from_row).collect())
    }

    async fn list_donors(&self) -> Result<Vec<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, location, resource_type, donation_amount
            FROM donors
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(donor_from_row).collect())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let victims = sqlx::query("DELETE FROM victims").execute(&mut *tx).await?;
        let donors = sqlx::query("DELETE FROM donors").execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(
            "Cleared {} victims and {} donors",
            victims.rows_affected(),
            donors.rows_affected()
        );

        Ok(())
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
