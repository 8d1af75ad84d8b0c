use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::RosterConfig;
use crate::models::employee::EmployeeRecord;

/// `id` is cast so `integer`, `bigint` and `serial` key columns all decode
/// into `EmployeeRecord::id: i64`. Ordered so ranking ties resolve the same
/// way on every run.
pub const ROSTER_QUERY: &str = "SELECT id::int8 AS id, name, skills FROM employees ORDER BY id";

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Source of the employee roster. A failed fetch aborts the analysis run.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, RosterError>;
}

/// Roster backed by the `employees` table.
#[derive(Clone)]
pub struct PgRosterProvider {
    pool: PgPool,
}

impl PgRosterProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterProvider for PgRosterProvider {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, RosterError> {
        let rows = sqlx::query_as::<_, EmployeeRecord>(ROSTER_QUERY)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Creates the PostgreSQL connection pool for the roster.
pub async fn create_pool(config: &RosterConfig) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
