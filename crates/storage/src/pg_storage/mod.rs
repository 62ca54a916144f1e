//! PostgreSQL storage backend using sqlx.

mod todos;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use todo_read_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

pub use todos::order_by_clause;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Convert `u64` to `i64` for SQL LIMIT/OFFSET binds.
/// Saturates to `i64::MAX` on overflow.
pub(crate) fn u64_to_i64(val: u64) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}
