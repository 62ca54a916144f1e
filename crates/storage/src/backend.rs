//! Unified storage backend with enum dispatch.

use std::path::Path;

use async_trait::async_trait;
use todo_read_core::{QueryFilters, TodoReadProjection};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::traits::TodoReadRepository;
use crate::types::PaginatedResult;

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(MemoryStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    pub fn new_memory_from_file(seed: &Path) -> Result<Self, StorageError> {
        Ok(Self::Memory(MemoryStorage::from_json_file(seed)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Connects to PostgreSQL using `DATABASE_URL` or the `DB_*` variables.
    #[cfg(feature = "postgres")]
    pub async fn new_postgres_from_env() -> Result<Self, StorageError> {
        let url = crate::config::database_url_from_env()?;
        Self::new_postgres(&url).await
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl TodoReadRepository for StorageBackend {
    async fn list_todos(
        &self,
        filters: &QueryFilters,
    ) -> Result<PaginatedResult<TodoReadProjection>, StorageError> {
        match self {
            Self::Memory(s) => s.list_todos(filters).await,
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.list_todos(filters).await,
        }
    }
}
