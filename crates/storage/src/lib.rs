//! Storage layer for todo-read
//!
//! The repository port consumed by the query service, with a PostgreSQL
//! backend (feature `postgres`) and an in-memory stand-in.

mod backend;
pub mod config;
mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use config::{DatabaseConfig, database_url_from_env};
pub use error::{BoxError, StorageError};
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::{PgStorage, order_by_clause};
pub use traits::TodoReadRepository;
pub use types::PaginatedResult;
