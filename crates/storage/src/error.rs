//! Typed error enum for the storage layer.
//!
//! Lets the service tell connectivity failures from query failures and
//! malformed rows without downcasting opaque boxes.

use std::path::PathBuf;

use thiserror::Error;
use todo_read_core::ConfigError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not reach the database (pool timeout, IO, TLS).
    #[error("connection failed: {0}")]
    Connection(#[source] BoxError),

    /// SQL execution failure.
    #[error("query failed: {0}")]
    Query(#[source] BoxError),

    /// Row data could not be converted into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Seed file for the in-memory store could not be read or parsed.
    #[error("seed file {}: {source}", .path.display())]
    SeedFile {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Short variant name, reported as `error_type` to the observability channel.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match *self {
            Self::Connection(_) => "ConnectionError",
            Self::Query(_) => "QueryError",
            Self::DataCorruption { .. } => "DataCorruption",
            Self::SeedFile { .. } => "SeedFileError",
            Self::Config(_) => "ConfigError",
            Self::Migration(_) => "MigrationError",
        }
    }

    /// Whether the failure is about reaching the database rather than the query itself.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Custom `From<sqlx::Error>`, not blanket `#[from]`.
///
/// - pool / IO / TLS / configuration failures → `Connection`
/// - decode failures → `DataCorruption`
/// - everything else → `Query`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => Self::Connection(Box::new(err)),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::DataCorruption {
                context: "decoding todo_read_projection row".to_owned(),
                source: Box::new(err),
            },
            _ => Self::Query(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let err = StorageError::Query("boom".into());
        assert_eq!(err.kind(), "QueryError");
        assert!(!err.is_connection());
        let err = StorageError::Connection("refused".into());
        assert_eq!(err.kind(), "ConnectionError");
        assert!(err.is_connection());
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let err = StorageError::Query("relation does not exist".into());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("relation does not exist"));
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn test_sqlx_pool_timeout_is_connection() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), "QueryError");
    }
}
