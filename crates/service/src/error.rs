//! Typed error enum for the service layer.
//!
//! Callers match on the variant to decide between a client error and a
//! server error; `code()` gives the wire error code.

use thiserror::Error;
use todo_read_core::ValidationError;
use todo_read_storage::StorageError;

/// Service-layer error for the list query.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Parameters failed validation. Storage was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The repository failed. `source` is kept for logs, never shown to clients.
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StorageError,
    },

    /// Anything else, e.g. a repository breaking its contract.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ServiceError {
    pub(crate) fn storage(message: impl Into<String>, source: StorageError) -> Self {
        Self::Storage { message: message.into(), source }
    }

    /// Wire error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match *self {
            Self::Validation(_) => "INVALID_PARAMETER",
            Self::Storage { .. } => "DATABASE_ERROR",
            Self::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller, not the server, is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Offending parameter name, for validation errors that carry one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(e) => e.field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codes() {
        let validation = ServiceError::from(ValidationError::not_an_integer("page"));
        assert_eq!(validation.code(), "INVALID_PARAMETER");
        assert!(validation.is_client_error());
        assert_eq!(validation.field(), Some("page"));
        assert_eq!(validation.to_string(), "Invalid parameter: page must be a valid integer");

        let storage =
            ServiceError::storage("Failed to list todos", StorageError::Query("timeout".into()));
        assert_eq!(storage.code(), "DATABASE_ERROR");
        assert!(!storage.is_client_error());
        assert_eq!(storage.field(), None);

        assert_eq!(ServiceError::Unexpected("x".to_owned()).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_storage_message_does_not_embed_cause() {
        let err = ServiceError::storage(
            "Failed to list todos",
            StorageError::Query("password authentication failed for user reader".into()),
        );
        assert_eq!(err.to_string(), "Failed to list todos");
        let cause = err.source().map(ToString::to_string).unwrap();
        assert!(cause.contains("password authentication failed"));
    }
}
