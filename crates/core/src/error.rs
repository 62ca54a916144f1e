//! Typed errors for the core crate.

use thiserror::Error;

/// A single parameter constraint violation.
///
/// `field` names the offending query parameter; `message` is the bare
/// rule text (`"page must be >= 1"`), without the `Invalid parameter:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Rejected query parameters.
///
/// Never produced by storage. Surfaced to clients as `INVALID_PARAMETER`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field: Option<String>,
}

impl ValidationError {
    /// Formats a violation as `Invalid parameter: <message>`.
    #[must_use]
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            message: format!("Invalid parameter: {}", violation.message),
            field: Some(violation.field.to_owned()),
        }
    }

    /// A non-integer value for an integer parameter.
    #[must_use]
    pub fn not_an_integer(field: &str) -> Self {
        Self {
            message: format!("Invalid parameter: {field} must be a valid integer"),
            field: Some(field.to_owned()),
        }
    }
}

/// Error parsing a closed wire enum (status, sort field, sort order).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be one of [{allowed}]")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub allowed: &'static str,
    pub value: String,
}

/// Configuration could not be assembled from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}
