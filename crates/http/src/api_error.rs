//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into the `{"error": {"code", "message", "field"?}}`
//! envelope with a matching status code. Handlers return
//! `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_read_core::ValidationError;
use todo_read_service::ServiceError;

use crate::response_types::{ErrorBody, ErrorResponse};

pub const DATABASE_ERROR_MESSAGE: &str = "Database error occurred";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// API error with HTTP status code and client-safe message.
///
/// `Database` and `Internal` log the real error server-side and return
/// a static message to the client. Error details never reach the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid query parameter.
    BadRequest { message: String, field: Option<String> },
    /// 404 Not Found: unknown route.
    NotFound(String),
    /// 500: the repository failed.
    Database(anyhow::Error),
    /// 500: anything else.
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match *self {
            Self::BadRequest { .. } => "INVALID_PARAMETER",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message, field) = match self {
            Self::BadRequest { message, field } => (StatusCode::BAD_REQUEST, message, field),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::Database(err) => {
                tracing::error!(error = ?err, "database error serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE.to_owned(), None)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "unexpected error serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE.to_owned(), None)
            },
        };
        let body = ErrorResponse { error: ErrorBody { code, message, field } };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err.message, field = ?err.field, "rejected request parameters");
        Self::BadRequest { message: err.message, field: err.field }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => e.into(),
            e @ ServiceError::Storage { .. } => Self::Database(e.into()),
            e @ ServiceError::Unexpected(_) => Self::Internal(e.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
