//! HTTP API server for todo-read.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use todo_read_core::SERVICE_NAME;
use todo_read_service::TodoQueryService;

pub use api_error::ApiError;
pub use handlers::api_docs::openapi_document;
pub use query_types::ListTodosQuery;
pub use response_types::{
    ErrorBody, ErrorResponse, HealthResponse, ReadinessResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub query_service: Arc<TodoQueryService>,
    /// Storage backend name, reported by readiness.
    pub backend: &'static str,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(handlers::todos::list_todos))
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/openapi.json", get(handlers::api_docs::openapi_json))
        .fallback(handlers::todos::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", service: SERVICE_NAME })
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", backend: state.backend }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
