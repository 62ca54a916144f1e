use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use std::sync::Arc;

use todo_read_core::ListTodosResponse;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ListTodosQuery;

/// `GET /todos`
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListTodosResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "unreadable query string");
        ApiError::BadRequest {
            message: "Invalid parameter: malformed query string".to_owned(),
            field: None,
        }
    })?;
    let query = ListTodosQuery::from_pairs(pairs);
    tracing::info!(
        page = ?query.page,
        limit = ?query.limit,
        status = ?query.status,
        sort = ?query.sort,
        order = ?query.order,
        "list todos request"
    );

    let params = query.into_params().map_err(ApiError::from)?;
    let response = state.query_service.list_todos(&params).await?;

    tracing::info!(
        returned = response.data.len(),
        total = response.pagination.total,
        page = response.pagination.page,
        total_pages = response.pagination.total_pages,
        "list todos completed"
    );
    Ok(Json(response))
}

/// Fallback for every unmatched route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_owned())
}
