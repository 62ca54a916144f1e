//! Repository port the query service depends on.

use async_trait::async_trait;
use todo_read_core::{QueryFilters, TodoReadProjection};

use crate::error::StorageError;
use crate::types::PaginatedResult;

/// Read access to todo projections.
///
/// Implementations apply the status filter, sort with the null-aware
/// ordering from `todo_read_core::compare_todos`, and return only the
/// requested page. `total` is always the unpaged filtered count, so a page
/// past the end yields no items but a non-zero total.
#[async_trait]
pub trait TodoReadRepository: Send + Sync {
    async fn list_todos(
        &self,
        filters: &QueryFilters,
    ) -> Result<PaginatedResult<TodoReadProjection>, StorageError>;
}
