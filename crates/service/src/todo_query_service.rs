use std::sync::Arc;
use std::time::Instant;

use todo_read_core::{
    LIST_TODOS_QUERY, ListTodosParams, ListTodosResponse, PaginationMetadata, QueryFilters,
    TodoItem,
};
use todo_read_storage::TodoReadRepository;

use crate::ServiceError;
use crate::reporter::{DatabaseErrorReport, QueryPerformance, QueryReporter, TracingReporter};

/// Runs the list-todos query against a repository.
///
/// Stateless per call: validate, translate, one repository read, project,
/// paginate. Nothing is retried; a failed repository call fails the query.
pub struct TodoQueryService {
    repository: Arc<dyn TodoReadRepository>,
    reporter: Arc<dyn QueryReporter>,
}

impl TodoQueryService {
    /// Service reporting through `tracing`.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoReadRepository>) -> Self {
        Self::with_reporter(repository, Arc::new(TracingReporter))
    }

    #[must_use]
    pub fn with_reporter(
        repository: Arc<dyn TodoReadRepository>,
        reporter: Arc<dyn QueryReporter>,
    ) -> Self {
        Self { repository, reporter }
    }

    pub async fn list_todos(
        &self,
        params: &ListTodosParams,
    ) -> Result<ListTodosResponse, ServiceError> {
        let filters = QueryFilters::try_from(params)?;

        let started = Instant::now();
        let page = match self.repository.list_todos(&filters).await {
            Ok(page) => page,
            Err(e) => {
                self.reporter.database_error(&DatabaseErrorReport::from_error(&e));
                return Err(ServiceError::storage("Failed to list todos", e));
            },
        };
        if u64::try_from(page.items.len()).unwrap_or(u64::MAX) > filters.limit {
            return Err(ServiceError::Unexpected(format!(
                "repository returned {} items for limit {}",
                page.items.len(),
                filters.limit
            )));
        }

        self.reporter.query_performance(&QueryPerformance {
            query_name: LIST_TODOS_QUERY,
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
            record_count: page.items.len(),
            filters,
        });

        let data = page.items.into_iter().map(TodoItem::from).collect();
        Ok(ListTodosResponse {
            data,
            pagination: PaginationMetadata::new(filters.page, filters.limit, page.total),
        })
    }
}
