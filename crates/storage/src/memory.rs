//! In-memory repository used for tests, demos and the `--seed` CLI mode.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use todo_read_core::{QueryFilters, TodoReadProjection, sort_todos};

use crate::error::StorageError;
use crate::traits::TodoReadRepository;
use crate::types::PaginatedResult;

fn u64_to_usize(val: u64) -> usize {
    usize::try_from(val).unwrap_or(usize::MAX)
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    todos: Arc<Vec<TodoReadProjection>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(todos: Vec<TodoReadProjection>) -> Self {
        Self { todos: Arc::new(todos) }
    }

    /// Loads a JSON array of todo records.
    pub fn from_json_file(path: &Path) -> Result<Self, StorageError> {
        let seed_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            StorageError::SeedFile { path: path.to_path_buf(), source }
        };
        let raw = std::fs::read_to_string(path).map_err(|e| seed_error(Box::new(e)))?;
        let todos: Vec<TodoReadProjection> =
            serde_json::from_str(&raw).map_err(|e| seed_error(Box::new(e)))?;
        tracing::info!(path = %path.display(), count = todos.len(), "loaded in-memory todos");
        Ok(Self::new(todos))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[async_trait]
impl TodoReadRepository for MemoryStorage {
    async fn list_todos(
        &self,
        filters: &QueryFilters,
    ) -> Result<PaginatedResult<TodoReadProjection>, StorageError> {
        let mut matching: Vec<TodoReadProjection> = self
            .todos
            .iter()
            .filter(|t| filters.status.is_none_or(|s| t.status == s))
            .cloned()
            .collect();
        sort_todos(&mut matching, filters.sort_field, filters.sort_order);

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let items = matching
            .into_iter()
            .skip(u64_to_usize(filters.offset()))
            .take(u64_to_usize(filters.limit))
            .collect();
        Ok(PaginatedResult::new(items, total, filters.offset(), filters.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::io::Write;
    use todo_read_core::{SortField, SortOrder, TodoStatus};

    fn todo(n: u32, status: TodoStatus, due: Option<u32>) -> TodoReadProjection {
        let created_at = Utc.with_ymd_and_hms(2026, 1, n, 8, 0, 0).unwrap();
        TodoReadProjection {
            id: format!("todo-{n:02}"),
            title: format!("Todo {n}"),
            description: None,
            status,
            created_at,
            updated_at: created_at,
            due_date: due.and_then(|d| NaiveDate::from_ymd_opt(2026, 2, d)),
        }
    }

    fn storage() -> MemoryStorage {
        MemoryStorage::new(vec![
            todo(1, TodoStatus::Pending, Some(10)),
            todo(2, TodoStatus::Completed, None),
            todo(3, TodoStatus::Pending, Some(5)),
            todo(4, TodoStatus::Completed, Some(1)),
            todo(5, TodoStatus::Pending, None),
        ])
    }

    fn ids(page: &PaginatedResult<TodoReadProjection>) -> Vec<&str> {
        page.items.iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_filters_newest_first() {
        let page = storage().list_todos(&QueryFilters::default()).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec!["todo-05", "todo-04", "todo-03", "todo-02", "todo-01"]);
    }

    #[tokio::test]
    async fn test_status_filter_counts_only_matching() {
        let filters =
            QueryFilters { status: Some(TodoStatus::Pending), ..QueryFilters::default() };
        let page = storage().list_todos(&filters).await.unwrap();
        assert_eq!(page.total, 3);
        assert!(page.items.iter().all(|t| t.status == TodoStatus::Pending));
    }

    #[tokio::test]
    async fn test_pages_slice_sorted_results() {
        let filters = QueryFilters {
            sort_field: SortField::DueDate,
            sort_order: SortOrder::Asc,
            page: 2,
            limit: 2,
            ..QueryFilters::default()
        };
        let page = storage().list_todos(&filters).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.offset, 2);
        // due: 04 (Feb 1), 03 (Feb 5), 01 (Feb 10), then nulls newest first: 05, 02
        assert_eq!(ids(&page), vec!["todo-01", "todo-05"]);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty_with_total() {
        let filters = QueryFilters { page: 10, limit: 20, ..QueryFilters::default() };
        let page = storage().list_todos(&filters).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let page = MemoryStorage::default().list_todos(&QueryFilters::default()).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"550e8400-e29b-41d4-a716-446655440003","title":"Set up CI",
                "description":null,"status":"pending","created_at":"2026-01-19T16:20:00Z",
                "updated_at":"2026-01-19T16:20:00Z","due_date":null}}]"#
        )
        .unwrap();
        let storage = MemoryStorage::from_json_file(file.path()).unwrap();
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_from_json_file_rejects_bad_status() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x","title":"t","description":null,"status":"PENDING",
                "created_at":"2026-01-19T16:20:00Z","updated_at":"2026-01-19T16:20:00Z",
                "due_date":null}}]"#
        )
        .unwrap();
        let err = MemoryStorage::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StorageError::SeedFile { .. }), "got {err:?}");
    }

    #[test]
    fn test_from_missing_file() {
        let err = MemoryStorage::from_json_file(Path::new("/nonexistent/todos.json")).unwrap_err();
        assert_eq!(err.kind(), "SeedFileError");
    }
}
