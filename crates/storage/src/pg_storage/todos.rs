//! TodoReadRepository implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use todo_read_core::{QueryFilters, SortField, SortOrder, TodoReadProjection, TodoStatus};

use super::{PgStorage, u64_to_i64};
use crate::error::StorageError;
use crate::traits::TodoReadRepository;
use crate::types::PaginatedResult;

const VISIBLE_TODOS: &str = "FROM todo_read_projection
    WHERE deleted_at IS NULL
      AND ($1::text IS NULL OR status = $1::text)";

/// `ORDER BY` clause matching `todo_read_core::compare_todos`.
#[must_use]
pub const fn order_by_clause(field: SortField, order: SortOrder) -> &'static str {
    match (field, order) {
        (SortField::CreatedAt, SortOrder::Asc) => {
            r#"ORDER BY created_at ASC, id::text COLLATE "C" ASC"#
        },
        (SortField::CreatedAt, SortOrder::Desc) => {
            r#"ORDER BY created_at DESC, id::text COLLATE "C" ASC"#
        },
        (SortField::DueDate, SortOrder::Asc) => {
            r#"ORDER BY due_date ASC NULLS LAST, created_at DESC, id::text COLLATE "C" ASC"#
        },
        (SortField::DueDate, SortOrder::Desc) => {
            r#"ORDER BY due_date DESC NULLS FIRST, created_at DESC, id::text COLLATE "C" ASC"#
        },
    }
}

fn row_to_projection(row: &sqlx::postgres::PgRow) -> Result<TodoReadProjection, StorageError> {
    let status: String = row.try_get("status")?;
    let status = status.parse::<TodoStatus>().map_err(|e| StorageError::DataCorruption {
        context: format!("invalid status '{status}' in todo_read_projection"),
        source: Box::new(e),
    })?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    let due_date: Option<NaiveDate> = row.try_get("due_date")?;
    Ok(TodoReadProjection {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status,
        created_at,
        updated_at,
        due_date,
    })
}

#[async_trait]
impl TodoReadRepository for PgStorage {
    async fn list_todos(
        &self,
        filters: &QueryFilters,
    ) -> Result<PaginatedResult<TodoReadProjection>, StorageError> {
        let status = filters.status.map(|s| s.as_str());
        let page_query = format!(
            "SELECT id::text AS id, title, description, status, created_at, updated_at, due_date
               {VISIBLE_TODOS}
               {}
               LIMIT $2 OFFSET $3",
            order_by_clause(filters.sort_field, filters.sort_order)
        );

        // Count and page read from one snapshot so `total` matches the page.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) {VISIBLE_TODOS}"))
            .bind(status)
            .fetch_one(&mut *tx)
            .await?;

        let rows = sqlx::query(&page_query)
            .bind(status)
            .bind(u64_to_i64(filters.limit))
            .bind(u64_to_i64(filters.offset()))
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        let items = rows.iter().map(row_to_projection).collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResult::new(
            items,
            u64::try_from(total).unwrap_or(0),
            filters.offset(),
            filters.limit,
        ))
    }
}
