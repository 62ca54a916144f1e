//! Sort order for todo lists, including where absent due dates land.
//!
//! `due_date asc` puts missing dates last; `due_date desc` puts them first.
//! Ties on the primary key fall back to `created_at` descending, then `id`
//! ascending. `created_at` sorting ties break on `id` ascending only.
//! PostgreSQL-backed repositories express the same rule in `ORDER BY`.

use std::cmp::Ordering;

use crate::todo::TodoReadProjection;

use super::{SortField, SortOrder};

fn compare_due_dates<T: Ord>(a: Option<&T>, b: Option<&T>, order: SortOrder) -> Ordering {
    match (a, b, order) {
        (Some(x), Some(y), SortOrder::Asc) => x.cmp(y),
        (Some(x), Some(y), SortOrder::Desc) => y.cmp(x),
        (None, None, _) => Ordering::Equal,
        (Some(_), None, SortOrder::Asc) | (None, Some(_), SortOrder::Desc) => Ordering::Less,
        (None, Some(_), SortOrder::Asc) | (Some(_), None, SortOrder::Desc) => Ordering::Greater,
    }
}

/// Total order between two records for the given sort field and direction.
#[must_use]
pub fn compare_todos(
    a: &TodoReadProjection,
    b: &TodoReadProjection,
    field: SortField,
    order: SortOrder,
) -> Ordering {
    let primary = match (field, order) {
        (SortField::CreatedAt, SortOrder::Asc) => a.created_at.cmp(&b.created_at),
        (SortField::CreatedAt, SortOrder::Desc) => b.created_at.cmp(&a.created_at),
        (SortField::DueDate, _) => {
            compare_due_dates(a.due_date.as_ref(), b.due_date.as_ref(), order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        },
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sorts records in place.
pub fn sort_todos(todos: &mut [TodoReadProjection], field: SortField, order: SortOrder) {
    todos.sort_by(|a, b| compare_todos(a, b, field, order));
}
