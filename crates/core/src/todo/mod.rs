//! Todo records as stored on the read side, and their response shape.

mod status;

pub use status::*;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Read-side projection of a todo, as returned by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoReadProjection {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
}

/// Todo item in an API response.
///
/// Temporal fields are normalized strings: RFC 3339 UTC timestamps and
/// `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub created_at: String,
    pub updated_at: String,
    pub due_date: Option<String>,
}

/// Renders a timestamp as `2026-01-20T14:30:00Z`.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Renders a date as `2026-01-25`.
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl From<TodoReadProjection> for TodoItem {
    fn from(projection: TodoReadProjection) -> Self {
        Self {
            id: projection.id,
            title: projection.title,
            description: projection.description,
            status: projection.status,
            created_at: format_timestamp(&projection.created_at),
            updated_at: format_timestamp(&projection.updated_at),
            due_date: projection.due_date.as_ref().map(format_date),
        }
    }
}
