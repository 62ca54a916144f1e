//! Storage types shared across modules

use serde::{Deserialize, Serialize};

/// Generic paginated result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PaginatedResult<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Total number of items matching the filter, across all pages.
    pub total: u64,
    /// Offset from the start.
    pub offset: u64,
    /// Maximum items per page.
    pub limit: u64,
}

impl<T> PaginatedResult<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, offset: u64, limit: u64) -> Self {
        Self { items, total, offset, limit }
    }
}
