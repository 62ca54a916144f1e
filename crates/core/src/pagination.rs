//! Page arithmetic and the list response envelope.

use serde::{Deserialize, Serialize};

use crate::todo::TodoItem;

/// Number of pages needed for `total` records at `limit` per page.
///
/// Zero records means zero pages. A `limit` of zero is treated as one.
#[must_use]
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    total.div_ceil(limit.max(1))
}

/// Pagination state attached to a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    pub page: u64,
    pub limit: u64,
    /// Records matching the filter, across all pages.
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PaginationMetadata {
    #[must_use]
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self { page, limit, total, total_pages: total_pages(total, limit) }
    }
}

/// One page of todos plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTodosResponse {
    pub data: Vec<TodoItem>,
    pub pagination: PaginationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_examples() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
        assert_eq!(total_pages(1, 1), 1);
        assert_eq!(total_pages(5, 20), 1);
    }

    #[test]
    fn test_total_pages_invariant_over_range() {
        for limit in 1..=100_u64 {
            for total in 0..=250_u64 {
                let pages = total_pages(total, limit);
                assert_eq!(pages == 0, total == 0, "total={total} limit={limit}");
                if total > 0 {
                    assert!(pages * limit >= total, "total={total} limit={limit}");
                    assert!((pages - 1) * limit < total, "total={total} limit={limit}");
                }
            }
        }
    }

    #[test]
    fn test_metadata_serializes_total_pages_camel_case() {
        let meta = PaginationMetadata::new(10, 20, 5);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 10, "limit": 20, "total": 5, "totalPages": 1})
        );
    }
}
