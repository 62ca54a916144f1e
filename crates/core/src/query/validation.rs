//! Domain checks on raw list-todos parameters.
//!
//! Checks run in a fixed order: page, limit, status, sort, order. Callers
//! that can only report one problem report the first.

use crate::constants::{MAX_LIMIT, MIN_LIMIT};
use crate::error::{ValidationError, Violation};
use crate::todo::TodoStatus;

use super::{ListTodosParams, SortField, SortOrder};

fn page_violation() -> Violation {
    Violation::new("page", "page must be >= 1")
}

fn limit_violation(limit: i64) -> Violation {
    if limit < MIN_LIMIT {
        Violation::new("limit", format!("limit must be >= {MIN_LIMIT}"))
    } else {
        Violation::new("limit", format!("limit must be <= {MAX_LIMIT}"))
    }
}

impl ListTodosParams {
    /// Returns every violated constraint, in check order. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.page < 1 {
            violations.push(page_violation());
        }

        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            violations.push(limit_violation(self.limit));
        }

        if let Some(status) = self.status.as_deref() {
            if let Err(e) = status.parse::<TodoStatus>() {
                violations.push(Violation::new(e.field, e.to_string()));
            }
        }

        if let Err(e) = self.sort.parse::<SortField>() {
            violations.push(Violation::new(e.field, e.to_string()));
        }

        if let Err(e) = self.order.parse::<SortOrder>() {
            violations.push(Violation::new(e.field, e.to_string()));
        }

        violations
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Fails with the first violation, formatted as `Invalid parameter: <message>`.
pub fn validate_list_todos_params(params: &ListTodosParams) -> Result<(), ValidationError> {
    match params.validate().first() {
        Some(violation) => Err(ValidationError::from_violation(violation)),
        None => Ok(()),
    }
}
