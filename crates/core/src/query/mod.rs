//! List query parameters and the filter descriptor handed to repositories.

mod ordering;
mod validation;

pub use ordering::*;
pub use validation::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::error::{ParseEnumError, ValidationError, Violation};
use crate::todo::TodoStatus;

/// Field a todo list can be sorted by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    DueDate,
}

impl SortField {
    pub const ALL_VARIANTS_STR: &'static str = "created_at, due_date";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::CreatedAt => "created_at",
            Self::DueDate => "due_date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "due_date" => Ok(Self::DueDate),
            _ => Err(ParseEnumError {
                field: "sort",
                allowed: Self::ALL_VARIANTS_STR,
                value: s.to_owned(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const ALL_VARIANTS_STR: &'static str = "asc, desc";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseEnumError {
                field: "order",
                allowed: Self::ALL_VARIANTS_STR,
                value: s.to_owned(),
            }),
        }
    }
}

/// Raw list-todos parameters as received from a caller.
///
/// Nothing is checked at construction; see [`ListTodosParams::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTodosParams {
    pub page: i64,
    pub limit: i64,
    pub status: Option<String>,
    pub sort: String,
    pub order: String,
}

impl Default for ListTodosParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            status: None,
            sort: SortField::default().as_str().to_owned(),
            order: SortOrder::default().as_str().to_owned(),
        }
    }
}

/// Filter, sort and pagination controls for a repository `list` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryFilters {
    pub status: Option<TodoStatus>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub page: u64,
    pub limit: u64,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            status: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE.unsigned_abs(),
            limit: DEFAULT_LIMIT.unsigned_abs(),
        }
    }
}

impl QueryFilters {
    /// Rows to skip before the requested page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn enum_violation(err: ParseEnumError) -> ValidationError {
    ValidationError::from_violation(&Violation::new(err.field, err.to_string()))
}

impl TryFrom<&ListTodosParams> for QueryFilters {
    type Error = ValidationError;

    /// Validates, then copies the parameters into their typed form.
    fn try_from(params: &ListTodosParams) -> Result<Self, Self::Error> {
        validate_list_todos_params(params)?;
        // Both are >= 1 once validated.
        let page = params.page.unsigned_abs();
        let limit = params.limit.unsigned_abs();
        let status = params
            .status
            .as_deref()
            .map(str::parse::<TodoStatus>)
            .transpose()
            .map_err(enum_violation)?;
        Ok(Self {
            status,
            sort_field: params.sort.parse().map_err(enum_violation)?,
            sort_order: params.order.parse().map_err(enum_violation)?,
            page,
            limit,
        })
    }
}
