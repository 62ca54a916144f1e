//! Todo lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// Status of a todo item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    pub const ALL_VARIANTS_STR: &'static str = "pending, completed";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match: `"PENDING"` is rejected.
impl FromStr for TodoStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError {
                field: "status",
                allowed: Self::ALL_VARIANTS_STR,
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("pending".parse::<TodoStatus>(), Ok(TodoStatus::Pending));
        assert_eq!("completed".parse::<TodoStatus>(), Ok(TodoStatus::Completed));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "PENDING".parse::<TodoStatus>().unwrap_err();
        assert_eq!(err.to_string(), "status must be one of [pending, completed]");
        assert!("Completed".parse::<TodoStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&TodoStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: TodoStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, TodoStatus::Pending);
    }
}
