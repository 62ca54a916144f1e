//! Environment variable parsing with warn-level logging for invalid values.

use crate::error::ConfigError;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a required, non-empty environment variable.
pub fn env_required(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Edition 2024 marks env mutation unsafe; each test uses a unique variable name.
    fn set(var: &str, value: &str) {
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TODO_READ_ENV_PARSE_VALID_40211";
        set(var_name, "5433");
        let result: u16 = env_parse_with_default(var_name, 5432);
        assert_eq!(result, 5433);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TODO_READ_ENV_PARSE_INVALID_40212";
        set(var_name, "banana");
        let result: u16 = env_parse_with_default(var_name, 5432);
        assert_eq!(result, 5432);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TODO_READ_ENV_PARSE_MISSING_40213";
        unset(var_name);
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn test_env_required_present() {
        let var_name = "TODO_READ_ENV_REQUIRED_40214";
        set(var_name, "db.internal");
        assert_eq!(env_required(var_name).unwrap(), "db.internal");
        unset(var_name);
    }

    #[test]
    fn test_env_required_empty_is_missing() {
        let var_name = "TODO_READ_ENV_REQUIRED_EMPTY_40215";
        set(var_name, "");
        let err = env_required(var_name).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(v) if v == var_name));
        assert_eq!(err.to_string(), format!("{var_name} environment variable is required"));
        unset(var_name);
    }
}
