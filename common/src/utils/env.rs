//! Environment variable access with validation.
//!
//! Values are trimmed and must be non-empty to count as set. The snapshot
//! helper feeds the environment layer of [`crate::config::ConfigProvider`].

use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when reading a single environment variable.
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error("Environment variable '{name}' not found.")]
    NotFound { name: String },

    /// Environment variable contains invalid UTF-8 characters
    #[error("Environment variable '{name}' contains invalid UTF-8 characters.")]
    InvalidUtf8 { name: String },

    /// Environment variable is set but contains only whitespace or is empty
    #[error("Environment variable '{name}' is empty.")]
    Empty { name: String },
}

/// Namespace for environment helpers.
pub struct EnvUtils;

impl EnvUtils {
    /// `true` if `name` is set to something other than whitespace.
    pub fn has_non_empty_var(name: &str) -> bool {
        Self::get_validated_var(name).is_ok()
    }

    /// Reads `name`, trimmed.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::NotFound`] when unset, [`EnvVarError::Empty`] when
    /// blank and [`EnvVarError::InvalidUtf8`] when not valid Unicode.
    pub fn get_validated_var(name: &str) -> Result<String, EnvVarError> {
        match std::env::var(name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(EnvVarError::Empty {
                        name: name.to_string(),
                    })
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }

    pub fn get_optional_var(name: &str) -> Option<String> {
        Self::get_validated_var(name).ok()
    }

    /// Copies every Unicode environment variable of the current process.
    ///
    /// Variables whose name or value is not valid Unicode are skipped
    /// rather than aborting the snapshot.
    pub fn snapshot() -> HashMap<String, String> {
        std::env::vars_os()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                let value = value.into_string().ok()?;
                Some((key, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};

    // Each test owns a distinct variable name, so parallel tests cannot
    // observe each other's writes.

    #[test]
    fn test_validated_var_is_trimmed() {
        let name = "KEYSTONE_TEST_ENV_TRIMMED";
        unsafe { std::env::set_var(name, "  value  ") };
        assert_eq!(assert_ok!(EnvUtils::get_validated_var(name)), "value");
        assert!(EnvUtils::has_non_empty_var(name));
        unsafe { std::env::remove_var(name) };
    }

    #[test]
    fn test_blank_var_is_empty_error() {
        let name = "KEYSTONE_TEST_ENV_BLANK";
        unsafe { std::env::set_var(name, "   ") };
        assert_matches!(
            EnvUtils::get_validated_var(name),
            Err(EnvVarError::Empty { .. })
        );
        assert!(EnvUtils::get_optional_var(name).is_none());
        unsafe { std::env::remove_var(name) };
    }

    #[test]
    fn test_unset_var_is_not_found() {
        let name = "KEYSTONE_TEST_ENV_NEVER_SET";
        assert_matches!(
            EnvUtils::get_validated_var(name),
            Err(EnvVarError::NotFound { .. })
        );
        assert!(!EnvUtils::has_non_empty_var(name));
    }

    #[test]
    fn test_snapshot_contains_set_variable() {
        let name = "KEYSTONE_TEST_ENV_SNAPSHOT";
        unsafe { std::env::set_var(name, "present") };
        let snapshot = EnvUtils::snapshot();
        assert_eq!(snapshot.get(name).map(String::as_str), Some("present"));
        unsafe { std::env::remove_var(name) };
    }
}
