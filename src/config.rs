//! Environment configuration
//!
//! Every variable is optional; unset variables keep the defaults of
//! [`PasswordRequirements`].
//!
//! - `PWD_POLICY_MIN_LENGTH`: positive integer
//! - `PWD_POLICY_REQUIRE_UPPERCASE`, `PWD_POLICY_REQUIRE_LOWERCASE`,
//!   `PWD_POLICY_REQUIRE_NUMBERS`, `PWD_POLICY_REQUIRE_SPECIAL_CHARS`:
//!   `true`/`false`/`1`/`0`/`yes`/`no`/`on`/`off`
//! - `PWD_POLICY_SPECIAL_CHARS`: non-empty set of special characters
//! - `PWD_POLICY_BLACKLIST_PATH`: common password list to load

use std::path::PathBuf;
use thiserror::Error;

use crate::requirements::PasswordRequirements;

pub const MIN_LENGTH_VAR: &str = "PWD_POLICY_MIN_LENGTH";
pub const REQUIRE_UPPERCASE_VAR: &str = "PWD_POLICY_REQUIRE_UPPERCASE";
pub const REQUIRE_LOWERCASE_VAR: &str = "PWD_POLICY_REQUIRE_LOWERCASE";
pub const REQUIRE_NUMBERS_VAR: &str = "PWD_POLICY_REQUIRE_NUMBERS";
pub const REQUIRE_SPECIAL_CHARS_VAR: &str = "PWD_POLICY_REQUIRE_SPECIAL_CHARS";
pub const SPECIAL_CHARS_VAR: &str = "PWD_POLICY_SPECIAL_CHARS";
pub const BLACKLIST_PATH_VAR: &str = "PWD_POLICY_BLACKLIST_PATH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    EmptySpecialChars { var: &'static str },
}

fn read_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_min_length(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var: MIN_LENGTH_VAR,
            value: value.to_string(),
        }),
    }
}

/// Reads requirements from the environment, starting from the defaults.
pub fn requirements_from_env() -> Result<PasswordRequirements, ConfigError> {
    let mut requirements = PasswordRequirements::default();

    if let Some(value) = read_var(MIN_LENGTH_VAR) {
        requirements.min_length = parse_min_length(&value)?;
    }

    let flags: [(&'static str, &mut bool); 4] = [
        (REQUIRE_UPPERCASE_VAR, &mut requirements.require_uppercase),
        (REQUIRE_LOWERCASE_VAR, &mut requirements.require_lowercase),
        (REQUIRE_NUMBERS_VAR, &mut requirements.require_numbers),
        (REQUIRE_SPECIAL_CHARS_VAR, &mut requirements.require_special_chars),
    ];
    for (var, flag) in flags {
        if let Some(value) = read_var(var) {
            *flag = parse_bool(var, &value)?;
        }
    }

    if let Some(value) = read_var(SPECIAL_CHARS_VAR) {
        if value.is_empty() {
            return Err(ConfigError::EmptySpecialChars {
                var: SPECIAL_CHARS_VAR,
            });
        }
        requirements.special_chars = value;
    }

    Ok(requirements)
}

/// Returns the blacklist path, if one is configured.
pub fn blacklist_path() -> Option<PathBuf> {
    read_var(BLACKLIST_PATH_VAR)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

impl PasswordRequirements {
    /// Shorthand for [`requirements_from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        requirements_from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 7] = [
        MIN_LENGTH_VAR,
        REQUIRE_UPPERCASE_VAR,
        REQUIRE_LOWERCASE_VAR,
        REQUIRE_NUMBERS_VAR,
        REQUIRE_SPECIAL_CHARS_VAR,
        SPECIAL_CHARS_VAR,
        BLACKLIST_PATH_VAR,
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for var in ALL_VARS {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { std::env::remove_var(var); }
        }
    }

    #[test]
    #[serial]
    fn test_requirements_from_env_defaults() {
        clear_env();
        let req = requirements_from_env().expect("defaults should load");
        assert_eq!(req, PasswordRequirements::default());
        assert_eq!(blacklist_path(), None);
    }

    #[test]
    #[serial]
    fn test_requirements_from_env_overrides() {
        clear_env();
        set_env(MIN_LENGTH_VAR, " 12 ");
        set_env(REQUIRE_UPPERCASE_VAR, "false");
        set_env(REQUIRE_NUMBERS_VAR, "No");
        set_env(REQUIRE_SPECIAL_CHARS_VAR, "1");
        set_env(SPECIAL_CHARS_VAR, "~^");

        let req = PasswordRequirements::from_env().expect("overrides should load");
        assert_eq!(req.min_length, 12);
        assert!(!req.require_uppercase);
        assert!(req.require_lowercase);
        assert!(!req.require_numbers);
        assert!(req.require_special_chars);
        assert_eq!(req.special_chars, "~^");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_requirements_from_env_invalid_number() {
        clear_env();
        set_env(MIN_LENGTH_VAR, "0");
        assert_eq!(
            requirements_from_env(),
            Err(ConfigError::InvalidNumber {
                var: MIN_LENGTH_VAR,
                value: "0".to_string(),
            })
        );

        set_env(MIN_LENGTH_VAR, "eight");
        assert!(matches!(
            requirements_from_env(),
            Err(ConfigError::InvalidNumber { .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_requirements_from_env_invalid_bool() {
        clear_env();
        set_env(REQUIRE_LOWERCASE_VAR, "maybe");
        assert_eq!(
            requirements_from_env(),
            Err(ConfigError::InvalidBool {
                var: REQUIRE_LOWERCASE_VAR,
                value: "maybe".to_string(),
            })
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_requirements_from_env_empty_special_chars() {
        clear_env();
        set_env(SPECIAL_CHARS_VAR, "");
        assert!(matches!(
            requirements_from_env(),
            Err(ConfigError::EmptySpecialChars { .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        clear_env();
        set_env(BLACKLIST_PATH_VAR, "/custom/path/blacklist.txt");
        assert_eq!(
            blacklist_path(),
            Some(PathBuf::from("/custom/path/blacklist.txt"))
        );

        set_env(BLACKLIST_PATH_VAR, "   ");
        assert_eq!(blacklist_path(), None);

        clear_env();
    }
}
