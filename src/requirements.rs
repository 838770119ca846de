//! Password requirements configuration.

/// Characters accepted as "special" unless configured otherwise.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Minimum length unless configured otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Rules a password is checked against.
///
/// A `min_length` of zero is accepted as-is; sanity of the configuration is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PasswordRequirements {
    /// Minimum number of characters (after trimming)
    pub min_length: usize,
    /// At least one ASCII uppercase letter
    pub require_uppercase: bool,
    /// At least one ASCII lowercase letter
    pub require_lowercase: bool,
    /// At least one ASCII digit
    pub require_numbers: bool,
    /// At least one character from `special_chars`
    pub require_special_chars: bool,
    /// Characters that count as special
    pub special_chars: String,
}

impl Default for PasswordRequirements {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special_chars: true,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }
}

impl PasswordRequirements {
    /// Sets the minimum length.
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// Sets whether an uppercase letter is required.
    pub fn with_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    /// Sets whether a lowercase letter is required.
    pub fn with_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    /// Sets whether a digit is required.
    pub fn with_numbers(mut self, required: bool) -> Self {
        self.require_numbers = required;
        self
    }

    /// Sets whether a special character is required.
    pub fn with_special_chars(mut self, required: bool) -> Self {
        self.require_special_chars = required;
        self
    }

    /// Replaces the set of characters counted as special.
    pub fn with_special_char_set(mut self, chars: impl Into<String>) -> Self {
        self.special_chars = chars.into();
        self
    }

    /// Returns `true` if `c` belongs to the configured special set.
    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(c)
    }
}
