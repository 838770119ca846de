//! Result types produced by the evaluator.

use std::fmt;
use thiserror::Error;

/// Strength tier, derived from score and error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Classifies a clamped score given the number of violations.
    pub fn classify(score: u8, error_count: usize) -> Self {
        if score >= 70 && error_count == 0 {
            PasswordStrength::Strong
        } else if score >= 50 && error_count <= 1 {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated rule. The `Display` output is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Password is required")]
    Required,
    #[error("Password cannot be empty")]
    Blank,
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },
    #[error("Password must contain at least one uppercase letter (A-Z)")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter (a-z)")]
    MissingLowercase,
    #[error("Password must contain at least one number (0-9)")]
    MissingNumber,
    #[error("Password must contain at least one special character (!@#$%^&*)")]
    MissingSpecial,
    #[error("Password contains common or predictable patterns")]
    WeakPattern,
    #[error("Password contains sequential or repeated characters")]
    SequentialOrRepeated,
    #[error("Password is too common")]
    CommonPassword,
}

/// Verdict for a single password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub strength: PasswordStrength,
    /// Violation messages in the order the rules fired
    pub errors: Vec<String>,
    /// Typed violations, index aligned with `errors`
    #[cfg_attr(feature = "serde", serde(skip))]
    pub violations: Vec<Violation>,
    pub message: String,
    /// Score in `0..=100`
    pub score: u8,
}

impl PasswordValidationResult {
    /// Builds the verdict from the collected violations and the raw score.
    ///
    /// The score is clamped to `0..=100` before classification.
    pub(crate) fn from_violations(violations: Vec<Violation>, raw_score: i32) -> Self {
        let score = raw_score.clamp(0, 100) as u8;
        let strength = PasswordStrength::classify(score, violations.len());
        let errors: Vec<String> = violations.iter().map(ToString::to_string).collect();
        let is_valid = errors.is_empty() && strength != PasswordStrength::Weak;

        let message = if is_valid {
            format!("Strong password (Score: {score}/100)")
        } else {
            errors
                .first()
                .cloned()
                .unwrap_or_else(|| "Invalid password".to_string())
        };

        Self {
            is_valid,
            strength,
            errors,
            violations,
            message,
            score,
        }
    }

    /// Short-circuit verdict for missing input; no rule is scored.
    pub(crate) fn rejected(violation: Violation) -> Self {
        let message = violation.to_string();
        Self {
            is_valid: false,
            strength: PasswordStrength::Weak,
            errors: vec![message.clone()],
            violations: vec![violation],
            message,
            score: 0,
        }
    }
}

/// Outcome of checking a password together with its confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchResult {
    pub is_valid: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl MatchResult {
    pub(crate) fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub(crate) fn failed(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}
