//! Length section - scores password length against the minimum.

use super::SectionOutcome;
use crate::requirements::PasswordRequirements;
use crate::types::Violation;

/// Scores the password length. Exactly one tier applies.
///
/// # Returns
/// - 10 points and a length violation when shorter than `min_length`
/// - 20 points below 12 characters
/// - 30 points below 16 characters
/// - 40 points otherwise
pub fn length_section(password: &str, requirements: &PasswordRequirements) -> SectionOutcome {
    let len = password.chars().count();
    if len < requirements.min_length {
        return SectionOutcome::violation(
            10,
            Violation::TooShort {
                min_length: requirements.min_length,
            },
        );
    }
    match len {
        0..12 => SectionOutcome::points(20),
        12..16 => SectionOutcome::points(30),
        _ => SectionOutcome::points(40),
    }
}
