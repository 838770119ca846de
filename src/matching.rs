//! Password confirmation checks.

use crate::blacklist::Blacklist;
use crate::evaluator::evaluate;
use crate::requirements::PasswordRequirements;
use crate::types::MatchResult;

pub const MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Exact comparison: case and whitespace sensitive, no normalization.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Validates the password, then checks the confirmation against it.
///
/// The confirmation is only looked at once the password itself is valid.
pub fn validate_password_match(
    password: &str,
    confirmation: &str,
    requirements: &PasswordRequirements,
) -> MatchResult {
    match_with(password, confirmation, requirements, None)
}

pub(crate) fn match_with(
    password: &str,
    confirmation: &str,
    requirements: &PasswordRequirements,
    blacklist: Option<&Blacklist>,
) -> MatchResult {
    let result = evaluate(password, requirements, blacklist);
    if !result.is_valid {
        return MatchResult::failed(result.message);
    }
    if !passwords_match(password, confirmation) {
        return MatchResult::failed(MISMATCH_MESSAGE);
    }
    MatchResult::ok()
}
