//! Blacklist section - checks if password is in a common password list.

use super::SectionOutcome;
use crate::blacklist::Blacklist;
use crate::types::Violation;

const COMMON_PASSWORD_PENALTY: i32 = -20;

/// Checks the password against a loaded blacklist.
///
/// # Returns
/// - A 20 point penalty and a violation if the password is blacklisted
/// - An empty outcome otherwise
pub fn blacklist_section(password: &str, blacklist: &Blacklist) -> SectionOutcome {
    if blacklist.contains(password) {
        return SectionOutcome::violation(COMMON_PASSWORD_PENALTY, Violation::CommonPassword);
    }
    SectionOutcome::default()
}
