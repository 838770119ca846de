//! Password policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::requirements::PasswordRequirements;
use crate::sections::{
    Section, SectionOutcome, blacklist_section, character_variety_section, diversity_section,
    length_section, pattern_analysis_section, sequence_section,
};
use crate::types::{PasswordValidationResult, Violation};

/// Quiet period before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Validates a password against the given requirements.
///
/// Leading and trailing whitespace is trimmed before any rule runs. An
/// empty or blank password short-circuits with a score of 0.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{PasswordRequirements, PasswordStrength, validate_password};
///
/// let result = validate_password("MyStr0ng!Pass", &PasswordRequirements::default());
/// assert!(result.is_valid);
/// assert_eq!(result.strength, PasswordStrength::Strong);
/// ```
pub fn validate_password(
    password: &str,
    requirements: &PasswordRequirements,
) -> PasswordValidationResult {
    evaluate(password, requirements, None)
}

/// Same as [`validate_password`] for a password held in a secret.
pub fn validate_secret(
    password: &SecretString,
    requirements: &PasswordRequirements,
) -> PasswordValidationResult {
    validate_password(password.expose_secret(), requirements)
}

/// Score of the password, `0..=100`.
pub fn get_password_strength_percentage(password: &str, requirements: &PasswordRequirements) -> u8 {
    validate_password(password, requirements).score
}

/// Whitespace and the byte order mark are stripped from both ends.
fn trim_password(password: &str) -> &str {
    password.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub(crate) fn evaluate(
    password: &str,
    requirements: &PasswordRequirements,
    blacklist: Option<&Blacklist>,
) -> PasswordValidationResult {
    if password.is_empty() {
        return PasswordValidationResult::rejected(Violation::Required);
    }
    let pwd = trim_password(password);
    if pwd.is_empty() {
        return PasswordValidationResult::rejected(Violation::Blank);
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("diversity", diversity_section),
        ("pattern", pattern_analysis_section),
        ("sequence", sequence_section),
    ];

    let mut total = SectionOutcome::default();
    for (_section_name, section_fn) in sections {
        let outcome = section_fn(pwd, requirements);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            section = _section_name,
            points = outcome.points,
            violations = outcome.violations.len(),
            "section evaluated"
        );
        total.merge(outcome);
    }

    if let Some(blacklist) = blacklist {
        total.merge(blacklist_section(pwd, blacklist));
    }

    let result = PasswordValidationResult::from_violations(total.violations, total.points);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = result.score,
        strength = %result.strength,
        errors = result.errors.len(),
        "password evaluated"
    );

    result
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled meanwhile (the user kept
/// typing) nothing is sent.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    requirements: &PasswordRequirements,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordValidationResult>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluation cancelled");
        return;
    }

    let result = validate_secret(password, requirements);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to send password evaluation result: {}", _e);
    }
}
