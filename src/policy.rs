//! Owned policy bundling requirements with an optional blacklist.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::blacklist::{Blacklist, BlacklistError};
use crate::checklist::{ChecklistItem, get_password_checklist};
use crate::config::{self, ConfigError};
use crate::evaluator::evaluate;
use crate::matching::match_with;
use crate::requirements::PasswordRequirements;
use crate::types::{MatchResult, PasswordValidationResult};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid password policy configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
}

/// Requirements plus an optional common password list.
///
/// Without a blacklist every method returns exactly what the matching free
/// function returns.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    requirements: PasswordRequirements,
    blacklist: Option<Blacklist>,
}

impl PasswordPolicy {
    pub fn new(requirements: PasswordRequirements) -> Self {
        Self {
            requirements,
            blacklist: None,
        }
    }

    /// Rejects passwords found in `blacklist`.
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    /// Builds a policy from `PWD_POLICY_*` environment variables.
    ///
    /// The blacklist is only loaded when `PWD_POLICY_BLACKLIST_PATH` is set.
    pub fn from_env() -> Result<Self, PolicyError> {
        let policy = Self::new(config::requirements_from_env()?);
        match config::blacklist_path() {
            Some(path) => Ok(policy.with_blacklist(Blacklist::from_path(path)?)),
            None => Ok(policy),
        }
    }

    pub fn requirements(&self) -> &PasswordRequirements {
        &self.requirements
    }

    pub fn blacklist(&self) -> Option<&Blacklist> {
        self.blacklist.as_ref()
    }

    pub fn validate(&self, password: &str) -> PasswordValidationResult {
        evaluate(password, &self.requirements, self.blacklist.as_ref())
    }

    pub fn validate_secret(&self, password: &SecretString) -> PasswordValidationResult {
        self.validate(password.expose_secret())
    }

    pub fn validate_match(&self, password: &str, confirmation: &str) -> MatchResult {
        match_with(
            password,
            confirmation,
            &self.requirements,
            self.blacklist.as_ref(),
        )
    }

    pub fn validate_secret_match(
        &self,
        password: &SecretString,
        confirmation: &SecretString,
    ) -> MatchResult {
        self.validate_match(password.expose_secret(), confirmation.expose_secret())
    }

    pub fn checklist(&self, password: &str) -> Vec<ChecklistItem> {
        get_password_checklist(password, &self.requirements)
    }

    pub fn percentage(&self, password: &str) -> u8 {
        self.validate(password).score
    }
}
