//! Blacklist management module
//!
//! Handles loading and querying a list of common passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of passwords that must not be used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads a blacklist from a newline separated file.
    ///
    /// Lines are trimmed and lowercased; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// let blacklist = pwd_policy::Blacklist::from_path("/etc/myapp/blacklist.txt")?;
    /// assert!(blacklist.contains("Password"));
    /// # Ok::<(), pwd_policy::BlacklistError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::from_iter(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the password is blacklisted (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}
