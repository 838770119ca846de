//! Password policy validation library
//!
//! Scores a password against configurable requirements and returns a
//! structured verdict (validity, strength tier, score, violated rules),
//! together with the helpers a registration or password reset form needs:
//! confirmation matching, a live requirement checklist and strength meter
//! classes.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serializes requirements and results (camelCase JSON)
//!
//! The JSON shape is only covered by tests built with the `serde` feature;
//! run the suite with `cargo test --all-features` to include it.
//!
//! # Environment Variables
//!
//! See [`config`] for the `PWD_POLICY_*` variables read by
//! [`PasswordPolicy::from_env`].
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PasswordRequirements, validate_password, validate_password_match};
//!
//! let requirements = PasswordRequirements::default();
//!
//! let result = validate_password("Password1!", &requirements);
//! assert!(!result.is_valid);
//! println!("{} ({}/100)", result.message, result.score);
//!
//! let check = validate_password_match("MyStr0ng!Pass", "MyStr0ng!Pass", &requirements);
//! assert!(check.is_valid);
//! ```

// Internal modules
mod blacklist;
mod checklist;
pub mod config;
mod display;
mod evaluator;
mod matching;
mod policy;
mod requirements;
mod sections;
mod types;

// Public API
pub use blacklist::{Blacklist, BlacklistError};
pub use checklist::{ChecklistItem, MET_ICON, UNMET_ICON, get_password_checklist};
pub use config::ConfigError;
pub use display::{
    StrengthLabel, get_password_strength_color, get_password_strength_label,
    get_password_strength_width,
};
pub use evaluator::{get_password_strength_percentage, validate_password, validate_secret};
pub use matching::{MISMATCH_MESSAGE, passwords_match, validate_password_match};
pub use policy::{PasswordPolicy, PolicyError};
pub use requirements::{DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARS, PasswordRequirements};
pub use types::{MatchResult, PasswordStrength, PasswordValidationResult, Violation};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, validate_password_tx};
