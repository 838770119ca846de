//! Password evaluation sections
//!
//! Each section scores one aspect of a trimmed password and reports the
//! rules it violated.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::{pattern_analysis_section, sequence_section};
pub use variety::{CharacterClass, character_variety_section, diversity_section};

use crate::requirements::PasswordRequirements;
use crate::types::Violation;

/// Points and violations contributed by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: i32,
    pub violations: Vec<Violation>,
}

impl SectionOutcome {
    pub fn points(points: i32) -> Self {
        Self {
            points,
            violations: Vec::new(),
        }
    }

    pub fn violation(points: i32, violation: Violation) -> Self {
        Self {
            points,
            violations: vec![violation],
        }
    }

    /// Folds another outcome into this one, keeping violation order.
    pub fn merge(&mut self, other: SectionOutcome) {
        self.points += other.points;
        self.violations.extend(other.violations);
    }
}

/// Signature shared by the requirement-driven sections.
pub type Section = fn(&str, &PasswordRequirements) -> SectionOutcome;
