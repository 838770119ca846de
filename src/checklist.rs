//! Requirement checklist for progressive disclosure while typing.
//!
//! The checklist looks at the password exactly as typed, without trimming,
//! so it follows every keystroke including trailing whitespace. A rule whose
//! requirement is disabled always shows as met. Both behaviors are relied
//! on by form components and must not be changed to match the evaluator.

use crate::requirements::PasswordRequirements;
use crate::sections::CharacterClass;

pub const MET_ICON: &str = "✓";
pub const UNMET_ICON: &str = "○";

/// Status of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChecklistItem {
    pub requirement: String,
    pub met: bool,
    pub icon: &'static str,
}

impl ChecklistItem {
    fn new(requirement: impl Into<String>, met: bool) -> Self {
        Self {
            requirement: requirement.into(),
            met,
            icon: if met { MET_ICON } else { UNMET_ICON },
        }
    }
}

/// Returns five items: length, uppercase, lowercase, number, special character.
pub fn get_password_checklist(
    password: &str,
    requirements: &PasswordRequirements,
) -> Vec<ChecklistItem> {
    let mut items = Vec::with_capacity(1 + CharacterClass::ALL.len());
    items.push(ChecklistItem::new(
        format!("At least {} characters", requirements.min_length),
        password.chars().count() >= requirements.min_length,
    ));
    items.extend(CharacterClass::ALL.iter().map(|class| {
        let met = !class.is_required(requirements) || class.is_present(password, requirements);
        ChecklistItem::new(class.label(), met)
    }));
    items
}
