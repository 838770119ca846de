//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::SectionOutcome;
use crate::requirements::PasswordRequirements;
use crate::types::Violation;

const CLASS_POINTS: i32 = 15;
const DIVERSITY_BONUS: i32 = 10;

/// One of the four character classes a requirement can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl CharacterClass {
    /// Evaluation and checklist order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Number,
        CharacterClass::Special,
    ];

    pub fn is_required(&self, requirements: &PasswordRequirements) -> bool {
        match self {
            CharacterClass::Uppercase => requirements.require_uppercase,
            CharacterClass::Lowercase => requirements.require_lowercase,
            CharacterClass::Number => requirements.require_numbers,
            CharacterClass::Special => requirements.require_special_chars,
        }
    }

    pub fn is_present(&self, password: &str, requirements: &PasswordRequirements) -> bool {
        match self {
            CharacterClass::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            CharacterClass::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            CharacterClass::Number => password.chars().any(|c| c.is_ascii_digit()),
            CharacterClass::Special => password.chars().any(|c| requirements.is_special(c)),
        }
    }

    pub fn missing_violation(&self) -> Violation {
        match self {
            CharacterClass::Uppercase => Violation::MissingUppercase,
            CharacterClass::Lowercase => Violation::MissingLowercase,
            CharacterClass::Number => Violation::MissingNumber,
            CharacterClass::Special => Violation::MissingSpecial,
        }
    }

    /// Checklist wording.
    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "One uppercase letter (A-Z)",
            CharacterClass::Lowercase => "One lowercase letter (a-z)",
            CharacterClass::Number => "One number (0-9)",
            CharacterClass::Special => "One special character (!@#$%^&*)",
        }
    }
}

/// Checks each required character class.
///
/// Required and present classes earn 15 points each; required and missing
/// classes add a violation. Classes that are not required are skipped.
pub fn character_variety_section(
    password: &str,
    requirements: &PasswordRequirements,
) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    for class in CharacterClass::ALL {
        if !class.is_required(requirements) {
            continue;
        }
        if class.is_present(password, requirements) {
            outcome.points += CLASS_POINTS;
        } else {
            outcome.violations.push(class.missing_violation());
        }
    }
    outcome
}

/// Awards a bonus when all four classes appear, whatever is required.
pub fn diversity_section(password: &str, requirements: &PasswordRequirements) -> SectionOutcome {
    let all_present = CharacterClass::ALL
        .iter()
        .all(|class| class.is_present(password, requirements));
    SectionOutcome::points(if all_present { DIVERSITY_BONUS } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section("lowercase123!", &PasswordRequirements::default());
        assert_eq!(result.violations, vec![Violation::MissingUppercase]);
        assert_eq!(result.points, 45);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = character_variety_section("UPPERCASE123!", &PasswordRequirements::default());
        assert_eq!(result.violations, vec![Violation::MissingLowercase]);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = character_variety_section("NoNumbers!", &PasswordRequirements::default());
        assert_eq!(result.violations, vec![Violation::MissingNumber]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = character_variety_section("NoSpecial123", &PasswordRequirements::default());
        assert_eq!(result.violations, vec![Violation::MissingSpecial]);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = character_variety_section("HasAll123!@#", &PasswordRequirements::default());
        assert_eq!(result, SectionOutcome::points(60));
    }

    #[test]
    fn test_variety_section_reports_in_fixed_order() {
        let result = character_variety_section("~~~~", &PasswordRequirements::default());
        assert_eq!(
            result.violations,
            vec![
                Violation::MissingUppercase,
                Violation::MissingLowercase,
                Violation::MissingNumber,
                Violation::MissingSpecial,
            ]
        );
        assert_eq!(result.points, 0);
    }

    #[test]
    fn test_variety_section_skips_disabled_classes() {
        let req = PasswordRequirements::default()
            .with_uppercase(false)
            .with_special_chars(false);
        let result = character_variety_section("lowercase123", &req);
        assert!(result.violations.is_empty());
        assert_eq!(result.points, 30);
    }

    #[test]
    fn test_variety_section_non_ascii_letters_do_not_count() {
        let result = character_variety_section("ÉCOLE123!", &PasswordRequirements::default());
        assert!(result.violations.contains(&Violation::MissingLowercase));
        // 'C', 'O', 'L', 'E' are ASCII uppercase
        assert!(!result.violations.contains(&Violation::MissingUppercase));
    }

    #[test]
    fn test_variety_section_custom_special_set() {
        let req = PasswordRequirements::default().with_special_char_set("~");
        let result = character_variety_section("Password1!", &req);
        assert_eq!(result.violations, vec![Violation::MissingSpecial]);
        let result = character_variety_section("Password1~", &req);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_diversity_section_ignores_flags() {
        let req = PasswordRequirements::default()
            .with_uppercase(false)
            .with_lowercase(false)
            .with_numbers(false)
            .with_special_chars(false);
        assert_eq!(diversity_section("Aa1!", &req).points, 10);
        assert_eq!(diversity_section("Aa1a", &req).points, 0);
    }
}
