//! Strength meter affordances (utility CSS classes and copy).

use crate::types::PasswordStrength;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrengthLabel {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub fn get_password_strength_label(strength: PasswordStrength) -> StrengthLabel {
    match strength {
        PasswordStrength::Weak => StrengthLabel {
            label: "Weak",
            color: "text-red-600",
            description: "Password needs improvement",
        },
        PasswordStrength::Medium => StrengthLabel {
            label: "Medium",
            color: "text-yellow-600",
            description: "Password is acceptable",
        },
        PasswordStrength::Strong => StrengthLabel {
            label: "Strong",
            color: "text-green-600",
            description: "Password is secure",
        },
    }
}

/// Fill color of the meter bar.
pub fn get_password_strength_color(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "bg-red-500",
        PasswordStrength::Medium => "bg-yellow-500",
        PasswordStrength::Strong => "bg-green-500",
    }
}

/// Fill width of the meter bar.
pub fn get_password_strength_width(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Weak => "w-1/3",
        PasswordStrength::Medium => "w-2/3",
        PasswordStrength::Strong => "w-full",
    }
}
