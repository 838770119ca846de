//! Pattern analysis section - detects predictable prefixes and repeated characters.

use super::SectionOutcome;
use crate::requirements::PasswordRequirements;
use crate::types::Violation;

const WEAK_PATTERN_PENALTY: i32 = -20;
const SEQUENCE_PENALTY: i32 = -10;

/// A predictable shape a password can have.
struct WeakPattern {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    name: &'static str,
    matches: fn(&str) -> bool,
}

/// Checked in order; only the first match is penalized.
const WEAK_PATTERNS: &[WeakPattern] = &[
    WeakPattern {
        name: "numeric prefix",
        matches: |p| p.starts_with("123"),
    },
    WeakPattern {
        name: "alphabet prefix",
        matches: |p| starts_with_ignore_ascii_case(p, "abc"),
    },
    WeakPattern {
        name: "password prefix",
        matches: |p| starts_with_ignore_ascii_case(p, "password"),
    },
    WeakPattern {
        name: "leading digit run",
        matches: |p| p.chars().take_while(|c| c.is_ascii_digit()).count() >= 8,
    },
    WeakPattern {
        name: "repeated character",
        matches: has_triple_repeat,
    },
];

fn starts_with_ignore_ascii_case(password: &str, prefix: &str) -> bool {
    password
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Line terminators are never treated as repeatable characters.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Three identical characters in a row.
fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| !is_line_terminator(w[0]) && w[0] == w[1] && w[1] == w[2])
}

/// Two characters followed by themselves mirrored (`c1 c2 c2 c1`).
fn has_mirrored_pair(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(4).any(|w| {
        !w.iter().copied().any(is_line_terminator) && w[2] == w[1] && w[3] == w[0]
    })
}

/// Penalizes the first predictable pattern found.
///
/// # Returns
/// - A 20 point penalty and a weak-pattern violation on the first match
/// - An empty outcome otherwise
pub fn pattern_analysis_section(password: &str, _: &PasswordRequirements) -> SectionOutcome {
    match WEAK_PATTERNS.iter().find(|pattern| (pattern.matches)(password)) {
        Some(_pattern) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(pattern = _pattern.name, "weak pattern matched");
            SectionOutcome::violation(WEAK_PATTERN_PENALTY, Violation::WeakPattern)
        }
        None => SectionOutcome::default(),
    }
}

/// Penalizes mirrored character pairs, independently of the weak patterns.
pub fn sequence_section(password: &str, _: &PasswordRequirements) -> SectionOutcome {
    if has_mirrored_pair(password) {
        return SectionOutcome::violation(SEQUENCE_PENALTY, Violation::SequentialOrRepeated);
    }
    SectionOutcome::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weak(password: &str) -> bool {
        !pattern_analysis_section(password, &PasswordRequirements::default())
            .violations
            .is_empty()
    }

    fn mirrored(password: &str) -> bool {
        !sequence_section(password, &PasswordRequirements::default())
            .violations
            .is_empty()
    }

    #[test]
    fn test_pattern_section_prefixes() {
        assert!(weak("123Secure!x"));
        assert!(weak("abcSecure!1"));
        assert!(weak("ABCSecure!1"));
        assert!(weak("PassWord99!"));
        assert!(weak("PASSWORD"));
        assert!(!weak("Secure123!x"));
        assert!(!weak("xabc123Pw!"));
    }

    #[test]
    fn test_pattern_section_leading_digits() {
        assert!(weak("98765432Ab!"));
        assert!(!weak("9876543Ab!"));
        assert!(!weak("Ab!98765432"));
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        assert!(weak("Goaaal2024!"));
        assert!(weak("Xy!!!9zzQ"));
        assert!(!weak("Goaal2024!"));
    }

    #[test]
    fn test_pattern_section_line_terminators_do_not_repeat() {
        assert!(!weak("Ab1!\n\n\nxyz"));
        assert!(weak("Ab1!   xyz"));
    }

    #[test]
    fn test_repeat_rules_count_characters_not_code_units() {
        // each emoji is one character, so three in a row is a repeat
        assert!(weak("Ab1!😀😀😀x"));
        assert!(mirrored("x😀🔒🔒😀"));
        assert!(!weak("Ab1!😀🔒😀x"));
    }

    #[test]
    fn test_pattern_section_single_penalty() {
        // Matches several patterns but is penalized once
        let result = pattern_analysis_section("123aaa", &PasswordRequirements::default());
        assert_eq!(
            result,
            SectionOutcome::violation(-20, Violation::WeakPattern)
        );
    }

    #[test]
    fn test_pattern_section_non_ascii_prefix() {
        assert!(!weak("é"));
        assert!(!weak("ab"));
    }

    #[test]
    fn test_sequence_section_mirrored_pairs() {
        assert!(mirrored("xAbbAx"));
        assert!(mirrored("1221"));
        assert!(mirrored("aaaa"));
        assert!(!mirrored("abab"));
        assert!(!mirrored("MyStr0ng!Pass"));
        assert!(!mirrored("abb"));
        // the mirrored character must be the same case
        assert!(!mirrored("Xyyx"));
    }

    #[test]
    fn test_sequence_section_penalty() {
        let result = sequence_section("xyyx", &PasswordRequirements::default());
        assert_eq!(
            result,
            SectionOutcome::violation(-10, Violation::SequentialOrRepeated)
        );
    }
}
