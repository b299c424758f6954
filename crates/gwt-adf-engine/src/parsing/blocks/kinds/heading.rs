use std::sync::OnceLock;

use regex::Regex;

/// Test-case title block type with owned pattern.
///
/// A title is `CT`, exactly two ASCII digits, then ` - `. Three-digit
/// numbers do not match and fall through to the generic paragraph rule.
pub struct CaseHeading;

impl CaseHeading {
    pub const PATTERN: &'static str = r"^CT[0-9]{2} - ";

    pub fn matches(trimmed: &str) -> bool {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid heading regex"))
            .is_match(trimmed)
    }
}
