//! Regex patterns used while cleaning up documentation block values
//!
//! All patterns are compiled once at first use via `LazyLock`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Build a case-insensitive regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. All patterns in this module are constants
/// covered by the tests below, so this fires at first access or not at all.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// Day numbers written as ordinals: `3rd`, `21st`
pub static ORDINAL_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"\b(\d{1,2})(st|nd|rd|th)\b"));

/// Any run of whitespace
pub static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\s+"));

/// A comma with uneven spacing around it
pub static LOOSE_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\s*,\s*"));

/// A trailing dot after an abbreviated month name: `Mar.`
pub static MONTH_ABBREV_DOT_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\b([a-z]{3,4})\."));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_day() {
        assert_eq!(ORDINAL_DAY_RE.replace_all("March 3rd, 2020", "$1"), "March 3, 2020");
        assert_eq!(ORDINAL_DAY_RE.replace_all("21ST Jan 2019", "$1"), "21 Jan 2019");
        assert!(!ORDINAL_DAY_RE.is_match("2020-03-03"));
    }

    #[test]
    fn test_whitespace_run() {
        assert_eq!(WHITESPACE_RUN_RE.replace_all("March   3,\t2020", " "), "March 3, 2020");
    }

    #[test]
    fn test_loose_comma() {
        assert_eq!(LOOSE_COMMA_RE.replace_all("March 3 ,2020", ", "), "March 3, 2020");
    }

    #[test]
    fn test_month_abbrev_dot() {
        assert_eq!(MONTH_ABBREV_DOT_RE.replace_all("Mar. 3, 2020", "$1"), "Mar 3, 2020");
        assert_eq!(MONTH_ABBREV_DOT_RE.replace_all("2020.03.03", "$1"), "2020.03.03");
    }
}
