//! Date value canonicalization for the `Date` key
//!
//! Values are read against a fixed list of layouts and rendered as
//! `yyyy-MM-dd`. A trailing parenthetical note is carried over verbatim.

use chrono::NaiveDate;

use crate::error::DocBlockError;
use crate::parser::patterns::{
    LOOSE_COMMA_RE, MONTH_ABBREV_DOT_RE, ORDINAL_DAY_RE, WHITESPACE_RUN_RE,
};

/// Output layout
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted input layouts, tried in order
///
/// Month-first numeric layouts come before day-first ones, so `03/04/2020` is
/// read as March 4th.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d-%b-%Y",
    "%Y %B %d",
    "%Y %b %d",
];

/// Normalize spacing, ordinals and abbreviation dots before parsing
fn clean_date_text(text: &str) -> String {
    let text = ORDINAL_DAY_RE.replace_all(text, "$1");
    let text = MONTH_ABBREV_DOT_RE.replace_all(&text, "$1");
    let text = LOOSE_COMMA_RE.replace_all(&text, ", ");
    WHITESPACE_RUN_RE
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

/// Parse a date written in any of the accepted layouts
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let cleaned = clean_date_text(text);
    if cleaned.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
}

/// Rewrite a `Date` value into canonical form
///
/// The original text is kept when the canonical rendering would be longer
/// than it.
pub fn canonicalize_date(value: &str) -> Result<String, DocBlockError> {
    let value = value.trim();
    let (date_text, annotation) = match value.find('(') {
        Some(idx) => (value[..idx].trim(), Some(value[idx..].trim_end())),
        None => (value, None),
    };

    let date = parse_date(date_text).ok_or_else(|| DocBlockError::BadDate {
        value: value.to_string(),
    })?;

    let canonical = date.format(CANONICAL_DATE_FORMAT).to_string();
    let rendered = if canonical.len() <= date_text.len() {
        canonical
    } else {
        date_text.to_string()
    };

    Ok(match annotation {
        Some(note) => format!("{rendered} {note}"),
        None => rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_month_name() {
        assert_eq!(canonicalize_date("March 3, 2020").unwrap(), "2020-03-03");
    }

    #[test]
    fn test_short_month_and_ordinal() {
        assert_eq!(canonicalize_date("Mar. 3rd, 2020").unwrap(), "2020-03-03");
        assert_eq!(canonicalize_date("21 Jan 2019").unwrap(), "2019-01-21");
    }

    #[test]
    fn test_us_numeric() {
        assert_eq!(canonicalize_date("12/25/2018").unwrap(), "2018-12-25");
    }

    #[test]
    fn test_day_first_fallback() {
        assert_eq!(canonicalize_date("25/12/2018").unwrap(), "2018-12-25");
    }

    #[test]
    fn test_already_canonical() {
        assert_eq!(canonicalize_date("2020-03-03").unwrap(), "2020-03-03");
    }

    #[test]
    fn test_slash_iso() {
        assert_eq!(canonicalize_date("2020/03/03").unwrap(), "2020-03-03");
    }

    #[test]
    fn test_shorter_original_is_kept() {
        // "2020-3-3" is a valid date but the canonical form is longer
        assert_eq!(canonicalize_date("2020-3-3").unwrap(), "2020-3-3");
        assert_eq!(canonicalize_date("1/2/2020").unwrap(), "1/2/2020");
    }

    #[test]
    fn test_annotation_is_reattached() {
        assert_eq!(
            canonicalize_date("March 3, 2020 (revised 2021)").unwrap(),
            "2020-03-03 (revised 2021)"
        );
        assert_eq!(
            canonicalize_date("2019-01-01(draft)").unwrap(),
            "2019-01-01 (draft)"
        );
    }

    #[test]
    fn test_unparseable_date() {
        let err = canonicalize_date("sometime last week").unwrap_err();
        assert_eq!(
            err,
            DocBlockError::BadDate {
                value: "sometime last week".to_string()
            }
        );
    }

    #[test]
    fn test_annotation_only_is_unparseable() {
        assert!(canonicalize_date("(unknown)").is_err());
        assert!(canonicalize_date("").is_err());
    }

    #[test]
    fn test_invalid_calendar_day() {
        assert!(canonicalize_date("February 30, 2021").is_err());
    }
}
