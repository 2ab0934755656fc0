//! Input validation utilities.
//!
//! This module contains functions for validating caller-supplied counts and text fields before
//! they reach the summariser.

use crate::constants::{MAX_SUMMARY_SENTENCES, MAX_TOP_WORDS};
use crate::{SummaryError, SummaryResult};

/// Validates a requested summary length.
///
/// # Errors
///
/// Returns `SummaryError::InvalidInput` if `count` is zero or exceeds [`MAX_SUMMARY_SENTENCES`].
pub fn validate_sentence_count(count: usize) -> SummaryResult<()> {
    if count == 0 {
        return Err(SummaryError::InvalidInput(
            "sentence count must be at least 1".into(),
        ));
    }

    if count > MAX_SUMMARY_SENTENCES {
        return Err(SummaryError::InvalidInput(format!(
            "sentence count exceeds maximum of {}",
            MAX_SUMMARY_SENTENCES
        )));
    }

    Ok(())
}

/// Validates the number of words to chart.
///
/// # Errors
///
/// Returns `SummaryError::InvalidInput` if `count` is zero or exceeds [`MAX_TOP_WORDS`].
pub fn validate_top_words(count: usize) -> SummaryResult<()> {
    if count == 0 || count > MAX_TOP_WORDS {
        return Err(SummaryError::InvalidInput(format!(
            "top word count must be between 1 and {}",
            MAX_TOP_WORDS
        )));
    }

    Ok(())
}

/// Extracts a required text field.
///
/// An absent field is an error. A present but empty field is valid: empty text produces an
/// empty summary further down the pipeline.
///
/// # Errors
///
/// Returns `SummaryError::MissingField` naming `field` if `value` is `None`.
pub fn require_field(field: &'static str, value: Option<String>) -> SummaryResult<String> {
    value.ok_or(SummaryError::MissingField(field))
}

/// Parses an optional sentence count supplied as free text (for example from an HTML form).
///
/// Blank values mean "use the default".
///
/// # Errors
///
/// Returns `SummaryError::InvalidInput` if the value is not a number or is out of range.
pub fn parse_sentence_count(value: Option<&str>, default: usize) -> SummaryResult<usize> {
    let count = match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => default,
        Some(v) => v.parse::<usize>().map_err(|_| {
            SummaryError::InvalidInput(format!("sentence count must be a number, got {v:?}"))
        })?,
    };
    validate_sentence_count(count)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sentence_count_accepts_range() {
        assert!(validate_sentence_count(1).is_ok());
        assert!(validate_sentence_count(3).is_ok());
        assert!(validate_sentence_count(MAX_SUMMARY_SENTENCES).is_ok());
    }

    #[test]
    fn test_validate_sentence_count_rejects_zero() {
        let err = validate_sentence_count(0).expect_err("should reject zero");
        assert!(matches!(err, SummaryError::InvalidInput(msg) if msg.contains("at least 1")));
    }

    #[test]
    fn test_validate_sentence_count_rejects_too_many() {
        let err = validate_sentence_count(MAX_SUMMARY_SENTENCES + 1)
            .expect_err("should reject too many");
        assert!(
            matches!(err, SummaryError::InvalidInput(msg) if msg.contains("exceeds maximum"))
        );
    }

    #[test]
    fn test_validate_top_words_bounds() {
        assert!(validate_top_words(10).is_ok());
        assert!(validate_top_words(0).is_err());
        assert!(validate_top_words(MAX_TOP_WORDS + 1).is_err());
    }

    #[test]
    fn test_require_field_missing() {
        let err = require_field("text", None).expect_err("should reject missing");
        assert!(matches!(err, SummaryError::MissingField("text")));
    }

    #[test]
    fn test_require_field_allows_empty_string() {
        assert_eq!(require_field("text", Some(String::new())).unwrap(), "");
    }

    #[test]
    fn test_parse_sentence_count() {
        assert_eq!(parse_sentence_count(None, 3).unwrap(), 3);
        assert_eq!(parse_sentence_count(Some("  "), 3).unwrap(), 3);
        assert_eq!(parse_sentence_count(Some("5"), 3).unwrap(), 5);
        assert!(parse_sentence_count(Some("five"), 3).is_err());
        assert!(parse_sentence_count(Some("0"), 3).is_err());
    }
}
