//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables; they only see
//! the resolved [`CoreConfig`].

use crate::constants::{
    DEFAULT_CHART_RETENTION, DEFAULT_STATIC_DIR, DEFAULT_STOPWORD_LANGUAGE,
    DEFAULT_SUMMARY_SENTENCES, DEFAULT_TOP_WORDS,
};
use crate::validation::{validate_sentence_count, validate_top_words};
use crate::{SummaryError, SummaryResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    static_dir: PathBuf,
    summary_sentences: usize,
    top_words: usize,
    stopword_language: String,
    chart_retention: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidInput` if a count is out of range or the stop-word
    /// language is blank.
    pub fn new(
        static_dir: PathBuf,
        summary_sentences: usize,
        top_words: usize,
        stopword_language: String,
        chart_retention: usize,
    ) -> SummaryResult<Self> {
        validate_sentence_count(summary_sentences)?;
        validate_top_words(top_words)?;

        if stopword_language.trim().is_empty() {
            return Err(SummaryError::InvalidInput(
                "stopword_language cannot be empty".into(),
            ));
        }
        if chart_retention == 0 {
            return Err(SummaryError::InvalidInput(
                "chart_retention must be at least 1".into(),
            ));
        }

        Ok(Self {
            static_dir,
            summary_sentences,
            top_words,
            stopword_language: stopword_language.trim().to_lowercase(),
            chart_retention,
        })
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn charts_dir(&self) -> PathBuf {
        self.static_dir.join("charts")
    }

    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }

    pub fn top_words(&self) -> usize {
        self.top_words
    }

    pub fn stopword_language(&self) -> &str {
        &self.stopword_language
    }

    pub fn chart_retention(&self) -> usize {
        self.chart_retention
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            top_words: DEFAULT_TOP_WORDS,
            stopword_language: DEFAULT_STOPWORD_LANGUAGE.into(),
            chart_retention: DEFAULT_CHART_RETENTION,
        }
    }
}

/// Parse an optional count from an environment value.
///
/// If `value` is `None` or empty/whitespace, returns `default`.
///
/// # Errors
///
/// Returns `SummaryError::InvalidInput` naming `name` if the value is not an unsigned integer.
pub fn count_from_env_value(
    name: &str,
    value: Option<String>,
    default: usize,
) -> SummaryResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(v) => v.parse::<usize>().map_err(|_| {
            SummaryError::InvalidInput(format!("{name} must be a positive integer, got {v:?}"))
        }),
    }
}

/// Build a [`CoreConfig`] from raw environment values.
///
/// Each argument is the value of the matching `PRECIS_*` variable, if set. Missing values fall
/// back to the defaults in [`crate::constants`].
///
/// # Errors
///
/// Returns `SummaryError::InvalidInput` if any value fails to parse or validate.
pub fn config_from_env_values(
    static_dir: Option<String>,
    summary_sentences: Option<String>,
    top_words: Option<String>,
    stopword_language: Option<String>,
    chart_retention: Option<String>,
) -> SummaryResult<CoreConfig> {
    let static_dir = static_dir
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STATIC_DIR.into());
    let stopword_language = stopword_language
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STOPWORD_LANGUAGE.into());

    CoreConfig::new(
        PathBuf::from(static_dir),
        count_from_env_value(
            "PRECIS_SUMMARY_SENTENCES",
            summary_sentences,
            DEFAULT_SUMMARY_SENTENCES,
        )?,
        count_from_env_value("PRECIS_TOP_WORDS", top_words, DEFAULT_TOP_WORDS)?,
        stopword_language,
        count_from_env_value(
            "PRECIS_CHART_RETENTION",
            chart_retention,
            DEFAULT_CHART_RETENTION,
        )?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_values_uses_defaults() {
        let cfg = config_from_env_values(None, None, None, None, None).unwrap();

        assert_eq!(cfg.static_dir(), Path::new(DEFAULT_STATIC_DIR));
        assert_eq!(cfg.summary_sentences(), DEFAULT_SUMMARY_SENTENCES);
        assert_eq!(cfg.top_words(), DEFAULT_TOP_WORDS);
        assert_eq!(cfg.stopword_language(), "en");
        assert_eq!(cfg.chart_retention(), DEFAULT_CHART_RETENTION);
        assert!(cfg.charts_dir().ends_with("charts"));
    }

    #[test]
    fn test_config_from_env_values_treats_blank_as_unset() {
        let cfg = config_from_env_values(
            Some("  ".into()),
            Some("".into()),
            Some(" ".into()),
            Some("".into()),
            None,
        )
        .unwrap();

        assert_eq!(cfg.summary_sentences(), DEFAULT_SUMMARY_SENTENCES);
        assert_eq!(cfg.static_dir(), Path::new(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_config_from_env_values_parses_overrides() {
        let cfg = config_from_env_values(
            Some("/srv/precis".into()),
            Some("5".into()),
            Some("7".into()),
            Some("DE".into()),
            Some("4".into()),
        )
        .unwrap();

        assert_eq!(cfg.static_dir(), Path::new("/srv/precis"));
        assert_eq!(cfg.summary_sentences(), 5);
        assert_eq!(cfg.top_words(), 7);
        assert_eq!(cfg.stopword_language(), "de");
        assert_eq!(cfg.chart_retention(), 4);
    }

    #[test]
    fn test_config_rejects_non_numeric_count() {
        let err = config_from_env_values(None, Some("three".into()), None, None, None)
            .expect_err("should reject non-numeric");
        assert!(
            matches!(err, SummaryError::InvalidInput(msg) if msg.contains("PRECIS_SUMMARY_SENTENCES"))
        );
    }

    #[test]
    fn test_config_rejects_zero_sentences() {
        let err = config_from_env_values(None, Some("0".into()), None, None, None)
            .expect_err("should reject zero");
        assert!(matches!(err, SummaryError::InvalidInput(_)));
    }

    #[test]
    fn test_config_rejects_zero_retention() {
        let err = CoreConfig::new(PathBuf::from("static"), 3, 10, "en".into(), 0)
            .expect_err("should reject zero retention");
        assert!(
            matches!(err, SummaryError::InvalidInput(msg) if msg.contains("chart_retention"))
        );
    }
}
