//! Constants used throughout the precis core crate.
//!
//! Defaults for everything that can be overridden at startup live here so the
//! server, the CLI and the tests agree on them.

/// Number of sentences in a summary when the caller does not ask for a specific count.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Upper bound accepted for a requested sentence count.
pub const MAX_SUMMARY_SENTENCES: usize = 50;

/// Number of highest-scoring words handed to the chart renderer.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Upper bound accepted for the number of charted words.
pub const MAX_TOP_WORDS: usize = 50;

/// Stop-word language used when no explicit language is configured.
pub const DEFAULT_STOPWORD_LANGUAGE: &str = "en";

/// Directory served under `/static`, holding rendered charts.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Number of request-scoped chart directories kept on disk.
pub const DEFAULT_CHART_RETENTION: usize = 32;
