//! Stop-word filtering
//!
//! Closed-class word lists come from the NLTK corpus bundled with the `stop-words` crate. The English list used by the server
//! is built once per process and shared read-only; see [`StopwordFilter::english`].

use rustc_hash::FxHashSet;
use std::sync::OnceLock;
use stop_words::{get, LANGUAGE};

static ENGLISH: OnceLock<StopwordFilter> = OnceLock::new();

/// A case-insensitive set of words excluded from frequency scoring.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lower-cased stop words
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stop-word filter for the given language.
    ///
    /// Accepts ISO 639-1 codes or English language names. Unknown languages fall back to
    /// English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// The process-wide English filter.
    ///
    /// Built on first use and never rebuilt.
    pub fn english() -> &'static StopwordFilter {
        ENGLISH.get_or_init(|| {
            let filter = Self::new("en");
            tracing::debug!("loaded {} english stop words", filter.len());
            filter
        })
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stop words to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stop word
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        // Tokens reach us lower-cased already; only pay for the allocation otherwise.
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                tracing::warn!("no stop-word list for {other:?}, using english");
                LANGUAGE::English
            }
        };

        get(lang)
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
