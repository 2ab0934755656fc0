//! Extractive summarisation by word frequency.
//!
//! The summariser tokenises the document, normalises word frequencies against the most frequent
//! word, scores every sentence by the words it contains and keeps the best `n` sentences.
//! Sentences are emitted in rank order, not document order; equal scores rank by document
//! position so output never depends on hash iteration order.

use crate::frequency::FrequencyTable;
use crate::nlp::{StopwordFilter, Tokenizer};
use crate::scoring::{score_sentences, ScoredSentence};
use std::borrow::Cow;

/// The sentences chosen for a summary, in rank order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    sentences: Vec<ScoredSentence>,
}

impl Summary {
    pub fn sentences(&self) -> &[ScoredSentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentences joined with a single space.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Frequency-based extractive summariser.
///
/// Holds the stop-word list it was built with; everything else is derived per call, so a single
/// instance can be shared across threads for the life of the process.
#[derive(Debug, Clone)]
pub struct Summariser {
    stopwords: Cow<'static, StopwordFilter>,
    tokenizer: Tokenizer,
}

impl Summariser {
    /// Creates a summariser with its own stop-word list.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords: Cow::Owned(stopwords),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Creates a summariser backed by the shared English stop-word list.
    pub fn english() -> Self {
        Self {
            stopwords: Cow::Borrowed(StopwordFilter::english()),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Creates a summariser for a configured language.
    ///
    /// English reuses the process-wide list instead of building a new one.
    pub fn for_language(language: &str) -> Self {
        match language.trim().to_lowercase().as_str() {
            "en" | "english" => Self::english(),
            other => Self::new(StopwordFilter::new(other)),
        }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalised frequencies of the non-stop-words in `text`.
    pub fn word_frequencies(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(self.tokenizer.content_tokens(text, &self.stopwords))
    }

    /// Selects up to `n` sentences of `text`.
    ///
    /// Returns fewer sentences when fewer than `n` contain a scorable word, and an empty summary
    /// for empty text.
    pub fn summarise(&self, text: &str, n: usize) -> Summary {
        let table = self.word_frequencies(text);
        let mut ranked = score_sentences(text, &table, &self.tokenizer);

        // score_sentences returns document order and sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);

        tracing::debug!(
            words = table.len(),
            selected = ranked.len(),
            requested = n,
            "summarised text"
        );

        Summary { sentences: ranked }
    }
}

impl Default for Summariser {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_summarise_breaks_ties_by_document_order() {
        let summary = Summariser::english().summarise("The cat sat. The cat ran. Dogs bark loudly.", 1);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.text(), "The cat sat.");
    }

    #[test]
    fn test_summarise_word_frequencies_scenario() {
        let table = Summariser::english().word_frequencies("The cat sat. The cat ran. Dogs bark loudly.");

        assert_eq!(table.get("cat"), Some(1.0));
        for word in ["sat", "ran", "dogs", "bark", "loudly"] {
            assert_eq!(table.get(word), Some(0.5), "{word}");
        }
        assert_eq!(table.get("the"), None);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_summarise_keeps_common_content_words() {
        let text = "The new information system is an important problem for world work.";
        let summary = Summariser::english().summarise(text, 3);
        let table = Summariser::english().word_frequencies(text);

        assert_eq!(summary.text(), text);
        for word in ["new", "information", "system", "important", "problem", "world", "work"] {
            assert_eq!(table.get(word), Some(1.0), "{word}");
        }
    }

    #[test]
    fn test_summarise_orders_by_score_not_position() {
        let text = "Rust is fast. Rust is safe and rust is fun. Python is slow.";
        let summary = Summariser::english().summarise(text, 2);

        assert_eq!(
            summary.text(),
            "Rust is safe and rust is fun. Rust is fast."
        );
    }

    #[test]
    fn test_summarise_single_sentence_verbatim() {
        let summary = Summariser::english().summarise("  Quantum computers factor integers.  ", 3);

        assert_eq!(summary.text(), "Quantum computers factor integers.");
    }

    #[test]
    fn test_summarise_empty_text() {
        let summary = Summariser::english().summarise("", 3);

        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn test_summarise_stopwords_only() {
        let summary = Summariser::english().summarise("The. And. Of.", 3);

        assert!(summary.is_empty());
    }

    #[test]
    fn test_summary_frequencies_do_not_leak_unselected_sentences() {
        let summariser = Summariser::english();
        let summary = summariser.summarise("Alpha alpha beta. Gamma delta.", 1);
        let table = summariser.word_frequencies(&summary.text());

        assert_eq!(summary.text(), "Alpha alpha beta.");
        assert!(table.contains("alpha"));
        assert!(table.contains("beta"));
        assert!(!table.contains("gamma"));
        assert!(!table.contains("delta"));
    }

    #[test]
    fn test_for_language_reuses_english() {
        let summariser = Summariser::for_language("EN");

        assert!(std::ptr::eq(
            summariser.stopwords(),
            StopwordFilter::english()
        ));
    }

    proptest! {
        #[test]
        fn prop_summary_is_bounded(
            words in prop::collection::vec("[a-f]{1,4}", 1..40),
            n in 1usize..6,
        ) {
            let text = words
                .chunks(4)
                .map(|chunk| format!("{}.", chunk.join(" ")))
                .collect::<Vec<_>>()
                .join(" ");
            let summariser = Summariser::new(StopwordFilter::empty());

            let summary = summariser.summarise(&text, n);
            let scorable = score_sentences(
                &text,
                &summariser.word_frequencies(&text),
                &Tokenizer::new(),
            )
            .len();

            prop_assert!(summary.len() <= n);
            prop_assert!(summary.len() <= scorable);
        }

        #[test]
        fn prop_summarise_is_idempotent(text in "[a-z .!?]{0,200}", n in 1usize..5) {
            let summariser = Summariser::english();

            prop_assert_eq!(summariser.summarise(&text, n), summariser.summarise(&text, n));
        }
    }
}
