//! Unicode-aware tokenization
//!
//! Sentence and word segmentation follow UAX #29 through the `unicode-segmentation` crate. The
//! boundary rules are static tables, so a [`Tokenizer`] carries no state and is free to share.

use crate::nlp::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Splits documents into sentences and lower-cased word tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences.
    ///
    /// Each sentence is returned as a trimmed slice of `text`, so the summary can reproduce it
    /// verbatim. Whitespace-only segments are dropped.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Lower-cased words of `text`, in order, with no stop-word filtering.
    ///
    /// Segments made only of punctuation or symbols are not words and never appear. Typographic
    /// apostrophes are folded to `'`, so "don’t" and "don't" are the same token.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .map(|word| word.replace(RIGHT_SINGLE_QUOTE, "'").to_lowercase())
            .collect()
    }

    /// Lower-cased words of `text` with stop words removed.
    pub fn content_tokens(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        self.words(text)
            .into_iter()
            .filter(|word| !stopwords.is_stopword(word))
            .collect()
    }
}
