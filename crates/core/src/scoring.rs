//! Sentence scoring against a frequency table.

use crate::frequency::FrequencyTable;
use crate::nlp::Tokenizer;
use rustc_hash::FxHashMap;

/// A sentence of the source document and its accumulated word score.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoredSentence {
    /// Sentence text exactly as segmented from the document
    pub text: String,
    /// Index of the first occurrence of this sentence text among the document's sentences
    pub position: usize,
    /// Sum of the frequency scores of every table word in the sentence
    pub score: f64,
}

/// Scores every sentence of `text` against `table`.
///
/// Sentence words are lower-cased but not stop-word filtered; a word contributes only when it
/// is in the table, and contributes once per occurrence. Sentences with no contributing word
/// are omitted. Repeated sentence texts collapse into one entry at the first position, with the
/// scores of all occurrences added together.
///
/// The result is in document order.
pub fn score_sentences(
    text: &str,
    table: &FrequencyTable,
    tokenizer: &Tokenizer,
) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = Vec::new();
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (position, sentence) in tokenizer.sentences(text).into_iter().enumerate() {
        let mut matched = false;
        let mut score = 0.0;
        for word in tokenizer.words(sentence) {
            if let Some(value) = table.get(&word) {
                matched = true;
                score += value;
            }
        }

        if !matched {
            continue;
        }

        match seen.get(sentence) {
            Some(&slot) => scored[slot].score += score,
            None => {
                seen.insert(sentence, scored.len());
                scored.push(ScoredSentence {
                    text: sentence.to_string(),
                    position,
                    score,
                });
            }
        }
    }

    scored
}
