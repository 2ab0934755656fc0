//! Normalised word frequencies.
//!
//! A [`FrequencyTable`] maps each distinct token to its count divided by the count of the most
//! frequent token, so the top word always scores exactly `1.0`. Entries remember the order in
//! which tokens first appeared; every ranking built on the table breaks ties with that order.

use rustc_hash::FxHashMap;

/// A token with its normalised frequency score.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub score: f64,
}

/// Token to normalised-score mapping, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<WordFrequency>,
    index: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Builds a table from an ordered token sequence.
    ///
    /// An empty sequence yields an empty table.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for token in tokens {
            let token = token.as_ref();
            match index.get(token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.to_string(), counts.len());
                    counts.push((token.to_string(), 1));
                }
            }
        }

        let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(1);

        let entries = counts
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word,
                score: count as f64 / max_count as f64,
            })
            .collect();

        Self { entries, index }
    }

    /// Score of `word`, if it is in the table.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&slot| self.entries[slot].score)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> {
        self.entries.iter()
    }

    /// Highest score in the table, `None` when empty.
    pub fn max_score(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.score).reduce(f64::max)
    }

    /// The `n` highest-scoring entries, descending, ties in first-occurrence order.
    pub fn top(&self, n: usize) -> Vec<WordFrequency> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, which keeps first-occurrence order among equal scores
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_tokens_normalises_against_max() {
        let table = FrequencyTable::from_tokens(["cat", "sat", "cat", "ran"]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("cat"), Some(1.0));
        assert_eq!(table.get("sat"), Some(0.5));
        assert_eq!(table.get("ran"), Some(0.5));
        assert_eq!(table.get("dog"), None);
        assert_eq!(table.max_score(), Some(1.0));
    }

    #[test]
    fn test_from_tokens_empty() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());

        assert!(table.is_empty());
        assert_eq!(table.max_score(), None);
        assert!(table.top(10).is_empty());
    }

    #[test]
    fn test_iter_keeps_first_occurrence_order() {
        let table = FrequencyTable::from_tokens(["b", "a", "b", "c", "a"]);
        let words: Vec<&str> = table.iter().map(|e| e.word.as_str()).collect();

        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_orders_by_score_then_first_occurrence() {
        let table = FrequencyTable::from_tokens(["x", "y", "z", "z", "y", "w"]);
        let top: Vec<String> = table.top(3).into_iter().map(|e| e.word).collect();

        assert_eq!(top, vec!["y", "z", "x"]);
    }

    #[test]
    fn test_top_truncates() {
        let tokens: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
        let table = FrequencyTable::from_tokens(&tokens);

        assert_eq!(table.top(10).len(), 10);
        assert_eq!(table.top(50).len(), 20);
    }

    proptest! {
        #[test]
        fn prop_non_empty_table_has_max_of_one(tokens in prop::collection::vec("[a-e]{1,3}", 1..60)) {
            let table = FrequencyTable::from_tokens(&tokens);

            prop_assert_eq!(table.max_score(), Some(1.0));
            for entry in table.iter() {
                prop_assert!(entry.score > 0.0 && entry.score <= 1.0);
            }
        }

        #[test]
        fn prop_table_only_contains_input_tokens(tokens in prop::collection::vec("[a-z]{1,4}", 0..40)) {
            let table = FrequencyTable::from_tokens(&tokens);

            for entry in table.iter() {
                prop_assert!(tokens.contains(&entry.word));
            }
        }
    }
}
