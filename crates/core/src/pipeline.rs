//! The request pipeline up to, but not including, chart rendering.

use crate::frequency::{FrequencyTable, WordFrequency};
use crate::summariser::{Summariser, Summary};

/// Everything derived from one submitted document.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub summary: Summary,
    /// Frequencies computed from the summary text alone
    pub summary_frequencies: FrequencyTable,
    /// Highest-scoring entries of `summary_frequencies`, the data behind the charts
    pub top_words: Vec<WordFrequency>,
}

impl Analysis {
    /// True when there is nothing worth charting.
    pub fn is_degenerate(&self) -> bool {
        self.top_words.is_empty()
    }
}

/// Summarises `text`, then measures word frequencies of the summary itself.
///
/// # Arguments
///
/// * `summariser` - Summariser holding the configured stop words.
/// * `text` - The submitted document.
/// * `sentence_count` - Maximum number of sentences in the summary.
/// * `top_words` - Number of frequency entries kept for charting.
pub fn analyse(
    summariser: &Summariser,
    text: &str,
    sentence_count: usize,
    top_words: usize,
) -> Analysis {
    let summary = summariser.summarise(text, sentence_count);
    let summary_frequencies = summariser.word_frequencies(&summary.text());
    let top_words = summary_frequencies.top(top_words);

    Analysis {
        summary,
        summary_frequencies,
        top_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::StopwordFilter;

    #[test]
    fn test_analyse_charts_summary_words_only() {
        let summariser = Summariser::new(StopwordFilter::from_list(&["the", "a"]));
        let text = "The river floods the river valley. A dry desert. The river bends.";

        let analysis = analyse(&summariser, text, 1, 10);

        assert_eq!(analysis.summary.text(), "The river floods the river valley.");
        assert!(!analysis.is_degenerate());
        assert_eq!(analysis.top_words[0].word, "river");
        assert_eq!(analysis.top_words[0].score, 1.0);
        assert!(analysis
            .top_words
            .iter()
            .all(|w| w.word != "desert" && w.word != "bends"));
    }

    #[test]
    fn test_analyse_limits_top_words() {
        let summariser = Summariser::new(StopwordFilter::empty());
        let text = "one two three four five six seven eight nine ten eleven twelve.";

        let analysis = analyse(&summariser, text, 3, 10);

        assert_eq!(analysis.summary_frequencies.len(), 12);
        assert_eq!(analysis.top_words.len(), 10);
    }

    #[test]
    fn test_analyse_empty_text_is_degenerate() {
        let analysis = analyse(&Summariser::english(), "", 3, 10);

        assert!(analysis.summary.is_empty());
        assert!(analysis.summary_frequencies.is_empty());
        assert!(analysis.is_degenerate());
    }
}
