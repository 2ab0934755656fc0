//! Text segmentation and stop-word handling.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
