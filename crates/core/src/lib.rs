//! # Precis Core
//!
//! Core logic for the precis text summariser.
//!
//! This crate contains the pure, side-effect free parts of the system:
//! - Sentence and word segmentation with stop-word removal
//! - Normalised word-frequency tables
//! - Sentence scoring and extractive summary selection
//! - Startup configuration and input validation
//!
//! **No API or rendering concerns**: HTTP handling lives in `api-rest`, chart images in
//! `precis-charts`.

pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summariser;
pub mod validation;

pub use config::CoreConfig;
pub use error::{SummaryError, SummaryResult};
pub use frequency::{FrequencyTable, WordFrequency};
pub use nlp::{StopwordFilter, Tokenizer};
pub use pipeline::{analyse, Analysis};
pub use scoring::{score_sentences, ScoredSentence};
pub use summariser::{Summariser, Summary};
