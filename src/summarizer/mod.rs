//! Summarization components
//!
//! Frequency-based extractive summarization: normalize words, count them,
//! score each sentence by the frequencies of the words it contains, and keep
//! the sentences scoring above a multiple of the average.

pub mod frequency;
pub mod normalizer;
pub mod scorer;
pub mod selector;

pub use frequency::FrequencyTable;
pub use normalizer::Normalizer;
pub use scorer::{SentenceMatch, SentenceScorer};
pub use selector::{SelectedSentence, SelectorConfig, Summary, ThresholdSelector};
