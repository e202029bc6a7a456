//! Summarization pipeline
//!
//! Collaborator traits, stage artifacts, observers, the runner that threads
//! them together, and the JSON configuration documents with their
//! validation.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use artifacts::{SentenceKey, SentenceScores};
pub use error_code::ErrorCode;
pub use errors::SpecError;
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{DefaultPipeline, Pipeline, PipelineBuilder};
pub use spec::{Preset, SummarizerSpec};
pub use traits::{SentenceSplitter, Stemmer, StopwordLookup, TextSource, WordTokenizer};
pub use validation::{ValidationEngine, ValidationReport};
