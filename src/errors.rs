//! Error types for summarization runs.

use thiserror::Error;

/// Errors produced by a summarization run.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No sentences to score, or the score map came out empty.
    #[error("empty input: no scoreable sentences")]
    EmptyInput,

    /// A sentence matched no frequency-table entries and the active policy
    /// refuses to score it.
    #[error("sentence {sentence} matched no frequency-table entries")]
    DivisionByZero {
        /// Ordinal index of the offending sentence.
        sentence: usize,
    },

    /// Opaque failure raised by a collaborator (text source, tokenizer,
    /// stemmer, stopword lookup). Never inspected or retried.
    #[error("collaborator failure: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The configuration cannot be used for a run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SummarizeError {
    /// Wrap any collaborator error without looking at it.
    pub fn collaborator<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Collaborator(err.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;
