//! # rapid_summarizer
//!
//! Frequency-based extractive text summarization.
//!
//! Every word of the text is stemmed and stopword-filtered, then counted.
//! Each sentence scores the average frequency of the counted words it
//! contains. Sentences scoring above `multiplier × average score` make up
//! the summary, in their original order.
//!
//! ## Quick start
//!
//! ```
//! let text = "Rust is fast. Rust is safe. Rust is fun to write. The weather is nice.";
//! let summary = rapid_summarizer::summarize(text, 1.0).unwrap();
//! assert!(summary.len() <= 4);
//! ```
//!
//! ## Custom collaborators
//!
//! Sentence splitting, word tokenization, stemming and stopword lookup are
//! traits in [`pipeline::traits`]. Swap any of them with
//! [`PipelineBuilder`]:
//!
//! ```
//! use rapid_summarizer::nlp::{LowercaseStemmer, StopwordFilter};
//! use rapid_summarizer::pipeline::NoopObserver;
//! use rapid_summarizer::{PipelineBuilder, SummarizerConfig};
//!
//! let pipeline = PipelineBuilder::new()
//!     .stemmer(LowercaseStemmer)
//!     .stopwords(StopwordFilter::from_list(&["the", "on"]))
//!     .build();
//! let cfg = SummarizerConfig::default().with_multiplier(1.0);
//! let summary = pipeline
//!     .run("The cat sat. The cat sat on the mat. Dogs bark loudly.", &cfg, &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(summary.text(), "The cat sat. The cat sat on the mat.");
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use pipeline::{DefaultPipeline, Pipeline, PipelineBuilder};
pub use summarizer::{FrequencyTable, SelectedSentence, Summary};
pub use types::{KeyMode, MatchMode, Sentence, SummarizerConfig, ZeroMatchPolicy};

use pipeline::observer::NoopObserver;

/// Summarize `text` with the default configuration and the given
/// threshold multiplier.
pub fn summarize(text: &str, multiplier: f64) -> Result<Summary> {
    let cfg = SummarizerConfig::default().with_multiplier(multiplier);
    summarize_with_config(text, &cfg)
}

/// Summarize `text` with the default collaborators for `cfg.language`.
pub fn summarize_with_config(text: &str, cfg: &SummarizerConfig) -> Result<Summary> {
    DefaultPipeline::from_config(cfg).run(text, cfg, &mut NoopObserver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty_text() {
        assert!(matches!(summarize("", 1.5), Err(SummarizeError::EmptyInput)));
    }

    #[test]
    fn test_summarize_rejects_negative_multiplier() {
        assert!(matches!(
            summarize("One sentence.", -1.0),
            Err(SummarizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_summarize_with_config_uses_language() {
        let cfg = SummarizerConfig::default()
            .with_language("de")
            .with_multiplier(0.5);
        let summary = summarize_with_config("Der Hund bellt. Die Katze schläft.", &cfg).unwrap();
        assert_eq!(summary.total_sentences, 2);
    }

    #[test]
    fn test_single_sentence_at_multiplier_one() {
        let text = "Rockets launch fast.";

        let strict = summarize(text, 1.0).unwrap();
        assert!(strict.is_empty());
        assert_eq!(strict.average, strict.threshold);

        assert_eq!(summarize(text, 0.9).unwrap().len(), 1);

        let cfg = SummarizerConfig::default()
            .with_multiplier(1.0)
            .with_inclusive_threshold(true);
        assert_eq!(summarize_with_config(text, &cfg).unwrap().len(), 1);
    }
}
