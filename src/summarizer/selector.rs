//! Threshold-based sentence selection
//!
//! The threshold is the average bucket score scaled by a multiplier.
//! Sentences scoring above it are kept in document order.

use serde::Serialize;

use crate::errors::Result;
use crate::pipeline::artifacts::SentenceScores;
use crate::types::{Sentence, SummarizerConfig, DEFAULT_MULTIPLIER};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Scales the average score into the threshold
    pub multiplier: f64,
    /// Keep sentences scoring exactly at the threshold
    pub inclusive: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            inclusive: false,
        }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Mean bucket score
    pub average: f64,
    /// Cutoff applied to the bucket scores
    pub threshold: f64,
    /// Number of sentences considered
    pub total_sentences: usize,
}

/// A selected sentence with its score
#[derive(Debug, Clone, Serialize)]
pub struct SelectedSentence {
    pub sentence: Sentence,
    pub score: f64,
}

impl Summary {
    /// Selected sentence texts joined with single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected fraction of the input sentences
    pub fn compression_ratio(&self) -> f64 {
        if self.total_sentences == 0 {
            0.0
        } else {
            self.sentences.len() as f64 / self.total_sentences as f64
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Average-threshold sentence selector
#[derive(Debug, Default)]
pub struct ThresholdSelector {
    config: SelectorConfig,
}

impl ThresholdSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        Self::with_config(SelectorConfig {
            multiplier: cfg.multiplier,
            inclusive: cfg.inclusive_threshold,
        })
    }

    /// Set the threshold multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.config.multiplier = multiplier;
        self
    }

    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.config.inclusive = inclusive;
        self
    }

    /// Keep the sentences whose bucket score clears the threshold.
    ///
    /// Every sentence is tested on its own, so sentences sharing a bucket are
    /// all kept when the bucket clears. Fails with
    /// [`EmptyInput`](crate::SummarizeError::EmptyInput) when `scores` is empty.
    pub fn select(&self, sentences: &[Sentence], scores: &SentenceScores) -> Result<Summary> {
        let average = scores.average()?;
        let threshold = self.config.multiplier * average;

        let selected = sentences
            .iter()
            .filter_map(|sentence| {
                let score = scores.for_sentence(sentence)?;
                let keep = if self.config.inclusive {
                    score >= threshold
                } else {
                    score > threshold
                };
                keep.then(|| SelectedSentence {
                    sentence: sentence.clone(),
                    score,
                })
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(average, threshold, "selection threshold");

        Ok(Summary {
            sentences: selected,
            average,
            threshold,
            total_sentences: sentences.len(),
        })
    }
}
