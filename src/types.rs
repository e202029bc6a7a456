//! Core data types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Prefix length used by the reference sentence-keying scheme.
pub const REFERENCE_PREFIX_LEN: usize = 15;

/// Threshold multiplier used by the reference summarizer.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

/// A sentence of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Verbatim sentence text
    pub text: String,
    /// Byte offset of the first character in the source text
    pub start: usize,
    /// Byte offset one past the last character in the source text
    pub end: usize,
    /// Position of the sentence in the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// First `len` characters of the sentence (the whole sentence if shorter).
    pub fn prefix(&self, len: usize) -> &str {
        match self.text.char_indices().nth(len) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// How sentences are identified when bucketing scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// One bucket per sentence, keyed by its position.
    #[default]
    Index,
    /// Bucket by the first `len` characters; sentences sharing a prefix
    /// share a score.
    Prefix { len: usize },
}

impl KeyMode {
    /// The reference 15-character prefix scheme.
    pub fn reference() -> Self {
        KeyMode::Prefix {
            len: REFERENCE_PREFIX_LEN,
        }
    }
}

/// How frequency-table words are matched against a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Normalize the sentence's own words and look each table key up in
    /// that set.
    #[default]
    Token,
    /// Case-insensitive substring search of each table key in the sentence.
    Substring,
}

/// What to do with a sentence that matches no frequency-table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroMatchPolicy {
    /// Score the sentence 0.
    #[default]
    ZeroScore,
    /// Fail the run with [`SummarizeError::DivisionByZero`](crate::SummarizeError::DivisionByZero).
    Error,
}

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Scales the average score into the selection threshold.
    /// Higher values produce shorter summaries.
    pub multiplier: f64,
    /// Language for the default stopword list and stemmer
    pub language: String,
    pub key_mode: KeyMode,
    pub match_mode: MatchMode,
    pub zero_match: ZeroMatchPolicy,
    /// Select sentences whose score equals the threshold as well
    pub inclusive_threshold: bool,
    /// Apply the stemmer (when false, words are only lowercased)
    pub stem: bool,
    /// Score sentences on the rayon pool once there are at least this many
    pub parallel_min_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            language: "en".to_string(),
            key_mode: KeyMode::Index,
            match_mode: MatchMode::Token,
            zero_match: ZeroMatchPolicy::ZeroScore,
            inclusive_threshold: false,
            stem: true,
            parallel_min_sentences: 64,
        }
    }
}

impl SummarizerConfig {
    /// Configuration that reproduces the reference summarizer's output,
    /// including prefix-key collisions and substring matching.
    pub fn reference() -> Self {
        Self {
            key_mode: KeyMode::reference(),
            match_mode: MatchMode::Substring,
            zero_match: ZeroMatchPolicy::Error,
            ..Self::default()
        }
    }

    /// Set the threshold multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_zero_match(mut self, policy: ZeroMatchPolicy) -> Self {
        self.zero_match = policy;
        self
    }

    pub fn with_inclusive_threshold(mut self, inclusive: bool) -> Self {
        self.inclusive_threshold = inclusive;
        self
    }

    /// Check the values a run depends on.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(crate::SummarizeError::InvalidConfig(format!(
                "multiplier must be a finite, non-negative number (got {})",
                self.multiplier
            )));
        }
        if let KeyMode::Prefix { len: 0 } = self.key_mode {
            return Err(crate::SummarizeError::InvalidConfig(
                "prefix key length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_shorter_than_len() {
        let s = Sentence::new("Short.", 0, 6, 0);
        assert_eq!(s.prefix(15), "Short.");
    }

    #[test]
    fn test_prefix_counts_characters_not_bytes() {
        let s = Sentence::new("Café au lait est délicieux.", 0, 29, 0);
        assert_eq!(s.prefix(4), "Café");
        assert_eq!(s.prefix(15), "Café au lait es");
    }

    #[test]
    fn test_reference_config() {
        let cfg = SummarizerConfig::reference();
        assert_eq!(cfg.key_mode, KeyMode::Prefix { len: 15 });
        assert_eq!(cfg.match_mode, MatchMode::Substring);
        assert_eq!(cfg.zero_match, ZeroMatchPolicy::Error);
        assert_eq!(cfg.multiplier, 1.5);
    }

    #[test]
    fn test_validate_rejects_bad_multiplier() {
        assert!(SummarizerConfig::default()
            .with_multiplier(f64::NAN)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_multiplier(-0.5)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_multiplier(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_prefix() {
        let cfg = SummarizerConfig::default().with_key_mode(KeyMode::Prefix { len: 0 });
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{ "multiplier": 2.0, "key_mode": { "prefix": { "len": 10 } } }"#)
                .unwrap();
        assert_eq!(cfg.multiplier, 2.0);
        assert_eq!(cfg.key_mode, KeyMode::Prefix { len: 10 });
        assert_eq!(cfg.match_mode, MatchMode::Token);
        assert_eq!(cfg.language, "en");
    }
}
