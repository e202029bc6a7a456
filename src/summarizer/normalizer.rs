//! Word normalization
//!
//! Turns raw word tokens into frequency-table keys: the stemmer produces a
//! root form, and root forms found in the stopword set are skipped.

use crate::pipeline::traits::{Stemmer, StopwordLookup};

/// Stemming followed by stopword filtering
#[derive(Debug, Clone)]
pub struct Normalizer<St, Sw> {
    stemmer: St,
    stopwords: Sw,
}

impl<St: Stemmer, Sw: StopwordLookup> Normalizer<St, Sw> {
    pub fn new(stemmer: St, stopwords: Sw) -> Self {
        Self { stemmer, stopwords }
    }

    /// Normalized form of `token`, or `None` when the root form is a
    /// stopword (or stems to nothing).
    ///
    /// Punctuation is normalized like any other token.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let root = self.stemmer.stem(token);
        if root.is_empty() || self.stopwords.is_stopword(&root) {
            return None;
        }
        Some(root)
    }

    /// Normalize a token sequence, dropping skipped tokens.
    pub fn normalize_all<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|t| self.normalize(t.as_ref()))
            .collect()
    }

    pub fn stemmer(&self) -> &St {
        &self.stemmer
    }

    pub fn stopwords(&self) -> &Sw {
        &self.stopwords
    }
}
