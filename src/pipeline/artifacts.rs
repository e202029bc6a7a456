//! Pipeline artifacts handed from the scoring stage to the selection stage.
//!
//! [`SentenceScores`] owns one score per [`SentenceKey`]. With index keys
//! every sentence has its own bucket; with prefix keys, sentences that share
//! their first characters share a bucket.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::{Result, SummarizeError};
use crate::types::{KeyMode, Sentence};

/// Identity of a score bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceKey {
    /// Position of the sentence in the document
    Index(usize),
    /// Leading characters of the sentence text
    Prefix(String),
}

impl SentenceKey {
    /// Key for `sentence` under `mode`.
    pub fn for_sentence(sentence: &Sentence, mode: KeyMode) -> Self {
        match mode {
            KeyMode::Index => SentenceKey::Index(sentence.index),
            KeyMode::Prefix { len } => SentenceKey::Prefix(sentence.prefix(len).to_string()),
        }
    }
}

/// Scores produced by the scoring stage, in first-insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceScores {
    key_mode: KeyMode,
    entries: Vec<(SentenceKey, f64)>,
    #[serde(skip)]
    index: FxHashMap<SentenceKey, usize>,
}

impl SentenceScores {
    pub fn new(key_mode: KeyMode) -> Self {
        Self::with_capacity(key_mode, 0)
    }

    pub fn with_capacity(key_mode: KeyMode, capacity: usize) -> Self {
        Self {
            key_mode,
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Mutable bucket for `key`, created at 0.0 if missing.
    pub fn bucket_mut(&mut self, key: SentenceKey) -> &mut f64 {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, 0.0));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    pub fn get(&self, key: &SentenceKey) -> Option<f64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    /// Score of the bucket `sentence` falls into.
    pub fn for_sentence(&self, sentence: &Sentence) -> Option<f64> {
        self.get(&SentenceKey::for_sentence(sentence, self.key_mode))
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SentenceKey, f64)> {
        self.entries.iter().map(|(k, s)| (k, *s))
    }

    /// Mean bucket score.
    pub fn average(&self) -> Result<f64> {
        if self.entries.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        let sum: f64 = self.entries.iter().map(|(_, s)| s).sum();
        Ok(sum / self.entries.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_keys_never_collide() {
        let a = Sentence::new("The cat sat on the mat.", 0, 23, 0);
        let b = Sentence::new("The cat sat on the hat.", 24, 47, 1);

        assert_ne!(
            SentenceKey::for_sentence(&a, KeyMode::Index),
            SentenceKey::for_sentence(&b, KeyMode::Index)
        );
    }

    #[test]
    fn test_prefix_keys_collide_on_shared_prefix() {
        let a = Sentence::new("The cat sat on the mat.", 0, 23, 0);
        let b = Sentence::new("The cat sat on the hat.", 24, 47, 1);
        let mode = KeyMode::reference();

        let key = SentenceKey::for_sentence(&a, mode);
        assert_eq!(key, SentenceKey::Prefix("The cat sat on ".to_string()));
        assert_eq!(key, SentenceKey::for_sentence(&b, mode));
    }

    #[test]
    fn test_bucket_accumulates() {
        let mut scores = SentenceScores::new(KeyMode::Index);
        *scores.bucket_mut(SentenceKey::Index(0)) += 2.0;
        *scores.bucket_mut(SentenceKey::Index(0)) += 3.0;
        *scores.bucket_mut(SentenceKey::Index(1)) += 1.0;

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(&SentenceKey::Index(0)), Some(5.0));
        assert_eq!(scores.average().unwrap(), 3.0);
    }

    #[test]
    fn test_average_of_empty_is_empty_input() {
        let scores = SentenceScores::new(KeyMode::Index);
        assert!(matches!(scores.average(), Err(SummarizeError::EmptyInput)));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut scores = SentenceScores::new(KeyMode::Index);
        *scores.bucket_mut(SentenceKey::Index(2)) = 1.0;
        *scores.bucket_mut(SentenceKey::Index(0)) = 1.0;

        let keys: Vec<_> = scores.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![SentenceKey::Index(2), SentenceKey::Index(0)]);
    }
}
