//! Sentence scoring against the frequency table
//!
//! A sentence's score is the sum of the frequencies of the table words it
//! contains, divided by how many distinct table words it contains.
//!
//! Matching runs in one of two modes:
//! - [`MatchMode::Token`]: the sentence's own words are normalized and each
//!   is looked up in the table.
//! - [`MatchMode::Substring`]: every table word is searched for inside the
//!   lowercased sentence text, so "cat" also matches "concatenate".
//!
//! Per-sentence matching is independent and runs on the rayon pool for
//! large inputs. Folding matches into score buckets is sequential and in
//! document order, which keeps prefix-key collisions reproducible.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::frequency::FrequencyTable;
use super::normalizer::Normalizer;
use crate::errors::{Result, SummarizeError};
use crate::pipeline::artifacts::{SentenceKey, SentenceScores};
use crate::pipeline::traits::{Stemmer, StopwordLookup, WordTokenizer};
use crate::types::{KeyMode, MatchMode, Sentence, SummarizerConfig, ZeroMatchPolicy};

/// Table words found in one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceMatch {
    /// Frequencies of the matched table words, in scan order
    pub frequencies: Vec<u32>,
}

impl SentenceMatch {
    /// Number of distinct table words matched
    pub fn matched(&self) -> usize {
        self.frequencies.len()
    }

    /// Sum of matched frequencies
    pub fn total(&self) -> u64 {
        self.frequencies.iter().map(|&f| u64::from(f)).sum()
    }
}

/// Scores sentences against a [`FrequencyTable`]
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    key_mode: KeyMode,
    match_mode: MatchMode,
    zero_match: ZeroMatchPolicy,
    parallel_min_sentences: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceScorer {
    /// Index keys, token matching, zero score for unmatched sentences
    pub fn new() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }

    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        Self {
            key_mode: cfg.key_mode,
            match_mode: cfg.match_mode,
            zero_match: cfg.zero_match,
            parallel_min_sentences: cfg.parallel_min_sentences,
        }
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

    /// Match sentences in parallel once there are at least `n` of them
    /// (`usize::MAX` disables it).
    pub fn with_parallel_min_sentences(mut self, n: usize) -> Self {
        self.parallel_min_sentences = n;
        self
    }

    /// Score every sentence.
    ///
    /// Sentences are bucketed by [`SentenceKey`]. For each sentence, matched
    /// frequencies are added into its bucket and the bucket is then divided
    /// by that sentence's match count; when prefix keys collide the earlier
    /// sentence's normalized score is carried into the later one.
    pub fn score<T, St, Sw>(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        tokenizer: &T,
        normalizer: &Normalizer<St, Sw>,
    ) -> Result<SentenceScores>
    where
        T: WordTokenizer + Sync,
        St: Stemmer + Sync,
        Sw: StopwordLookup + Sync,
    {
        let matches = self.match_all(sentences, table, tokenizer, normalizer)?;

        let mut scores = SentenceScores::with_capacity(self.key_mode, sentences.len());
        for (sentence, found) in sentences.iter().zip(matches) {
            let key = SentenceKey::for_sentence(sentence, self.key_mode);

            if found.matched() == 0 {
                match self.zero_match {
                    ZeroMatchPolicy::Error => {
                        return Err(SummarizeError::DivisionByZero {
                            sentence: sentence.index,
                        })
                    }
                    ZeroMatchPolicy::ZeroScore => {
                        scores.bucket_mut(key);
                        continue;
                    }
                }
            }

            let bucket = scores.bucket_mut(key);
            for &frequency in &found.frequencies {
                *bucket += f64::from(frequency);
            }
            *bucket /= found.matched() as f64;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            buckets = scores.len(),
            "scored sentences"
        );

        Ok(scores)
    }

    /// Table words found in each sentence, in sentence order.
    pub fn match_all<T, St, Sw>(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        tokenizer: &T,
        normalizer: &Normalizer<St, Sw>,
    ) -> Result<Vec<SentenceMatch>>
    where
        T: WordTokenizer + Sync,
        St: Stemmer + Sync,
        Sw: StopwordLookup + Sync,
    {
        match self.match_mode {
            MatchMode::Token => {
                let match_one =
                    |s: &Sentence| Self::match_tokens(&s.text, table, tokenizer, normalizer);
                if self.use_parallel(sentences.len()) {
                    sentences.par_iter().map(match_one).collect()
                } else {
                    sentences.iter().map(match_one).collect()
                }
            }
            MatchMode::Substring => {
                let needles: Vec<(String, u32)> = table
                    .iter()
                    .map(|(word, count)| (word.to_lowercase(), count))
                    .collect();
                let match_one = |s: &Sentence| Self::match_substrings(&s.text, &needles);
                if self.use_parallel(sentences.len()) {
                    Ok(sentences.par_iter().map(match_one).collect())
                } else {
                    Ok(sentences.iter().map(match_one).collect())
                }
            }
        }
    }

    fn use_parallel(&self, n: usize) -> bool {
        n > 1 && n >= self.parallel_min_sentences
    }

    fn match_tokens<T, St, Sw>(
        text: &str,
        table: &FrequencyTable,
        tokenizer: &T,
        normalizer: &Normalizer<St, Sw>,
    ) -> Result<SentenceMatch>
    where
        T: WordTokenizer,
        St: Stemmer,
        Sw: StopwordLookup,
    {
        let words = tokenizer.split_words(text)?;
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut frequencies = Vec::new();

        for word in normalizer.normalize_all(&words) {
            if let Some(count) = table.get(&word) {
                if seen.insert(word) {
                    frequencies.push(count);
                }
            }
        }

        Ok(SentenceMatch { frequencies })
    }

    fn match_substrings(text: &str, needles: &[(String, u32)]) -> SentenceMatch {
        let haystack = text.to_lowercase();
        let frequencies = needles
            .iter()
            .filter(|(word, _)| haystack.contains(word.as_str()))
            .map(|&(_, count)| count)
            .collect();
        SentenceMatch { frequencies }
    }
}
