//! Collaborator trait definitions for the pipeline.
//!
//! Each trait is one boundary the core consumes without knowing how the work
//! is done: where the text comes from, how it is split into sentences and
//! words, which words are stopwords, and how words are reduced to a root
//! form. Default implementations live in [`crate::nlp`] and
//! [`crate::source`]; the [`Pipeline`](super::runner::Pipeline) is generic
//! over all of them.
//!
//! # Contract
//!
//! - Implementations are pure with respect to the core: the same input must
//!   give the same output for the duration of a run.
//! - Fallible collaborators report failures as
//!   [`SummarizeError::Collaborator`](crate::SummarizeError::Collaborator);
//!   the core propagates them unchanged.

use rustc_hash::FxHashSet;
use std::collections::HashSet;

use crate::errors::Result;
use crate::types::Sentence;

// ============================================================================
// TextSource: where the document comes from
// ============================================================================

/// Supplies the full document text, markup already stripped.
pub trait TextSource {
    fn fetch_raw_text(&self) -> Result<String>;
}

// ============================================================================
// SentenceSplitter
// ============================================================================

/// Splits a document into ordered sentences.
///
/// Returned sentences must carry consecutive `index` values starting at 0.
pub trait SentenceSplitter {
    fn split_sentences(&self, text: &str) -> Result<Vec<Sentence>>;
}

// ============================================================================
// WordTokenizer
// ============================================================================

/// Splits text into word-level tokens.
///
/// Punctuation may be emitted as tokens of its own; the normalizer treats
/// them like any other word.
pub trait WordTokenizer {
    fn split_words(&self, text: &str) -> Result<Vec<String>>;
}

// ============================================================================
// StopwordLookup
// ============================================================================

/// Membership test against a stopword set.
pub trait StopwordLookup {
    fn is_stopword(&self, word: &str) -> bool;
}

impl StopwordLookup for FxHashSet<String> {
    #[inline]
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl StopwordLookup for HashSet<String> {
    #[inline]
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

// ============================================================================
// Stemmer
// ============================================================================

/// Reduces a word to an approximate root form.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

// ---------------------------------------------------------------------------
// Forwarding impls so stages can hold borrowed or boxed collaborators
// ---------------------------------------------------------------------------

impl<T: TextSource + ?Sized> TextSource for &T {
    fn fetch_raw_text(&self) -> Result<String> {
        (**self).fetch_raw_text()
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for &T {
    fn split_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).split_sentences(text)
    }
}

impl<T: WordTokenizer + ?Sized> WordTokenizer for &T {
    fn split_words(&self, text: &str) -> Result<Vec<String>> {
        (**self).split_words(text)
    }
}

impl<T: StopwordLookup + ?Sized> StopwordLookup for &T {
    fn is_stopword(&self, word: &str) -> bool {
        (**self).is_stopword(word)
    }
}

impl<T: Stemmer + ?Sized> Stemmer for &T {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for Box<T> {
    fn split_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).split_sentences(text)
    }
}

impl<T: WordTokenizer + ?Sized> WordTokenizer for Box<T> {
    fn split_words(&self, text: &str) -> Result<Vec<String>> {
        (**self).split_words(text)
    }
}

impl<T: StopwordLookup + ?Sized> StopwordLookup for Box<T> {
    fn is_stopword(&self, word: &str) -> bool {
        (**self).is_stopword(word)
    }
}

impl<T: Stemmer + ?Sized> Stemmer for Box<T> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizeError;

    struct UpperStemmer;

    impl Stemmer for UpperStemmer {
        fn stem(&self, word: &str) -> String {
            word.to_uppercase()
        }
    }

    struct FailingTokenizer;

    impl WordTokenizer for FailingTokenizer {
        fn split_words(&self, _text: &str) -> Result<Vec<String>> {
            Err(SummarizeError::collaborator("tokenizer offline"))
        }
    }

    #[test]
    fn test_hash_sets_are_case_sensitive_lookups() {
        let set: FxHashSet<String> = ["the".to_string()].into_iter().collect();
        assert!(set.is_stopword("the"));
        assert!(!set.is_stopword("The"));

        let std_set: HashSet<String> = ["on".to_string()].into_iter().collect();
        assert!(std_set.is_stopword("on"));
    }

    #[test]
    fn test_stemmer_as_trait_object() {
        let stemmer: Box<dyn Stemmer> = Box::new(UpperStemmer);
        assert_eq!(stemmer.stem("cat"), "CAT");
        assert_eq!((&stemmer).stem("dog"), "DOG");
    }

    #[test]
    fn test_tokenizer_failure_is_opaque_collaborator_error() {
        let err = FailingTokenizer.split_words("anything").unwrap_err();
        assert!(matches!(err, SummarizeError::Collaborator(_)));
    }
}
