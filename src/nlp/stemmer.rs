//! Stemming
//!
//! [`SnowballStemmer`] wraps `rust-stemmers` and case-folds before stemming,
//! so the normalized forms it produces are lowercase and line up with the
//! lowercased sentence text used for matching.

use rust_stemmers::Stemmer as Snowball;

use super::language::Language;
use crate::pipeline::traits::Stemmer;

/// Snowball stemmer for one language
pub struct SnowballStemmer {
    inner: Snowball,
    language: Language,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            inner: Snowball::create(language.stemmer_algorithm()),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        self.inner.stem(&lowered).into_owned()
    }
}

/// Case-folds words without reducing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseStemmer;

impl Stemmer for LowercaseStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

/// Returns words unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}
