//! Stopword filtering
//!
//! Language stopword lists come from the `stop-words` crate; custom lists can
//! replace or extend them. Words handed to the filter are normalized (stemmed)
//! forms, so lookups are case-insensitive unless asked otherwise.

use rustc_hash::FxHashSet;
use stop_words::get;

use super::language::Language;
use crate::pipeline::traits::StopwordLookup;

/// A set of words excluded from frequency counting
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stored lowercase unless the filter is case-sensitive
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl StopwordFilter {
    /// Stopword filter for a language code or name; unknown languages fall
    /// back to English.
    pub fn new(language: &str) -> Self {
        Self::for_language(Language::parse_or_default(language))
    }

    /// Stopword filter for a supported language
    pub fn for_language(language: Language) -> Self {
        let stopwords = get(language.stopword_list())
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// A filter that excludes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// A filter built from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Compare words exactly instead of case-folding them.
    ///
    /// Words already stored stay as they were loaded (lowercase).
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(self.fold(word));
        }
    }

    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            let folded = self.fold(word);
            self.stopwords.remove(&folded);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn fold(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }
}

impl StopwordLookup for StopwordFilter {
    #[inline]
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word)
    }
}
