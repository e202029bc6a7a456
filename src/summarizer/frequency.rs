//! Word frequency table
//!
//! Counts normalized words across the whole document. Entries keep their
//! first-occurrence order so that scans over the table are reproducible;
//! lookups go through an FxHashMap index.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::normalizer::Normalizer;
use crate::pipeline::traits::{Stemmer, StopwordLookup};

/// Mapping from normalized word to occurrence count.
///
/// Every stored count is at least 1; the table does not change after it is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    /// (word, count) in first-occurrence order
    entries: Vec<(String, u32)>,
    /// word -> position in `entries`
    #[serde(skip)]
    index: FxHashMap<String, usize>,
    total: u64,
}

impl FrequencyTable {
    /// Build the table by normalizing each token in order.
    pub fn build<I, S, St, Sw>(tokens: I, normalizer: &Normalizer<St, Sw>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        St: Stemmer,
        Sw: StopwordLookup,
    {
        let mut table = Self::default();
        for token in tokens {
            if let Some(word) = normalizer.normalize(token.as_ref()) {
                table.increment(word);
            }
        }
        table
    }

    /// Build a table from precomputed counts. Zero counts are dropped and
    /// repeated words are summed, saturating at `u32::MAX`.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (word, count) in counts {
            if count == 0 {
                continue;
            }
            let word = word.into();
            let added = match table.index.get(&word) {
                Some(&pos) => {
                    let slot = &mut table.entries[pos].1;
                    let before = *slot;
                    *slot = before.saturating_add(count);
                    *slot - before
                }
                None => {
                    table.index.insert(word.clone(), table.entries.len());
                    table.entries.push((word, count));
                    count
                }
            };
            table.total += u64::from(added);
        }
        table
    }

    fn increment(&mut self, word: String) {
        if let Some(&pos) = self.index.get(&word) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(word.clone(), self.entries.len());
            self.entries.push((word, 1));
        }
        self.total += 1;
    }

    /// Count for `word`, if present
    pub fn get(&self, word: &str) -> Option<u32> {
        self.index.get(word).map(|&pos| self.entries[pos].1)
    }

    /// Count for `word`, 0 when absent
    pub fn count(&self, word: &str) -> u32 {
        self.get(word).unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (number of non-skipped tokens)
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Top `n` words by count; ties ordered by word.
    pub fn most_frequent(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{LowercaseStemmer, RegexWordTokenizer};
    use crate::pipeline::traits::WordTokenizer;
    use rustc_hash::FxHashSet;

    fn stub_normalizer() -> Normalizer<LowercaseStemmer, FxHashSet<String>> {
        let stopwords = ["the", "on"].iter().map(|s| s.to_string()).collect();
        Normalizer::new(LowercaseStemmer, stopwords)
    }

    #[test]
    fn test_counts_normalized_words() {
        let text = "The cat sat. The cat sat on the mat. Dogs bark loudly.";
        let tokens = RegexWordTokenizer::new().split_words(text).unwrap();
        let table = FrequencyTable::build(&tokens, &stub_normalizer());

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("sat"), 2);
        assert_eq!(table.count("mat"), 1);
        assert_eq!(table.count("dogs"), 1);
        assert_eq!(table.count("bark"), 1);
        assert_eq!(table.count("loudly"), 1);
        assert_eq!(table.count("."), 3);
        assert_eq!(table.count("the"), 0);
        assert!(!table.contains("on"));
        assert_eq!(table.len(), 7);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = FrequencyTable::build(["b", "a", "b", "c", "a"], &stub_normalizer());
        let words: Vec<_> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::build(Vec::<String>::new(), &stub_normalizer());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_all_stopwords_leaves_table_empty() {
        let table = FrequencyTable::build(["The", "on", "the"], &stub_normalizer());
        assert!(table.is_empty());
    }

    #[test]
    fn test_most_frequent_breaks_ties_by_word() {
        let table = FrequencyTable::from_counts([("sat", 2), ("cat", 2), ("mat", 1), (".", 3)]);
        assert_eq!(
            table.most_frequent(3),
            vec![(".", 3), ("cat", 2), ("sat", 2)]
        );
    }

    #[test]
    fn test_from_counts_drops_zero_and_merges() {
        let table = FrequencyTable::from_counts([("a", 0), ("b", 2), ("b", 1)]);
        assert!(!table.contains("a"));
        assert_eq!(table.count("b"), 3);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_from_counts_saturates_on_merge() {
        let table = FrequencyTable::from_counts([("a", u32::MAX), ("a", 1), ("b", 2)]);
        assert_eq!(table.count("a"), u32::MAX);
        assert_eq!(table.total(), u64::from(u32::MAX) + 2);
    }
}
