//! Sentence and word tokenization
//!
//! Both tokenizers are simple: sentences end at terminal
//! punctuation followed by whitespace, and words are runs of word characters
//! with single punctuation marks emitted as tokens of their own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, SummarizeError};
use crate::pipeline::traits::{SentenceSplitter, WordTokenizer};
use crate::types::Sentence;

/// Words with inner apostrophes or hyphens, or any single non-space symbol.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['’\-]\w+)*|[^\w\s]").expect("word pattern is valid")
});

// ============================================================================
// Sentences
// ============================================================================

/// Splits after `.`, `!` or `?` when the next character is whitespace or the
/// end of the text. Closing quotes and brackets directly after the
/// terminator stay with the sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSentenceSplitter;

impl PunctuationSentenceSplitter {
    fn is_terminator(ch: char) -> bool {
        matches!(ch, '.' | '!' | '?' | '…')
    }

    fn is_closer(ch: char) -> bool {
        matches!(ch, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
    }

    fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
        let slice = &text[start..end];
        let trimmed = slice.trim();
        if trimmed.is_empty() {
            return;
        }
        let offset = start + (slice.len() - slice.trim_start().len());
        let index = out.len();
        out.push(Sentence::new(trimmed, offset, offset + trimmed.len(), index));
    }
}

impl SentenceSplitter for PunctuationSentenceSplitter {
    fn split_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !Self::is_terminator(ch) {
                continue;
            }

            // Absorb "?!", "...", closing quotes and brackets
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if Self::is_terminator(next) || Self::is_closer(next) {
                    end = next_idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            // "3.14", "e.g.x": not a boundary
            if let Some(&(_, next)) = chars.peek() {
                if !next.is_whitespace() {
                    continue;
                }
            }

            Self::push_trimmed(text, start, end, &mut sentences);
            start = end;
        }

        if start < text.len() {
            Self::push_trimmed(text, start, text.len(), &mut sentences);
        }

        Ok(sentences)
    }
}

// ============================================================================
// Words
// ============================================================================

/// Regex-driven word tokenizer
#[derive(Debug, Clone)]
pub struct RegexWordTokenizer {
    pattern: Regex,
}

impl Default for RegexWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexWordTokenizer {
    /// Tokenizer emitting words and single punctuation marks
    pub fn new() -> Self {
        Self {
            pattern: WORD_PATTERN.clone(),
        }
    }

    /// Tokenizer emitting every match of a custom pattern
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(SummarizeError::collaborator)?;
        Ok(Self { pattern })
    }

    /// Iterate tokens without allocating
    pub fn tokens<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }
}

impl WordTokenizer for RegexWordTokenizer {
    fn split_words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokens(text).map(str::to_string).collect())
    }
}
