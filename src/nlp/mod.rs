//! Natural Language Processing components
//!
//! Default collaborators for the summarization pipeline: sentence and word
//! tokenization, stopword filtering and stemming.

pub mod language;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use language::Language;
pub use stemmer::{IdentityStemmer, LowercaseStemmer, SnowballStemmer};
pub use stopwords::StopwordFilter;
pub use tokenizer::{PunctuationSentenceSplitter, RegexWordTokenizer};
