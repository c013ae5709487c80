//! Text processing used by the corpus-projection extractor.
//!
//! Provides tokenization and a term-frequency vectorizer. The vectorizer is
//! deliberately tf-only: downstream dimensionality reduction works on raw
//! term counts.

mod tokenize;
mod vectorize;

pub use tokenize::WhitespaceTokenizer;
pub use vectorize::TermFrequencyVectorizer;

use crate::error::Result;

/// Splits text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenizes the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
