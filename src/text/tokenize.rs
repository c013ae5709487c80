//! Tokenization for raw text.

use super::Tokenizer;
use crate::error::Result;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Splits on any Unicode whitespace (spaces, tabs, newlines) and preserves
/// punctuation attached to words.
///
/// # Examples
///
/// ```
/// use perfilar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = text.split_whitespace().map(ToString::to_string).collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens = WhitespaceTokenizer::new()
            .tokenize("foo   bar\nbaz\tqux")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn test_empty_text() {
        let tokens = WhitespaceTokenizer::new()
            .tokenize("")
            .expect("tokenize should succeed");
        assert!(tokens.is_empty());
    }
}
