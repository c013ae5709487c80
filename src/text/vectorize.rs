//! Term-frequency vectorization of raw text.

use super::{Tokenizer, WhitespaceTokenizer};
use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use std::collections::HashMap;

/// Converts raw documents to a dense term-count matrix.
///
/// The vocabulary is learned at fit time: terms are ranked by descending
/// corpus frequency (ties broken by reverse-lexicographic term order) and
/// truncated to `max_features`. Terms outside the frozen vocabulary are
/// ignored at transform time.
///
/// # Examples
///
/// ```
/// use perfilar::text::TermFrequencyVectorizer;
///
/// let docs = vec!["hello world", "hello rust"];
/// let mut vectorizer = TermFrequencyVectorizer::new(None);
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// assert_eq!(matrix.n_cols(), 3);
/// ```
pub struct TermFrequencyVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    max_features: Option<usize>,
}

impl std::fmt::Debug for TermFrequencyVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermFrequencyVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("lowercase", &self.lowercase)
            .field("max_features", &self.max_features)
            .finish()
    }
}

impl TermFrequencyVectorizer {
    /// Create a vectorizer with a whitespace tokenizer and lowercasing.
    #[must_use]
    pub fn new(max_features: Option<usize>) -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            vocabulary: HashMap::new(),
            lowercase: true,
            max_features,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to convert to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn terms(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .collect())
    }

    /// Learn the vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Returns an error on an empty document collection.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(PerfilarError::Other(
                "Cannot fit on empty documents".to_string(),
            ));
        }

        let mut term_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for term in self.terms(doc.as_ref())? {
                *term_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        if let Some(max_features) = self.max_features {
            ranked.truncate(max_features);
        }

        self.vocabulary = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents to a count matrix using the learned vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectorizer was never fit.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f32>> {
        if self.vocabulary.is_empty() {
            return Err(PerfilarError::Other(
                "Vocabulary is empty. Call fit() first".to_string(),
            ));
        }

        let vocab_size = self.vocabulary.len();
        let mut matrix = Matrix::zeros(documents.len(), vocab_size);

        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.terms(doc.as_ref())? {
                if let Some(&col) = self.vocabulary.get(&term) {
                    matrix.set(doc_idx, col, matrix.get(doc_idx, col) + 1.0);
                }
            }
        }

        Ok(matrix)
    }

    /// Fit and transform in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f32>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned vocabulary (term → column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
