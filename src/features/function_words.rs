//! Function-word frequency extractor.

use super::Vocabulary;
use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use crate::traits::Extractor;
use std::collections::HashMap;

/// Tag families whose members count as function words: pronouns (VNW),
/// determiners (LID), prepositions (VZ), adverbs (BW), quantifiers (TW)
/// and conjunctions (VG).
const FUNCTOR_FAMILIES: [&str; 6] = ["VNW", "LID", "VZ", "BW", "TW", "VG"];

/// Counts occurrences of function-word surface forms.
///
/// Fit collects the distinct surface forms observed among function-word
/// tokens across the corpus; transform counts per-instance occurrences of
/// each of those surfaces among that instance's function words. Tokens
/// whose tag family is unknown are simply not function words, never an
/// error. A corpus without any function-word token leaves the vocabulary
/// empty, which yields a legal zero-width block.
#[derive(Debug, Clone, Default)]
pub struct FunctionWords {
    vocabulary: Option<Vocabulary>,
}

impl FunctionWords {
    /// Creates the extractor.
    #[must_use]
    pub fn new() -> Self {
        Self { vocabulary: None }
    }

    /// The frozen vocabulary, once fitted.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    /// Tag family is the tag text up to the first `(`.
    fn is_function_word(pos: &str) -> bool {
        let family = pos.split('(').next().unwrap_or("");
        FUNCTOR_FAMILIES.contains(&family)
    }

    fn function_word_counts(instance: &Instance) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for token in &instance.tags {
            if Self::is_function_word(&token.pos) {
                *counts.entry(token.surface.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Extractor for FunctionWords {
    fn name(&self) -> &'static str {
        "function_words"
    }

    fn fit(&mut self, corpus: &[Instance]) -> Result<()> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for instance in corpus {
            for (surface, n) in Self::function_word_counts(instance) {
                *counts.entry(surface).or_insert(0) += n;
            }
        }
        self.vocabulary = Some(Vocabulary::freeze(counts, None));
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        let vocabulary = self
            .vocabulary
            .as_ref()
            .ok_or_else(|| PerfilarError::not_fitted(self.name()))?;

        let rows: Vec<Vec<f32>> = corpus
            .iter()
            .map(|instance| vocabulary.project(&Self::function_word_counts(instance)))
            .collect();

        Matrix::from_rows(&rows, vocabulary.len()).map_err(Into::into)
    }
}
