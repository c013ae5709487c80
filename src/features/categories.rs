//! Lexicon-category relative-frequency extractor (LIWC-style).

use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::lexicon::LexiconSet;
use crate::primitives::Matrix;
use crate::traits::Extractor;
use std::sync::Arc;

/// Relative frequencies of tokens per lexicon category.
///
/// The vocabulary is corpus-independent: fit fixes it to the category list
/// of the static lexicon resource. Transform looks up each token surface's
/// category memberships and accumulates per-category counts, divided by the
/// instance's token count. A token missing from the lexicon contributes 0
/// to every category.
#[derive(Debug, Clone)]
pub struct CategoryFrequencies {
    lexicons: Arc<LexiconSet>,
    fitted: bool,
}

impl CategoryFrequencies {
    /// Creates the extractor over the given lexicon resources.
    #[must_use]
    pub fn new(lexicons: Arc<LexiconSet>) -> Self {
        Self {
            lexicons,
            fitted: false,
        }
    }

    fn category_rates(&self, instance: &Instance) -> Vec<f32> {
        let n_categories = self.lexicons.categories.categories().len();
        let mut counts = vec![0u64; n_categories];
        for token in &instance.tags {
            for &idx in self.lexicons.categories.categories_of(&token.surface) {
                counts[idx] += 1;
            }
        }

        let n_tokens = instance.tags.len();
        if n_tokens == 0 {
            return vec![0.0; n_categories];
        }
        counts
            .into_iter()
            .map(|c| c as f32 / n_tokens as f32)
            .collect()
    }
}

impl Extractor for CategoryFrequencies {
    fn name(&self) -> &'static str {
        "liwc"
    }

    fn fit(&mut self, _corpus: &[Instance]) -> Result<()> {
        // Vocabulary is the lexicon's category list, fixed here.
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        if !self.fitted {
            return Err(PerfilarError::not_fitted(self.name()));
        }

        let width = self.lexicons.categories.categories().len();
        let rows: Vec<Vec<f32>> = corpus
            .iter()
            .map(|instance| self.category_rates(instance))
            .collect();

        Matrix::from_rows(&rows, width).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TaggedToken;
    use crate::lexicon::CategoryLexicon;

    fn lexicons() -> Arc<LexiconSet> {
        Arc::new(LexiconSet {
            categories: CategoryLexicon::from_entries(&[
                ("social", &["vriend", "praten"]),
                ("negemo", &["boos", "bang"]),
            ]),
            ..LexiconSet::default()
        })
    }

    fn instance(surfaces: &[&str]) -> Instance {
        let tags = surfaces
            .iter()
            .map(|&s| TaggedToken::new(s, s, "N(soort)", Some(0)))
            .collect();
        Instance::new("label", "", tags)
    }

    #[test]
    fn test_relative_frequencies() {
        let corpus = vec![instance(&["vriend", "boos", "fiets", "praten"])];
        let mut extractor = CategoryFrequencies::new(lexicons());
        let matrix = extractor.fit_transform(&corpus).expect("fit_transform");

        assert_eq!(matrix.shape(), (1, 2));
        assert!((matrix.get(0, 0) - 0.5).abs() < f32::EPSILON); // social: 2 of 4
        assert!((matrix.get(0, 1) - 0.25).abs() < f32::EPSILON); // negemo: 1 of 4
    }

    #[test]
    fn test_unknown_tokens_contribute_nothing() {
        let corpus = vec![instance(&["fiets", "auto"])];
        let mut extractor = CategoryFrequencies::new(lexicons());
        let matrix = extractor.fit_transform(&corpus).expect("fit_transform");
        assert!(matrix.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_empty_instance_zero_row() {
        let corpus = vec![instance(&[])];
        let mut extractor = CategoryFrequencies::new(lexicons());
        let matrix = extractor.fit_transform(&corpus).expect("fit_transform");
        assert_eq!(matrix.shape(), (1, 2));
        assert!(matrix.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_width_is_corpus_independent() {
        let mut extractor = CategoryFrequencies::new(lexicons());
        extractor.fit(&[]).expect("fit on empty corpus");
        let matrix = extractor
            .transform(&[instance(&["boos"])])
            .expect("transform");
        assert_eq!(matrix.n_cols(), 2);
    }

    #[test]
    fn test_transform_before_fit() {
        let extractor = CategoryFrequencies::new(lexicons());
        let err = extractor.transform(&[]).expect_err("must fail unfitted");
        assert!(matches!(err, PerfilarError::NotFitted { .. }));
    }
}
