//! Corpus-level projection extractor: term frequencies + PCA.

use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::preprocessing::Pca;
use crate::primitives::Matrix;
use crate::text::TermFrequencyVectorizer;
use crate::traits::{Extractor, FitLocality, Transformer};

/// Projects whole raw texts through a term-frequency vectorizer and a PCA
/// reduction.
///
/// Unlike the stream extractors this one is batch-local: the vectorizer and
/// the PCA model are fit jointly over the entire raw-text corpus in one
/// pass, and no incremental fitting exists. Vectorizer vocabulary size and
/// output dimensionality are configuration, not learned boundaries; the
/// requested dimensionality is clamped to what the fitted count matrix
/// supports.
#[derive(Debug)]
pub struct TokenPca {
    dimensions: usize,
    vectorizer: TermFrequencyVectorizer,
    pca: Option<Pca>,
}

impl TokenPca {
    /// Creates the extractor with `dimensions` output columns and a
    /// vectorizer capped at `max_tokens` terms.
    #[must_use]
    pub fn new(dimensions: usize, max_tokens: usize) -> Self {
        Self {
            dimensions,
            vectorizer: TermFrequencyVectorizer::new(Some(max_tokens)),
            pca: None,
        }
    }

    fn raw_texts(corpus: &[Instance]) -> Vec<&str> {
        corpus.iter().map(|instance| instance.raw.as_str()).collect()
    }
}

impl Extractor for TokenPca {
    fn name(&self) -> &'static str {
        "pca"
    }

    fn locality(&self) -> FitLocality {
        FitLocality::Batch
    }

    fn fit(&mut self, corpus: &[Instance]) -> Result<()> {
        let raws = Self::raw_texts(corpus);
        let counts = self.vectorizer.fit_transform(&raws)?;

        let dimensions = self
            .dimensions
            .min(counts.n_cols())
            .min(counts.n_rows());
        let mut pca = Pca::new(dimensions);
        pca.fit(&counts)?;
        self.pca = Some(pca);
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        let pca = self
            .pca
            .as_ref()
            .ok_or_else(|| PerfilarError::not_fitted(self.name()))?;

        let counts = self.vectorizer.transform(&Self::raw_texts(corpus))?;
        pca.transform(&counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Instance> {
        vec![
            Instance::new("a", "rood groen blauw", vec![]),
            Instance::new("b", "rood rood geel", vec![]),
            Instance::new("c", "blauw geel geel paars", vec![]),
            Instance::new("d", "paars groen", vec![]),
        ]
    }

    #[test]
    fn test_output_dimensionality() {
        let mut extractor = TokenPca::new(2, 100);
        let matrix = extractor.fit_transform(&corpus()).expect("fit_transform");
        assert_eq!(matrix.shape(), (4, 2));
    }

    #[test]
    fn test_dimensions_clamped_to_data() {
        // 5 distinct terms, 4 samples: 10 requested dimensions collapse to 4.
        let mut extractor = TokenPca::new(10, 100);
        let matrix = extractor.fit_transform(&corpus()).expect("fit_transform");
        assert_eq!(matrix.n_cols(), 4);
    }

    #[test]
    fn test_batch_locality() {
        let extractor = TokenPca::new(2, 100);
        assert_eq!(extractor.locality(), FitLocality::Batch);
    }

    #[test]
    fn test_transform_before_fit() {
        let extractor = TokenPca::new(2, 100);
        let err = extractor
            .transform(&corpus())
            .expect_err("must fail unfitted");
        assert!(matches!(err, PerfilarError::NotFitted { .. }));
    }

    #[test]
    fn test_transform_idempotent() {
        let mut extractor = TokenPca::new(2, 100);
        let data = corpus();
        extractor.fit(&data).expect("fit");
        let first = extractor.transform(&data).expect("transform");
        let second = extractor.transform(&data).expect("transform");
        assert_eq!(first, second);
    }

    #[test]
    fn test_vocabulary_cap_applies() {
        let mut extractor = TokenPca::new(2, 3);
        extractor.fit(&corpus()).expect("fit");
        assert_eq!(extractor.vectorizer.vocabulary_size(), 3);
    }
}
