//! Core traits for feature extractors and matrix transformers.
//!
//! These traits define the fit/transform API contracts shared by every
//! extractor and by the dimensionality-reduction primitives.

use crate::corpus::Instance;
use crate::error::Result;
use crate::primitives::Matrix;

/// How an extractor consumes the corpus during `fit`.
///
/// Most extractors accumulate statistics one instance at a time and then
/// freeze their vocabulary (`Stream`). The corpus-projection extractor
/// needs every raw text simultaneously for its single batch fit (`Batch`);
/// no partial or incremental fitting is supported for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitLocality {
    /// Per-instance incremental accumulation, then a vocabulary close.
    Stream,
    /// One whole-corpus batch fit.
    Batch,
}

/// Primary trait for feature extractors.
///
/// The lifecycle is two-phase: `fit` learns a bounded, frozen vocabulary
/// (or sub-model) from a training corpus; `transform` deterministically
/// projects any corpus into that fixed space. Only `fit` mutates state, so
/// `transform` may be called repeatedly and always yields the same block
/// for the same corpus.
///
/// # Examples
///
/// ```
/// use perfilar::features::Ngrams;
/// use perfilar::corpus::{Instance, TaggedToken};
/// use perfilar::traits::Extractor;
///
/// let corpus = vec![Instance::new(
///     "pos",
///     "ab",
///     vec![
///         TaggedToken::new("a", "a", "N(", Some(0)),
///         TaggedToken::new("b", "b", "N(", Some(0)),
///     ],
/// )];
///
/// let mut extractor = Ngrams::token(vec![1], None);
/// let block = extractor.fit_transform(&corpus).unwrap();
/// assert_eq!(block.n_rows(), 1);
/// ```
pub trait Extractor: Send + Sync {
    /// Registry name of the extractor; also its block-ordering key.
    fn name(&self) -> &'static str;

    /// Fit locality capability (stream vs batch).
    fn locality(&self) -> FitLocality {
        FitLocality::Stream
    }

    /// Learns the vocabulary or sub-model from the corpus and freezes it.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails structurally (never for ordinary
    /// lookup misses).
    fn fit(&mut self, corpus: &[Instance]) -> Result<()>;

    /// Projects the corpus into the frozen feature space, one row per
    /// instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PerfilarError::NotFitted`] if `fit` was never
    /// called.
    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails.
    fn fit_transform(&mut self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}

/// Trait for matrix-to-matrix transformers (dimensionality reduction).
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}
