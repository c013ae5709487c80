//! Feature extractors and the featurizer orchestrator.
//!
//! Each extractor learns a bounded feature space from a training corpus and
//! deterministically projects any corpus into that fixed space. The
//! [`Featurizer`] owns the enabled extractors, drives the two-phase
//! fit → transform protocol, and assembles the per-extractor blocks into
//! one design matrix with stable column ordering.

mod categories;
mod function_words;
mod ngrams;
mod sentiment;
mod simple_stats;
mod token_pca;
mod vocabulary;

pub use categories::CategoryFrequencies;
pub use function_words::FunctionWords;
pub use ngrams::{NgramLevel, Ngrams};
pub use sentiment::Sentiment;
pub use simple_stats::{SimpleStats, SIMPLE_STATS_WIDTH};
pub use token_pca::TokenPca;
pub use vocabulary::Vocabulary;

use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::lexicon::LexiconSet;
use crate::primitives::Matrix;
use crate::traits::{Extractor, FitLocality};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The closed set of feature names the orchestrator recognizes.
pub const FEATURE_REGISTRY: [&str; 8] = [
    "simple_stats",
    "token_ngrams",
    "char_ngrams",
    "pos_ngrams",
    "function_words",
    "liwc",
    "sentiment",
    "pca",
];

fn default_n_list() -> Vec<usize> {
    vec![1, 2]
}

fn default_true() -> bool {
    true
}

fn default_dimensions() -> usize {
    100
}

fn default_max_tokens() -> usize {
    1000
}

/// Tunables shared by the three n-gram extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgramSettings {
    /// The n values to extract (each adds its own windows).
    #[serde(default = "default_n_list")]
    pub n_list: Vec<usize>,
    /// Vocabulary cap after frequency ranking; `None` keeps every key.
    #[serde(default)]
    pub max_features: Option<usize>,
    /// Whether sentinel-containing n-grams enter the ranking.
    #[serde(default = "default_true")]
    pub count_boundaries: bool,
}

impl Default for NgramSettings {
    fn default() -> Self {
        Self {
            n_list: default_n_list(),
            max_features: None,
            count_boundaries: true,
        }
    }
}

/// Tunables for the corpus-projection extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSettings {
    /// Output dimensionality of the PCA reduction.
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    /// Vocabulary cap of the term-frequency vectorizer.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Which features to enable and their tunables.
///
/// # Examples
///
/// ```
/// use perfilar::features::FeaturizerConfig;
///
/// let config: FeaturizerConfig = serde_json::from_str(
///     r#"{ "features": ["simple_stats", "token_ngrams"] }"#,
/// ).expect("valid config");
/// assert_eq!(config.features.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturizerConfig {
    /// Requested feature names; must all be in [`FEATURE_REGISTRY`].
    pub features: Vec<String>,
    /// N-gram tunables.
    #[serde(default)]
    pub ngrams: NgramSettings,
    /// Corpus-projection tunables.
    #[serde(default)]
    pub projection: ProjectionSettings,
}

impl FeaturizerConfig {
    /// Config enabling the given features with default tunables.
    #[must_use]
    pub fn with_features(features: &[&str]) -> Self {
        Self {
            features: features.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

/// Orchestrates the enabled extractors into one design matrix.
///
/// Extractors are held sorted lexicographically by name; that order is the
/// column-block order of the design matrix and never changes. `fit` drives
/// the stream extractors before the batch ones, `transform` runs every
/// extractor (in parallel) and concatenates the blocks after checking each
/// block's row count against the corpus length.
///
/// # Examples
///
/// ```
/// use perfilar::corpus::{Instance, TaggedToken};
/// use perfilar::features::{Featurizer, FeaturizerConfig};
///
/// let corpus = vec![
///     Instance::new("pos", "heel mooi", vec![
///         TaggedToken::new("heel", "heel", "ADJ(vrij)", Some(0)),
///         TaggedToken::new("mooi", "mooi", "ADJ(vrij)", Some(0)),
///     ]),
///     Instance::new("neg", "niet best", vec![
///         TaggedToken::new("niet", "niet", "BW()", Some(0)),
///         TaggedToken::new("best", "best", "ADJ(vrij)", Some(0)),
///     ]),
/// ];
///
/// let config = FeaturizerConfig::with_features(&["simple_stats", "token_ngrams"]);
/// let mut featurizer = Featurizer::from_config(&config, None).unwrap();
/// let (matrix, labels) = featurizer.fit_transform(&corpus).unwrap();
/// assert_eq!(matrix.n_rows(), 2);
/// assert_eq!(labels, vec!["pos", "neg"]);
/// ```
pub struct Featurizer {
    extractors: Vec<Box<dyn Extractor>>,
}

impl std::fmt::Debug for Featurizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Featurizer")
            .field("extractors", &self.extractor_names())
            .finish()
    }
}

impl Featurizer {
    /// Builds the orchestrator from a configuration.
    ///
    /// `lexicons` is required when `liwc` or `sentiment` is enabled.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for an unknown feature name, an
    /// empty feature list, or a missing lexicon requirement.
    pub fn from_config(
        config: &FeaturizerConfig,
        lexicons: Option<Arc<LexiconSet>>,
    ) -> Result<Self> {
        if config.features.is_empty() {
            return Err(PerfilarError::configuration("no features enabled"));
        }

        let lexicons_for = |feature: &str| -> Result<Arc<LexiconSet>> {
            lexicons.clone().ok_or_else(|| {
                PerfilarError::configuration(format!(
                    "feature {feature} requires lexicon resources"
                ))
            })
        };
        let ngrams = |level: NgramLevel| -> Ngrams {
            let settings = &config.ngrams;
            let make = match level {
                NgramLevel::Token => Ngrams::token,
                NgramLevel::Char => Ngrams::char,
                NgramLevel::Pos => Ngrams::pos,
            };
            make(settings.n_list.clone(), settings.max_features)
                .with_count_boundaries(settings.count_boundaries)
        };

        let mut extractors: Vec<Box<dyn Extractor>> = Vec::with_capacity(config.features.len());
        for feature in &config.features {
            let extractor: Box<dyn Extractor> = match feature.as_str() {
                "simple_stats" => Box::new(SimpleStats::new()),
                "token_ngrams" => Box::new(ngrams(NgramLevel::Token)),
                "char_ngrams" => Box::new(ngrams(NgramLevel::Char)),
                "pos_ngrams" => Box::new(ngrams(NgramLevel::Pos)),
                "function_words" => Box::new(FunctionWords::new()),
                "liwc" => Box::new(CategoryFrequencies::new(lexicons_for(feature)?)),
                "sentiment" => Box::new(Sentiment::new(lexicons_for(feature)?)),
                "pca" => Box::new(TokenPca::new(
                    config.projection.dimensions,
                    config.projection.max_tokens,
                )),
                unknown => {
                    return Err(PerfilarError::configuration(format!(
                        "unknown feature: {unknown}"
                    )));
                }
            };
            extractors.push(extractor);
        }

        // Lexicographic name order fixes the block order of the matrix.
        extractors.sort_by_key(|e| e.name());

        Ok(Self { extractors })
    }

    /// Names of the enabled extractors in block order.
    #[must_use]
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Fits every extractor on the corpus.
    ///
    /// Stream extractors run first, then the batch ones that need the whole
    /// raw corpus at once.
    ///
    /// # Errors
    ///
    /// Returns the first extractor fit error.
    pub fn fit(&mut self, corpus: &[Instance]) -> Result<()> {
        for locality in [FitLocality::Stream, FitLocality::Batch] {
            for extractor in self
                .extractors
                .iter_mut()
                .filter(|e| e.locality() == locality)
            {
                extractor.fit(corpus)?;
            }
        }
        Ok(())
    }

    /// Projects the corpus through every extractor and assembles the design
    /// matrix plus the aligned label vector.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if any extractor was never fit and
    /// `ShapeMismatch` if any block's row count disagrees with the corpus
    /// length.
    pub fn transform(&self, corpus: &[Instance]) -> Result<(Matrix<f32>, Vec<String>)> {
        let blocks: Vec<(&'static str, Matrix<f32>)> = self
            .extractors
            .par_iter()
            .map(|extractor| {
                extractor
                    .transform(corpus)
                    .map(|block| (extractor.name(), block))
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, block) in &blocks {
            if block.n_rows() != corpus.len() {
                return Err(PerfilarError::ShapeMismatch {
                    extractor: (*name).to_string(),
                    expected: corpus.len(),
                    actual: block.n_rows(),
                });
            }
        }

        let matrices: Vec<Matrix<f32>> = blocks.into_iter().map(|(_, block)| block).collect();
        let matrix = Matrix::hstack(&matrices)?;
        let labels = corpus.iter().map(|i| i.label.clone()).collect();
        Ok((matrix, labels))
    }

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails.
    pub fn fit_transform(&mut self, corpus: &[Instance]) -> Result<(Matrix<f32>, Vec<String>)> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}


#[cfg(test)]
#[path = "featurizer_contract.rs"]
mod featurizer_contract;
