//! N-gram frequency extractors over three symbol streams.

use super::Vocabulary;
use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use crate::traits::Extractor;
use std::collections::HashMap;

/// Which symbol stream an [`Ngrams`] extractor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramLevel {
    /// Token surface forms from the tag sequence.
    Token,
    /// Raw text characters.
    Char,
    /// Part-of-speech tags from the tag sequence.
    Pos,
}

impl NgramLevel {
    /// Key prefix, so the three levels never collide in one design matrix.
    fn prefix(self) -> &'static str {
        match self {
            NgramLevel::Token => "token",
            NgramLevel::Char => "char",
            NgramLevel::Pos => "pos",
        }
    }
}

/// Frequency counts of contiguous n-grams over one symbol stream.
///
/// Each instance's stream is padded with one empty sentinel symbol at each
/// end so edge n-grams are distinguishable from interior ones. Window
/// symbols are joined with `_` and prefixed with the level name, e.g.
/// `token-a_b`. Fit aggregates frequencies over the whole corpus and then
/// freezes the top `max_features` keys; transform recomputes per-instance
/// frequencies restricted to the frozen keys.
#[derive(Debug, Clone)]
pub struct Ngrams {
    level: NgramLevel,
    n_list: Vec<usize>,
    max_features: Option<usize>,
    count_boundaries: bool,
    vocabulary: Option<Vocabulary>,
}

impl Ngrams {
    /// Token-level n-grams (registry name `token_ngrams`).
    #[must_use]
    pub fn token(n_list: Vec<usize>, max_features: Option<usize>) -> Self {
        Self::new(NgramLevel::Token, n_list, max_features)
    }

    /// Character-level n-grams (registry name `char_ngrams`).
    #[must_use]
    pub fn char(n_list: Vec<usize>, max_features: Option<usize>) -> Self {
        Self::new(NgramLevel::Char, n_list, max_features)
    }

    /// Part-of-speech n-grams (registry name `pos_ngrams`).
    #[must_use]
    pub fn pos(n_list: Vec<usize>, max_features: Option<usize>) -> Self {
        Self::new(NgramLevel::Pos, n_list, max_features)
    }

    fn new(level: NgramLevel, n_list: Vec<usize>, max_features: Option<usize>) -> Self {
        Self {
            level,
            n_list,
            max_features,
            count_boundaries: true,
            vocabulary: None,
        }
    }

    /// Whether n-grams containing the boundary sentinel enter the frequency
    /// ranking (default true). When disabled they are skipped entirely.
    #[must_use]
    pub fn with_count_boundaries(mut self, count_boundaries: bool) -> Self {
        self.count_boundaries = count_boundaries;
        self
    }

    /// The frozen vocabulary, once fitted.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    fn symbols(&self, instance: &Instance) -> Vec<String> {
        match self.level {
            NgramLevel::Token => instance
                .tags
                .iter()
                .map(|t| t.surface.clone())
                .collect(),
            NgramLevel::Char => instance.raw.chars().map(String::from).collect(),
            NgramLevel::Pos => instance.tags.iter().map(|t| t.pos.clone()).collect(),
        }
    }

    fn instance_counts(&self, instance: &Instance) -> HashMap<String, u64> {
        let symbols = self.symbols(instance);
        let prefix = self.level.prefix();

        // One empty sentinel at each end per window pass.
        let mut padded: Vec<&str> = Vec::with_capacity(symbols.len() + 2);
        padded.push("");
        padded.extend(symbols.iter().map(String::as_str));
        padded.push("");

        let mut counts = HashMap::new();
        for &n in &self.n_list {
            if n == 0 {
                continue;
            }
            for window in padded.windows(n) {
                if !self.count_boundaries && window.iter().any(|s| s.is_empty()) {
                    continue;
                }
                let key = format!("{prefix}-{}", window.join("_"));
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Extractor for Ngrams {
    fn name(&self) -> &'static str {
        match self.level {
            NgramLevel::Token => "token_ngrams",
            NgramLevel::Char => "char_ngrams",
            NgramLevel::Pos => "pos_ngrams",
        }
    }

    fn fit(&mut self, corpus: &[Instance]) -> Result<()> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for instance in corpus {
            for (key, n) in self.instance_counts(instance) {
                *counts.entry(key).or_insert(0) += n;
            }
        }
        self.vocabulary = Some(Vocabulary::freeze(counts, self.max_features));
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        let vocabulary = self
            .vocabulary
            .as_ref()
            .ok_or_else(|| PerfilarError::not_fitted(self.name()))?;

        let rows: Vec<Vec<f32>> = corpus
            .iter()
            .map(|instance| vocabulary.project(&self.instance_counts(instance)))
            .collect();

        Matrix::from_rows(&rows, vocabulary.len()).map_err(Into::into)
    }
}
