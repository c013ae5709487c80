//! Sentiment polarity extractor over a (word, pos-code) lexicon.

use crate::corpus::{Instance, TaggedToken};
use crate::error::{PerfilarError, Result};
use crate::lexicon::LexiconSet;
use crate::primitives::Matrix;
use crate::traits::Extractor;
use std::sync::Arc;

/// Sums polarity-lexicon weights over an instance's tokens.
///
/// Each token's part-of-speech tag is run through an ordered list of
/// matchers, most specific grammatical pattern first (adjectival past and
/// passive participles before the generic verb pattern); the first match
/// decides the lexicon pos codes. The surface form is then looked up with
/// the first code, the lemma with the second, and the first hit's weight is
/// added to the running sum. Tokens matching no pattern, and lexicon
/// misses, contribute 0. Output is a single scalar column.
#[derive(Debug, Clone)]
pub struct Sentiment {
    lexicons: Arc<LexiconSet>,
    fitted: bool,
}

impl Sentiment {
    /// Creates the extractor over the given lexicon resources.
    #[must_use]
    pub fn new(lexicons: Arc<LexiconSet>) -> Self {
        Self {
            lexicons,
            fitted: false,
        }
    }

    /// First matching pattern wins; returns (surface code, lemma code).
    fn match_pos(pos: &str) -> Option<(char, char)> {
        let ww_rest = pos.strip_prefix("WW(");
        let participle = ww_rest
            .map(|rest| rest.starts_with("od") || rest.starts_with("vd"))
            .unwrap_or(false);

        if pos.starts_with("SPEC(vreemd") {
            Some(('f', 'f'))
        } else if pos == "BW()" {
            Some(('b', 'b'))
        } else if pos.starts_with("N(") {
            Some(('n', 'n'))
        } else if pos == "TWS()" {
            Some(('i', 'i'))
        } else if pos.starts_with("ADJ(") {
            Some(('a', 'a'))
        } else if participle && (pos.contains(",prenom") || pos.contains(",vrij")) {
            Some(('a', 'v'))
        } else if participle && pos.contains(",nom") {
            Some(('n', 'v'))
        } else if pos.starts_with("WW(inf,nom") {
            Some(('n', 'v'))
        } else if ww_rest.is_some() {
            Some(('v', 'v'))
        } else {
            None
        }
    }

    fn token_weight(&self, token: &TaggedToken) -> f32 {
        let Some((surface_code, lemma_code)) = Self::match_pos(&token.pos) else {
            return 0.0;
        };
        self.lexicons
            .polarity
            .lookup(&token.surface, surface_code)
            .or_else(|| self.lexicons.polarity.lookup(&token.lemma, lemma_code))
            .unwrap_or(0.0)
    }

    fn polarity_score(&self, instance: &Instance) -> f32 {
        instance.tags.iter().map(|t| self.token_weight(t)).sum()
    }
}

impl Extractor for Sentiment {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn fit(&mut self, _corpus: &[Instance]) -> Result<()> {
        // The lexicon is static; nothing to learn.
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        if !self.fitted {
            return Err(PerfilarError::not_fitted(self.name()));
        }

        let rows: Vec<Vec<f32>> = corpus
            .iter()
            .map(|instance| vec![self.polarity_score(instance)])
            .collect();

        Matrix::from_rows(&rows, 1).map_err(Into::into)
    }
}
