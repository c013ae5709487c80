//! Hand-designed text and token statistics.

use crate::corpus::Instance;
use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use crate::traits::Extractor;
use std::collections::HashMap;

/// Punctuation characters considered for flooding and sequence counts.
const PUNCTUATION: &str = "!?.,:;()\"'-";

/// A run of one repeated character counts as a flooding from this length.
const FLOODING_MIN: usize = 3;

/// Placeholder tokens inserted by the external annotation/cleaning step.
const URL_TOKEN: &str = "_URL_";
const PHOTO_TOKEN: &str = "_PHOTO_";
const VIDEO_TOKEN: &str = "_VIDEO_";
const EMOTICON_MARK: &str = "_EMOTICON_";

/// Fixed-length vector of heuristic scalar statistics per instance.
///
/// The sixteen columns, in order: flooding count, alphabetic flooding
/// count, punctuation flooding count, their three average run lengths,
/// punctuation-sequence count, digit-sequence count, emoticon count,
/// average word length, all-caps word count, capitalized-initial word
/// count, URL/photo/video placeholder counts, and average sentence length
/// (tokens grouped by sentence index). No learned content: fit only marks
/// the width as determined. Every average over an empty set is 0.
#[derive(Debug, Clone, Default)]
pub struct SimpleStats {
    fitted: bool,
}

/// Block width of [`SimpleStats`].
pub const SIMPLE_STATS_WIDTH: usize = 16;

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}

/// Maximal runs of a single repeated character, as (length, character).
fn floodings(text: &str) -> Vec<(usize, char)> {
    let mut result = Vec::new();
    let mut run: Option<(usize, char)> = None;
    for ch in text.chars() {
        match run {
            Some((len, current)) if current == ch => run = Some((len + 1, current)),
            Some((len, current)) => {
                if len >= FLOODING_MIN {
                    result.push((len, current));
                }
                run = Some((1, ch));
            }
            None => run = Some((1, ch)),
        }
    }
    if let Some((len, current)) = run {
        if len >= FLOODING_MIN {
            result.push((len, current));
        }
    }
    result
}

/// Number of maximal runs of characters satisfying the predicate.
fn count_runs(text: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for ch in text.chars() {
        if pred(ch) {
            if !in_run {
                count += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    count
}

fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

/// A word is alphanumerics/hyphens containing at least one letter.
fn is_word(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && token.chars().any(|c| c.is_ascii_alphabetic())
}

fn is_allcaps(word: &str) -> bool {
    word.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
        && word.chars().any(|c| c.is_ascii_uppercase())
}

fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

impl SimpleStats {
    /// Creates the extractor.
    #[must_use]
    pub fn new() -> Self {
        Self { fitted: false }
    }

    fn text_based(raw: &str) -> Vec<f32> {
        let fl = floodings(raw);
        let fl_alph: Vec<&(usize, char)> = fl
            .iter()
            .filter(|(_, ch)| ch.is_ascii_alphabetic())
            .collect();
        let fl_punc: Vec<&(usize, char)> =
            fl.iter().filter(|(_, ch)| is_punctuation(*ch)).collect();

        let lens = |group: &[&(usize, char)]| -> Vec<f32> {
            group.iter().map(|(len, _)| *len as f32).collect()
        };
        let all_lens: Vec<f32> = fl.iter().map(|(len, _)| *len as f32).collect();

        vec![
            fl.len() as f32,
            fl_alph.len() as f32,
            fl_punc.len() as f32,
            mean(&all_lens),
            mean(&lens(&fl_alph)),
            mean(&lens(&fl_punc)),
            count_runs(raw, is_punctuation) as f32,
            count_runs(raw, |c| c.is_ascii_digit()) as f32,
            raw.matches(EMOTICON_MARK).count() as f32,
        ]
    }

    fn token_based(instance: &Instance) -> Vec<f32> {
        let surfaces = instance.surfaces();
        let words: Vec<&&str> = surfaces.iter().filter(|t| is_word(t)).collect();
        let word_lens: Vec<f32> = words.iter().map(|w| w.chars().count() as f32).collect();

        vec![
            mean(&word_lens),
            words.iter().filter(|w| is_allcaps(w)).count() as f32,
            words.iter().filter(|w| starts_capitalized(w)).count() as f32,
            surfaces.iter().filter(|&&t| t == URL_TOKEN).count() as f32,
            surfaces.iter().filter(|&&t| t == PHOTO_TOKEN).count() as f32,
            surfaces.iter().filter(|&&t| t == VIDEO_TOKEN).count() as f32,
        ]
    }

    fn avg_sentence_length(instance: &Instance) -> f32 {
        let mut sentence_sizes: HashMap<u32, usize> = HashMap::new();
        for token in &instance.tags {
            *sentence_sizes.entry(token.sentence_index()).or_insert(0) += 1;
        }
        let sizes: Vec<f32> = sentence_sizes.values().map(|&n| n as f32).collect();
        mean(&sizes)
    }

    fn stats_row(instance: &Instance) -> Vec<f32> {
        let mut row = Self::text_based(&instance.raw);
        row.extend(Self::token_based(instance));
        row.push(Self::avg_sentence_length(instance));
        debug_assert_eq!(row.len(), SIMPLE_STATS_WIDTH);
        row
    }
}

impl Extractor for SimpleStats {
    fn name(&self) -> &'static str {
        "simple_stats"
    }

    fn fit(&mut self, _corpus: &[Instance]) -> Result<()> {
        // Nothing to learn; the feature count is fixed.
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, corpus: &[Instance]) -> Result<Matrix<f32>> {
        if !self.fitted {
            return Err(PerfilarError::not_fitted(self.name()));
        }

        let rows: Vec<Vec<f32>> = corpus.iter().map(Self::stats_row).collect();
        Matrix::from_rows(&rows, SIMPLE_STATS_WIDTH).map_err(Into::into)
    }
}
