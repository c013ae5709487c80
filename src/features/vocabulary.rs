//! Frozen feature vocabularies.

use std::collections::HashMap;

/// The frozen, ordered set of feature keys an extractor recognizes after
/// fitting.
///
/// Freezing ranks candidate keys by descending frequency, breaks ties by
/// reverse-lexicographic key order, and truncates to `max_features`. The
/// resulting key order is the extractor's column order and never changes
/// afterwards. The same ranking is used by every vocabularied extractor.
///
/// # Examples
///
/// ```
/// use perfilar::features::Vocabulary;
/// use std::collections::HashMap;
///
/// let counts: HashMap<String, u64> =
///     [("a".into(), 3), ("b".into(), 1), ("c".into(), 1)].into();
/// let vocab = Vocabulary::freeze(counts, Some(2));
/// assert_eq!(vocab.keys(), &["a", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Ranks and freezes a frequency map into an ordered vocabulary.
    #[must_use]
    pub fn freeze(counts: HashMap<String, u64>, max_features: Option<usize>) -> Self {
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        if let Some(max_features) = max_features {
            ranked.truncate(max_features);
        }

        let keys: Vec<String> = ranked.into_iter().map(|(key, _)| key).collect();
        let index = keys
            .iter()
            .enumerate()
            .map(|(idx, key)| (key.clone(), idx))
            .collect();

        Self { keys, index }
    }

    /// The frozen keys in column order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Column index of a key, if it survived the freeze.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Number of keys (the block width).
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no keys survived the freeze (a zero-width block).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Projects an instance's key counts onto the frozen column order.
    /// Keys outside the vocabulary are dropped; absent keys yield 0.
    #[must_use]
    pub fn project(&self, counts: &HashMap<String, u64>) -> Vec<f32> {
        self.keys
            .iter()
            .map(|key| counts.get(key).copied().unwrap_or(0) as f32)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs
            .iter()
            .map(|&(key, n)| (key.to_string(), n))
            .collect()
    }

    #[test]
    fn test_frequency_descending() {
        let vocab = Vocabulary::freeze(counts(&[("low", 1), ("high", 9), ("mid", 4)]), None);
        assert_eq!(vocab.keys(), &["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_break_reverse_lexicographic() {
        let vocab = Vocabulary::freeze(counts(&[("aa", 2), ("ab", 2), ("ba", 2)]), None);
        assert_eq!(vocab.keys(), &["ba", "ab", "aa"]);
    }

    #[test]
    fn test_truncation() {
        let vocab = Vocabulary::freeze(counts(&[("a", 5), ("b", 4), ("c", 3)]), Some(2));
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.index_of("a"), Some(0));
        assert_eq!(vocab.index_of("c"), None);
    }

    #[test]
    fn test_empty_freeze() {
        let vocab = Vocabulary::freeze(HashMap::new(), Some(10));
        assert!(vocab.is_empty());
        assert!(vocab.project(&counts(&[("x", 1)])).is_empty());
    }

    #[test]
    fn test_project_zero_fills_missing() {
        let vocab = Vocabulary::freeze(counts(&[("a", 2), ("b", 1)]), None);
        let row = vocab.project(&counts(&[("a", 7)]));
        assert_eq!(row, vec![7.0, 0.0]);
    }
}
