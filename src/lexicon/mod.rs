//! Static lexicon resources.
//!
//! Two read-only resources back the lexicon-driven extractors: a polarity
//! lexicon keyed by (word-or-lemma, coarse part-of-speech code) and a
//! category lexicon mapping semantic/psycholinguistic categories to word
//! sets. Both are loaded once at startup and shared by reference; a missing
//! or malformed file is a configuration error, never a per-call one.

use crate::error::{PerfilarError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Polarity lexicon: (word, pos code) → real-valued weight.
///
/// File format: one `word<TAB>code<TAB>weight` entry per line. Blank lines
/// and lines starting with `#` are skipped.
///
/// # Examples
///
/// ```
/// use perfilar::lexicon::PolarityLexicon;
///
/// let lexicon = PolarityLexicon::from_entries(&[("goed", 'a', 1.0), ("slecht", 'a', -1.0)]);
/// assert_eq!(lexicon.lookup("goed", 'a'), Some(1.0));
/// assert_eq!(lexicon.lookup("goed", 'n'), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    entries: HashMap<(String, char), f32>,
}

impl PolarityLexicon {
    /// Builds a lexicon from in-memory entries.
    #[must_use]
    pub fn from_entries(entries: &[(&str, char, f32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(word, code, weight)| ((word.to_string(), code), weight))
                .collect(),
        }
    }

    /// Loads a lexicon from a tab-separated file.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PerfilarError::configuration(format!(
                "cannot read polarity lexicon {}: {e}",
                path.display()
            ))
        })?;

        let mut entries = HashMap::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let entry = (|| {
                let word = fields.next()?;
                let code = fields.next()?.chars().next()?;
                let weight = fields.next()?.parse::<f32>().ok()?;
                Some(((word.to_string(), code), weight))
            })();
            match entry {
                Some((key, weight)) => {
                    entries.insert(key, weight);
                }
                None => {
                    return Err(PerfilarError::configuration(format!(
                        "malformed polarity lexicon line {} in {}",
                        lineno + 1,
                        path.display()
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Weight for (word, code), if present.
    #[must_use]
    pub fn lookup(&self, word: &str, code: char) -> Option<f32> {
        self.entries.get(&(word.to_string(), code)).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Category lexicon: named categories over word sets (LIWC-style).
///
/// File format: one `category<TAB>word word word…` entry per line. The
/// category order in the file fixes the column order of the category
/// extractor's block.
#[derive(Debug, Clone, Default)]
pub struct CategoryLexicon {
    categories: Vec<String>,
    memberships: HashMap<String, Vec<usize>>,
}

impl CategoryLexicon {
    /// Builds a lexicon from in-memory entries, preserving category order.
    #[must_use]
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        let mut categories = Vec::with_capacity(entries.len());
        let mut memberships: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, (category, words)) in entries.iter().enumerate() {
            categories.push((*category).to_string());
            for word in *words {
                memberships.entry((*word).to_string()).or_default().push(idx);
            }
        }
        Self {
            categories,
            memberships,
        }
    }

    /// Loads a lexicon from a tab-separated file.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PerfilarError::configuration(format!(
                "cannot read category lexicon {}: {e}",
                path.display()
            ))
        })?;

        let mut categories = Vec::new();
        let mut memberships: HashMap<String, Vec<usize>> = HashMap::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((category, words)) = line.split_once('\t') else {
                return Err(PerfilarError::configuration(format!(
                    "malformed category lexicon line {} in {}",
                    lineno + 1,
                    path.display()
                )));
            };
            let idx = categories.len();
            categories.push(category.to_string());
            for word in words.split_whitespace() {
                memberships.entry(word.to_string()).or_default().push(idx);
            }
        }

        Ok(Self {
            categories,
            memberships,
        })
    }

    /// Ordered category names.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Category indices the word belongs to (empty slice on a miss).
    #[must_use]
    pub fn categories_of(&self, word: &str) -> &[usize] {
        self.memberships.get(word).map_or(&[], Vec::as_slice)
    }
}

/// The process-scoped, immutable lexicon resources, loaded once and passed
/// by reference to the extractors that need them.
#[derive(Debug, Clone, Default)]
pub struct LexiconSet {
    /// Sentiment polarity lexicon.
    pub polarity: PolarityLexicon,
    /// Category-word lexicon.
    pub categories: CategoryLexicon,
}

impl LexiconSet {
    /// Loads both resources; any missing file is fatal.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if either file cannot be read.
    pub fn load(polarity_path: &Path, category_path: &Path) -> Result<Self> {
        Ok(Self {
            polarity: PolarityLexicon::load(polarity_path)?,
            categories: CategoryLexicon::load(category_path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_polarity_load_and_lookup() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# duoman-style entries").expect("write");
        writeln!(file, "goed\ta\t0.8").expect("write");
        writeln!(file, "slecht\ta\t-0.9").expect("write");
        writeln!(file).expect("write");

        let lexicon = PolarityLexicon::load(file.path()).expect("load should succeed");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("goed", 'a'), Some(0.8));
        assert_eq!(lexicon.lookup("slecht", 'a'), Some(-0.9));
        assert_eq!(lexicon.lookup("slecht", 'v'), None);
    }

    #[test]
    fn test_polarity_missing_file_is_configuration_error() {
        let err = PolarityLexicon::load(Path::new("/nonexistent/senti.tsv"))
            .expect_err("missing file must fail");
        assert!(matches!(err, PerfilarError::Configuration { .. }));
    }

    #[test]
    fn test_polarity_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "goed\ta\tnot-a-number").expect("write");
        let err = PolarityLexicon::load(file.path()).expect_err("malformed must fail");
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_category_load_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "social\tvriend familie praten").expect("write");
        writeln!(file, "negemo\tboos bang").expect("write");

        let lexicon = CategoryLexicon::load(file.path()).expect("load should succeed");
        assert_eq!(lexicon.categories(), &["social", "negemo"]);
        assert_eq!(lexicon.categories_of("vriend"), &[0]);
        assert_eq!(lexicon.categories_of("boos"), &[1]);
        assert!(lexicon.categories_of("fiets").is_empty());
    }

    #[test]
    fn test_category_word_in_multiple_categories() {
        let lexicon = CategoryLexicon::from_entries(&[
            ("affect", &["boos", "blij"]),
            ("negemo", &["boos"]),
        ]);
        assert_eq!(lexicon.categories_of("boos"), &[0, 1]);
    }

    #[test]
    fn test_lexicon_set_load_missing_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "goed\ta\t1.0").expect("write");
        let err = LexiconSet::load(file.path(), Path::new("/nonexistent/liwc.tsv"))
            .expect_err("missing category lexicon must fail");
        assert!(matches!(err, PerfilarError::Configuration { .. }));
    }
}
