//! Corpus data model: labeled instances of annotated text.
//!
//! An instance carries the raw text plus the per-token output of an external
//! tagging process (surface form, lemma, part-of-speech tag, sentence
//! index). The tag sequence need not align with any particular tokenization
//! of the raw text, and the sentence index may be absent for some tokens.

use serde::{Deserialize, Serialize};

/// One tagged token from the external annotation process.
///
/// # Examples
///
/// ```
/// use perfilar::corpus::TaggedToken;
///
/// let tok = TaggedToken::new("katten", "kat", "N(soort,mv)", Some(0));
/// assert_eq!(tok.lemma, "kat");
/// assert_eq!(tok.sentence_index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form as it appears in the text.
    pub surface: String,
    /// Lemma or normalized form.
    pub lemma: String,
    /// Part-of-speech tag (CGN-style, e.g. `WW(pv,tgw,mv)`).
    pub pos: String,
    /// Sentence index, when the annotation provided one.
    pub sentence: Option<u32>,
}

impl TaggedToken {
    /// Creates a tagged token.
    #[must_use]
    pub fn new(surface: &str, lemma: &str, pos: &str, sentence: Option<u32>) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            sentence,
        }
    }

    /// Sentence index with the missing-index convention applied (0).
    #[must_use]
    pub fn sentence_index(&self) -> u32 {
        self.sentence.unwrap_or(0)
    }
}

/// One labeled example: opaque category label, raw text, tag sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Opaque category token for downstream classification.
    pub label: String,
    /// Unprocessed text.
    pub raw: String,
    /// Ordered tagged tokens.
    pub tags: Vec<TaggedToken>,
}

impl Instance {
    /// Creates an instance.
    #[must_use]
    pub fn new(label: &str, raw: &str, tags: Vec<TaggedToken>) -> Self {
        Self {
            label: label.to_string(),
            raw: raw.to_string(),
            tags,
        }
    }

    /// Surface forms of the tag sequence, in order.
    #[must_use]
    pub fn surfaces(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.surface.as_str()).collect()
    }

    /// Part-of-speech tags of the tag sequence, in order.
    #[must_use]
    pub fn pos_tags(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.pos.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sentence_index_defaults_to_zero() {
        let tok = TaggedToken::new("dag", "dag", "N(soort,ev)", None);
        assert_eq!(tok.sentence_index(), 0);
    }

    #[test]
    fn test_instance_accessors() {
        let inst = Instance::new(
            "pos",
            "ab",
            vec![
                TaggedToken::new("a", "a", "N(", Some(0)),
                TaggedToken::new("b", "b", "N(", Some(0)),
            ],
        );
        assert_eq!(inst.surfaces(), vec!["a", "b"]);
        assert_eq!(inst.pos_tags(), vec!["N(", "N("]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let inst = Instance::new(
            "neg",
            "hallo wereld",
            vec![TaggedToken::new("hallo", "hallo", "TSW()", Some(1))],
        );
        let json = serde_json::to_string(&inst).expect("serialize");
        let back: Instance = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(inst, back);
    }
}
