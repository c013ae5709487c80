//! Perfilar: author-profiling feature extraction in pure Rust.
//!
//! Perfilar turns corpora of annotated text (raw text plus per-token
//! surface/lemma/part-of-speech tags) into dense design matrices for
//! downstream classification. A configurable set of heterogeneous feature
//! extractors — surface statistics, token/character/pos n-grams, function
//! words, lexicon categories, sentiment polarity, and a term-frequency PCA
//! projection — is orchestrated through one fit/transform lifecycle with a
//! frozen, deterministic feature space.
//!
//! # Quick Start
//!
//! ```
//! use perfilar::prelude::*;
//!
//! let corpus = vec![
//!     Instance::new("youngster", "echt heel leuk", vec![
//!         TaggedToken::new("echt", "echt", "ADJ(vrij,basis)", Some(0)),
//!         TaggedToken::new("heel", "heel", "BW()", Some(0)),
//!         TaggedToken::new("leuk", "leuk", "ADJ(vrij,basis)", Some(0)),
//!     ]),
//!     Instance::new("adult", "de trein had vertraging", vec![
//!         TaggedToken::new("de", "de", "LID(bep,stan)", Some(0)),
//!         TaggedToken::new("trein", "trein", "N(soort,ev)", Some(0)),
//!         TaggedToken::new("had", "hebben", "WW(pv,verl,ev)", Some(0)),
//!         TaggedToken::new("vertraging", "vertraging", "N(soort,ev)", Some(0)),
//!     ]),
//! ];
//!
//! let config = FeaturizerConfig::with_features(&["simple_stats", "token_ngrams"]);
//! let mut featurizer = Featurizer::from_config(&config, None).unwrap();
//! let (matrix, labels) = featurizer.fit_transform(&corpus).unwrap();
//!
//! assert_eq!(matrix.n_rows(), 2);
//! assert_eq!(labels, vec!["youngster", "adult"]);
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: Labeled instances of annotated text
//! - [`features`]: Feature extractors and the featurizer orchestrator
//! - [`lexicon`]: Polarity and category lexicon resources
//! - [`preprocessing`]: Matrix transformers (PCA)
//! - [`primitives`]: Core Vector and Matrix types
//! - [`store`]: Flat-file JSON document store for experiment artifacts
//! - [`text`]: Tokenization and term-frequency vectorization
//! - [`traits`]: Fit/transform API contracts

pub mod corpus;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod store;
pub mod text;
pub mod traits;

pub use error::{PerfilarError, Result};
