//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use perfilar::prelude::*;
//! ```

pub use crate::corpus::{Instance, TaggedToken};
pub use crate::error::{PerfilarError, Result};
pub use crate::features::{Featurizer, FeaturizerConfig};
pub use crate::lexicon::LexiconSet;
pub use crate::primitives::{Matrix, Vector};
pub use crate::store::DocumentStore;
pub use crate::traits::{Extractor, FitLocality, Transformer};
