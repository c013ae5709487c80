//! Error types for perfilar operations.
//!
//! Lookup misses (a token without a lexicon or vocabulary entry) are not
//! errors anywhere in this crate; they contribute zero. The variants here
//! cover structural contract violations, which always abort.

use std::fmt;

/// Main error type for perfilar operations.
///
/// # Examples
///
/// ```
/// use perfilar::error::PerfilarError;
///
/// let err = PerfilarError::NotFitted {
///     extractor: "token_ngrams".to_string(),
/// };
/// assert!(err.to_string().contains("not fitted"));
/// ```
#[derive(Debug)]
pub enum PerfilarError {
    /// `transform` was invoked on an extractor whose vocabulary or model
    /// was never fit.
    NotFitted {
        /// Name of the offending extractor
        extractor: String,
    },

    /// Unknown feature name requested, or a required lexicon resource is
    /// missing or unreadable. Fatal at construction time.
    Configuration {
        /// What was misconfigured
        message: String,
    },

    /// An extractor produced a block whose row count disagrees with the
    /// corpus length. Never silently truncated or padded.
    ShapeMismatch {
        /// Name of the offending extractor
        extractor: String,
        /// Expected row count (corpus length)
        expected: usize,
        /// Rows actually produced
        actual: usize,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PerfilarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfilarError::NotFitted { extractor } => {
                write!(f, "Extractor not fitted: {extractor}, call fit() first")
            }
            PerfilarError::Configuration { message } => {
                write!(f, "Configuration error: {message}")
            }
            PerfilarError::ShapeMismatch {
                extractor,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Block shape mismatch from {extractor}: expected {expected} rows, got {actual}"
                )
            }
            PerfilarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            PerfilarError::Io(e) => write!(f, "I/O error: {e}"),
            PerfilarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PerfilarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfilarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PerfilarError {
    fn from(err: std::io::Error) -> Self {
        PerfilarError::Io(err)
    }
}

impl From<&str> for PerfilarError {
    fn from(msg: &str) -> Self {
        PerfilarError::Other(msg.to_string())
    }
}

impl From<String> for PerfilarError {
    fn from(msg: String) -> Self {
        PerfilarError::Other(msg)
    }
}

impl PerfilarError {
    /// Create a `NotFitted` error for the named extractor.
    #[must_use]
    pub fn not_fitted(extractor: &str) -> Self {
        Self::NotFitted {
            extractor: extractor.to_string(),
        }
    }

    /// Create a `Configuration` error with descriptive context.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for PerfilarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<PerfilarError> for &str {
    fn eq(&self, other: &PerfilarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PerfilarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_fitted_display() {
        let err = PerfilarError::not_fitted("char_ngrams");
        assert!(err.to_string().contains("not fitted"));
        assert!(err.to_string().contains("char_ngrams"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = PerfilarError::ShapeMismatch {
            extractor: "liwc".to_string(),
            expected: 10,
            actual: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("liwc"));
        assert!(msg.contains("10"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_configuration_display() {
        let err = PerfilarError::configuration("unknown feature: nonexistent_feature");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("nonexistent_feature"));
    }

    #[test]
    fn test_from_io_error_has_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing lexicon");
        let err = PerfilarError::from(io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_str_and_string() {
        let a = PerfilarError::from("plain message");
        let b = PerfilarError::from("plain message".to_string());
        assert_eq!(a, "plain message");
        assert_eq!(b, "plain message");
    }

    #[test]
    fn test_eq_with_str() {
        let err = PerfilarError::Other("boom".to_string());
        assert!(err == "boom");
        assert!("boom" == err);
    }
}
