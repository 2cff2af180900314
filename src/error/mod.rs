//! Error handling module.
//!
//! Code generation itself never fails: [`CodeGenerator::generate`] absorbs
//! entropy failures with a deterministic fallback. These errors surface only
//! through the strict paths ([`CodeGenerator::try_generate`] and
//! [`sample_index`]).
//!
//! [`CodeGenerator::generate`]: crate::service::CodeGenerator::generate
//! [`CodeGenerator::try_generate`]: crate::service::CodeGenerator::try_generate
//! [`sample_index`]: crate::service::entropy::sample_index

/// Code generation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Sampling was requested from an empty character set.
    #[error("Character set is empty")]
    EmptyCharset,

    /// The secure random source failed while drawing a character.
    #[error("Entropy source failed at position {position}: {message}")]
    Entropy {
        /// Output position being drawn when the source failed.
        position: usize,
        /// Error reported by the source.
        message: String,
    },
}

impl CodeError {
    /// Build an entropy error from any displayable source error.
    pub fn entropy(position: usize, err: impl std::fmt::Display) -> Self {
        Self::Entropy {
            position,
            message: err.to_string(),
        }
    }

    /// Re-tag an entropy error with the output position it occurred at.
    #[must_use]
    pub fn at_position(self, position: usize) -> Self {
        match self {
            Self::Entropy { message, .. } => Self::Entropy { position, message },
            other => other,
        }
    }
}

/// Result type alias using `CodeError`.
pub type Result<T> = std::result::Result<T, CodeError>;
