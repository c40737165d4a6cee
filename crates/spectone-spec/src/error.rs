//! Error types for request parsing.

use thiserror::Error;

/// Errors raised while turning untyped input into request types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Policy name is not one of the three supported variants.
    #[error("unknown policy: '{name}' (expected 'linear', 'inverse', or 'modulo')")]
    UnknownPolicy {
        /// The rejected policy name.
        name: String,
    },

    /// Freeform spectrum text could not be parsed into (mz, intensity) pairs.
    #[error("malformed spectrum text: {message}")]
    MalformedSpectrumText {
        /// What was wrong with the text.
        message: String,
    },
}

impl SpecError {
    /// Creates a malformed-spectrum-text error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSpectrumText {
            message: message.into(),
        }
    }
}
