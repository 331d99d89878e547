//! Error type definitions for the authentication API

use thiserror::Error as ThisError;

/// Primary error type for recrypto operations
///
/// A rejected challenge answer is not an error; `check_challenge` reports it
/// as `false`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// Textual input that cannot decode to a scalar, point or digest
    #[error("invalid encoding: {context}: {message}")]
    InvalidEncoding {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        message: String,
    },

    /// Decoded coordinates do not satisfy the curve equation
    #[error("point not on curve: {context}")]
    PointNotOnCurve {
        /// What was being decoded
        context: &'static str,
    },

    /// The caller's output buffer cannot hold the full result
    #[error("buffer too small for {context}: need {required} bytes, have {available}")]
    BufferTooSmall {
        /// What was being written
        context: &'static str,
        /// Bytes needed
        required: usize,
        /// Bytes available
        available: usize,
    },

    /// An arithmetic invariant failed; never caused by caller input
    #[error("internal error: {context}: {message}")]
    Internal {
        /// Operation that failed
        context: &'static str,
        /// Details
        message: String,
    },
}

/// Result type for recrypto operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an `InvalidEncoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::BufferTooSmall {
                required,
                available,
                ..
            } => Self::BufferTooSmall {
                context,
                required,
                available,
            },
            Self::Internal { message, .. } => Self::Internal { context, message },
        }
    }

    /// True for errors caused by malformed caller input
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEncoding { .. } | Self::PointNotOnCurve { .. }
        )
    }
}
