//! Error types for signal generation and spectrum analysis.

use thiserror::Error;

/// Errors that can occur while building, generating or analyzing signals.
///
/// Every variant is recoverable at the request boundary: the caller reports
/// it and keeps whatever state it had before the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// A numeric input is outside its domain, or an input string is malformed.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// More harmonic components than a polyharmonic signal accepts.
    #[error("too many harmonic components: {0} supplied, at most 7 allowed")]
    TooManyComponents(usize),

    /// Transform length is not one of the supported power-of-two sizes.
    #[error("unsupported transform length {0}, expected one of 128, 256, 512, 1024, 2048, 4096")]
    InvalidTransformLength(usize),

    /// Spectrum requested for a zero-length sequence.
    #[error("signal is empty")]
    EmptySignal,

    /// Two sequences that must line up have different lengths.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl SignalError {
    /// Shorthand for an [`SignalError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        SignalError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;
