//! Error types for upscaler-color

use thiserror::Error;

/// Errors that can occur during thresholding and color conversion
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] upscaler_core::Error),

    /// Two pixels that must share a channel count do not
    #[error("arity mismatch for {what}: expected {expected}, got {actual}")]
    ArityMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Channel count this operation cannot handle
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
