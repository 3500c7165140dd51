//! Error types for upscaler-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] upscaler_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid resampling parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Source coordinate outside the image
    #[error("coordinate ({x}, {y}) outside {width}x{height} source")]
    InvalidCoordinate {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
