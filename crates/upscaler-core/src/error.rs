//! Error types for upscaler-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! the buffer's internal layout.

use thiserror::Error;

/// upscaler-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer dimensions (zero width or height)
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Raw sample data does not match the declared shape
    #[error("data length mismatch: expected {expected} samples, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Pixel arity differs from the buffer's channel count
    #[error("pixel has {actual} channels, buffer has {expected}")]
    ChannelMismatch { expected: u32, actual: usize },

    /// Sample storage could not be allocated
    #[error("cannot allocate {len} samples")]
    Allocation { len: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
