//! upscaler core - Basic data structures for the upscaling pipeline
//!
//! This crate provides the data structures shared by every stage:
//!
//! - [`PixelBuffer`] - Owned `[height, width, channels]` array of 8-bit samples
//! - [`Pixel`] - One pixel's channel values, ordered like a tuple
//! - [`Error`] / [`Result`] - Core error type

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::Pixel;
