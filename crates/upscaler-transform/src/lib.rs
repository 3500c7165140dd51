//! upscaler-transform - Bilinear resampling
//!
//! This crate provides the resampling stage of the upscaler:
//!
//! - Single-pixel bilinear interpolation with edge clamping
//! - Resizing to an explicit target size, optionally with progress reporting
//! - Scaling by per-axis factors

pub mod bilinear;
mod error;
pub mod scale;

pub use bilinear::interpolate;
pub use error::{TransformError, TransformResult};
pub use scale::{ScaleFactors, resize, resize_with_progress, scale};
