//! Upscaler - Bilinear image enlargement with two-level thresholding
//!
//! # Overview
//!
//! The pipeline reads an image, converts it to gray+alpha, enlarges it
//! (5x by default) with bilinear interpolation, and thresholds the result
//! into black and white.
//!
//! - Image I/O (PNG, binary PNM)
//! - Bilinear resampling with edge clamping and progress reporting
//! - Tuple-ordered thresholding
//!
//! # Example
//!
//! ```
//! use upscaler::{PixelBuffer, pipeline::enlarge};
//!
//! let src = PixelBuffer::from_gray_rows(&[[0, 0], [0, 255]]).unwrap();
//! let big = enlarge(&src, 5.0, None).unwrap();
//! assert_eq!(big.shape(), (10, 10, 1));
//! ```

pub mod pipeline;
pub mod progress;

// Re-export core types (primary data structures used everywhere)
pub use upscaler_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use upscaler_color as color;
pub use upscaler_io as io;
pub use upscaler_transform as transform;

pub use pipeline::{PipelineConfig, PipelineError, PipelineOutput, PipelineResult, enlarge, run};
pub use progress::{ProgressBar, render_progress};
