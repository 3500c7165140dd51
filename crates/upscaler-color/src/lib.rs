//! upscaler-color - Thresholding and color conversion
//!
//! - **Thresholding** ([`threshold`]): two-level binarization of pixels
//!   against a threshold pixel under tuple ordering
//! - **Color space conversion** ([`colorspace`]): luminance and
//!   grayscale-with-alpha

pub mod colorspace;
pub mod error;
pub mod threshold;

pub use error::{ColorError, ColorResult};

pub use colorspace::{convert_to_gray_alpha, rgb_to_gray};
pub use threshold::{ThresholdConfig, binarize, binarize_buffer};
