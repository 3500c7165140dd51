//! Color space conversion
//!
//! Luminance uses the ITU-R BT.601 weights in 16-bit fixed point:
//!
//! ```text
//! L = (R * 19595 + G * 38470 + B * 7471 + 0x8000) >> 16
//! ```
//!
//! The weights sum to 65536, so white maps to 255 exactly.

use crate::{ColorError, ColorResult};
use tracing::debug;
use upscaler_core::PixelBuffer;

/// Convert RGB to a luminance value.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Convert a buffer to two-channel gray+alpha.
///
/// | Input channels | Gray | Alpha |
/// |---|---|---|
/// | 1 | copied | 255 |
/// | 2 | copied | copied |
/// | 3 | luminance | 255 |
/// | 4 | luminance | copied |
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedChannels`] for any other channel count.
pub fn convert_to_gray_alpha(buf: &PixelBuffer) -> ColorResult<PixelBuffer> {
    let channels = buf.channels();
    if channels == 2 {
        return Ok(buf.clone());
    }
    if !matches!(channels, 1 | 3 | 4) {
        return Err(ColorError::UnsupportedChannels(channels));
    }

    let mut data = Vec::with_capacity(buf.pixel_count() * 2);
    for p in buf.pixels() {
        let (gray, alpha) = match *p {
            [g] => (g, 255),
            [r, g, b] => (rgb_to_gray(r, g, b), 255),
            [r, g, b, a] => (rgb_to_gray(r, g, b), a),
            _ => return Err(ColorError::UnsupportedChannels(channels)),
        };
        data.push(gray);
        data.push(alpha);
    }
    debug!(from = channels, "converted to gray+alpha");

    Ok(PixelBuffer::from_raw(buf.height(), buf.width(), 2, data)?)
}
