//! Two-level thresholding
//!
//! Each pixel is compared against a threshold pixel using tuple ordering:
//! the first channel decides unless it ties, then the second, and so on.
//! Pixels strictly below the threshold become `black`, all others
//! (including an exact match) become `white`.
//!
//! Tuple ordering is not a brightness comparison. With a threshold of
//! `(160, 160, 160)`, the pixel `(159, 255, 255)` is below it and
//! `(161, 0, 0)` is not.

use crate::{ColorError, ColorResult};
use tracing::debug;
use upscaler_core::{Pixel, PixelBuffer};

/// Threshold and replacement colors for [`binarize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Pixels strictly below this map to `black`
    pub threshold: Pixel,
    /// Replacement for pixels below the threshold
    pub black: Pixel,
    /// Replacement for all other pixels
    pub white: Pixel,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            threshold: Pixel::from([160, 160, 160]),
            black: Pixel::from([0, 0, 0]),
            white: Pixel::from([255, 255, 255]),
        }
    }
}

impl ThresholdConfig {
    /// Threshold with every channel at `level`, producing RGB black and
    /// white.
    ///
    /// Use this when the input arity is known, e.g. `uniform(2, 160)` for
    /// gray+alpha pixels.
    pub fn uniform(arity: usize, level: u8) -> Self {
        Self {
            threshold: Pixel::uniform(arity, level),
            ..Self::default()
        }
    }

    /// Check that `black` and `white` share a non-zero arity.
    fn validate_outputs(&self) -> ColorResult<()> {
        if self.black.arity() != self.white.arity() {
            return Err(ColorError::ArityMismatch {
                what: "white",
                expected: self.black.arity(),
                actual: self.white.arity(),
            });
        }
        if self.black.arity() == 0 {
            return Err(ColorError::InvalidParameters(
                "black and white must have at least one channel".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    fn select(&self, pixel: &[u8]) -> &Pixel {
        if pixel < self.threshold.channels() {
            &self.black
        } else {
            &self.white
        }
    }
}

/// Map every pixel to `config.black` or `config.white`.
///
/// Returns a sequence of the same length and order as `pixels`.
///
/// # Errors
///
/// Returns [`ColorError::ArityMismatch`] if any pixel's arity differs from
/// the threshold's, or if `black` and `white` differ in arity.
///
/// # Examples
///
/// ```
/// use upscaler_color::{ThresholdConfig, binarize};
/// use upscaler_core::Pixel;
///
/// let out = binarize(
///     &[Pixel::from([100, 200, 50]), Pixel::from([200, 0, 0])],
///     &ThresholdConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(out, vec![Pixel::from([0, 0, 0]), Pixel::from([255, 255, 255])]);
/// ```
pub fn binarize(pixels: &[Pixel], config: &ThresholdConfig) -> ColorResult<Vec<Pixel>> {
    config.validate_outputs()?;
    let arity = config.threshold.arity();
    pixels
        .iter()
        .map(|p| {
            if p.arity() != arity {
                return Err(ColorError::ArityMismatch {
                    what: "pixel",
                    expected: arity,
                    actual: p.arity(),
                });
            }
            Ok(config.select(p.channels()).clone())
        })
        .collect()
}

/// Binarize a whole buffer.
///
/// The result has the input's height and width and `config.black.arity()`
/// channels.
///
/// # Errors
///
/// As [`binarize`], comparing the buffer's channel count with the
/// threshold's arity.
pub fn binarize_buffer(buf: &PixelBuffer, config: &ThresholdConfig) -> ColorResult<PixelBuffer> {
    config.validate_outputs()?;
    if buf.channels() as usize != config.threshold.arity() {
        return Err(ColorError::ArityMismatch {
            what: "pixel",
            expected: config.threshold.arity(),
            actual: buf.channels() as usize,
        });
    }

    let out_channels = config.black.arity();
    let mut data = Vec::with_capacity(buf.pixel_count() * out_channels);
    let mut below = 0usize;
    for pixel in buf.pixels() {
        let chosen = config.select(pixel);
        if chosen == &config.black {
            below += 1;
        }
        data.extend_from_slice(chosen.channels());
    }
    debug!(
        threshold = %config.threshold,
        below,
        total = buf.pixel_count(),
        "binarized buffer"
    );

    Ok(PixelBuffer::from_raw(
        buf.height(),
        buf.width(),
        out_channels as u32,
        data,
    )?)
}
