//! Bilinear interpolation of a single pixel
//!
//! Estimates the pixel value at a fractional source coordinate from the
//! four surrounding samples, blending horizontally first and then
//! vertically.
//!
//! ```text
//!   (yi1, xi) TL ---- TR (yi1, xi1)
//!             |        |
//!             |  (y,x) |
//!   (yi,  xi) BL ---- BR (yi,  xi1)
//! ```
//!
//! The "next" indices `xi1`/`yi1` are clamped to the last column/row, so
//! samples on the right and bottom edges are replicated instead of read
//! out of bounds.

use crate::{TransformError, TransformResult};
use upscaler_core::{Pixel, PixelBuffer};

/// Interpolate the pixel at source coordinate `(x, y)`.
///
/// `x` is the column coordinate and `y` the row coordinate. Both may be
/// fractional; `floor(x)` must be a valid column and `floor(y)` a valid
/// row, so `0 <= x < width` and `0 <= y < height`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidCoordinate`] for negative, non-finite,
/// or out-of-range coordinates.
///
/// # Examples
///
/// ```
/// use upscaler_core::{Pixel, PixelBuffer};
/// use upscaler_transform::interpolate;
///
/// let src = PixelBuffer::from_gray_rows(&[[10, 20], [30, 40]]).unwrap();
/// assert_eq!(interpolate(&src, 0.5, 0.0).unwrap(), Pixel::from([15]));
/// assert_eq!(interpolate(&src, 1.5, 1.5).unwrap(), Pixel::from([40]));
/// ```
pub fn interpolate(source: &PixelBuffer, x: f64, y: f64) -> TransformResult<Pixel> {
    if !in_range(x, source.width()) || !in_range(y, source.height()) {
        return Err(TransformError::InvalidCoordinate {
            x,
            y,
            width: source.width(),
            height: source.height(),
        });
    }
    let mut out = vec![0u8; source.channels() as usize];
    interpolate_into(source, x, y, &mut out);
    Ok(Pixel::new(out))
}

#[inline]
fn in_range(v: f64, len: u32) -> bool {
    v.is_finite() && v >= 0.0 && v < f64::from(len)
}

/// Interpolate into `out` without validating the coordinate.
///
/// `out` must hold exactly one pixel's worth of channels. Callers must
/// guarantee `0 <= x < width` and `0 <= y < height`.
#[inline]
pub(crate) fn interpolate_into(source: &PixelBuffer, x: f64, y: f64, out: &mut [u8]) {
    let xi = x.floor();
    let yi = y.floor();
    let xf = x - xi;
    let yf = y - yi;

    let xi = xi as u32;
    let yi = yi as u32;
    let xi1 = (xi + 1).min(source.width() - 1);
    let yi1 = (yi + 1).min(source.height() - 1);

    let bl = source.pixel(yi, xi);
    let br = source.pixel(yi, xi1);
    let tl = source.pixel(yi1, xi);
    let tr = source.pixel(yi1, xi1);
    let (Some(bl), Some(br), Some(tl), Some(tr)) = (bl, br, tl, tr) else {
        return;
    };

    for (c, dst) in out.iter_mut().enumerate() {
        let bottom = xf * f64::from(br[c]) + (1.0 - xf) * f64::from(bl[c]);
        let top = xf * f64::from(tr[c]) + (1.0 - xf) * f64::from(tl[c]);
        let value = yf * top + (1.0 - yf) * bottom;
        *dst = round_half_up(value);
    }
}

/// `floor(v + 0.5)` saturated to the `u8` range.
#[inline]
fn round_half_up(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}
