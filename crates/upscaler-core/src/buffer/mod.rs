//! PixelBuffer - The image container passed between pipeline stages
//!
//! A `PixelBuffer` is a `[height, width, channels]` array of 8-bit
//! samples.
//!
//! # Sample layout
//!
//! - Rows are stored top to bottom, pixels left to right within a row
//! - Channels of one pixel are interleaved and contiguous
//! - The sample for `(row, col, channel)` lives at
//!   `(row * width + col) * channels + channel`
//!
//! # Ownership model
//!
//! Every stage (decode, resample, threshold) takes a buffer by reference
//! and returns a freshly allocated one. Buffers are never shared between
//! an input and an output, so there is no `Arc` and no copy-on-write.

mod access;

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Owned `[height, width, channels]` image buffer
///
/// # Invariants
///
/// - `height >= 1`, `width >= 1`, `channels >= 1`
/// - `data.len() == height * width * channels`
///
/// # Examples
///
/// ```
/// use upscaler_core::PixelBuffer;
///
/// // A 480-row, 640-column gray+alpha buffer
/// let buf = PixelBuffer::new(480, 640, 2).unwrap();
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.channels(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    height: u32,
    width: u32,
    channels: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `height` or `width` is 0,
    /// [`Error::InvalidChannels`] if `channels` is 0, and
    /// [`Error::Allocation`] if the samples do not fit in memory.
    pub fn new(height: u32, width: u32, channels: u32) -> Result<Self> {
        let len = Self::sample_count(height, width, channels)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Allocation { len })?;
        data.resize(len, 0);
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Wrap existing interleaved sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not hold exactly
    /// `height * width * channels` samples.
    pub fn from_raw(height: u32, width: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_count(height, width, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Build a buffer from pixels given in row-major order.
    ///
    /// All pixels must share an arity, which becomes the channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if the pixel count is not
    /// `height * width`, and [`Error::ChannelMismatch`] if the pixels
    /// disagree on arity.
    pub fn from_pixels(height: u32, width: u32, pixels: &[Pixel]) -> Result<Self> {
        let channels = pixels.first().map_or(0, Pixel::arity);
        let channels = u32::try_from(channels).map_err(|_| Error::InvalidChannels(u32::MAX))?;
        let expected = height as usize * width as usize;
        if pixels.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: pixels.len(),
            });
        }

        let mut data = Vec::with_capacity(Self::sample_count(height, width, channels)?);
        for pixel in pixels {
            if pixel.arity() != channels as usize {
                return Err(Error::ChannelMismatch {
                    expected: channels,
                    actual: pixel.arity(),
                });
            }
            data.extend_from_slice(pixel.channels());
        }

        Self::from_raw(height, width, channels, data)
    }

    /// Build a single-channel buffer from rows of samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for no rows or empty rows and
    /// [`Error::DataLength`] for ragged rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use upscaler_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_gray_rows(&[[10, 20], [30, 40]]).unwrap();
    /// assert_eq!(buf.get(1, 0, 0), Some(30));
    /// ```
    pub fn from_gray_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::DataLength {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        let height = u32::try_from(height).map_err(|_| Error::InvalidDimension {
            width: 0,
            height: u32::MAX,
        })?;
        let width = u32::try_from(width).map_err(|_| Error::InvalidDimension {
            width: u32::MAX,
            height,
        })?;
        Self::from_raw(height, width, 1, data)
    }

    /// Validate a shape and compute its sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero or overflowing size
    /// and [`Error::InvalidChannels`] if `channels` is 0.
    pub fn sample_count(height: u32, width: u32, channels: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }
        (height as usize)
            .checked_mul(width as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Shape as `(height, width, channels)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.height, self.width, self.channels)
    }

    /// Number of pixels (`height * width`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over rows as sample slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.row_stride())
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// Copy every pixel out in row-major order.
    pub fn to_pixels(&self) -> Vec<Pixel> {
        self.pixels().map(Pixel::from).collect()
    }
}
