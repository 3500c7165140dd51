//! Sample and pixel access
//!
//! Checked accessors return `Option` (reads) or `Result` (writes). The
//! `_unchecked` variants skip the bounds test and are meant for inner
//! loops whose indices are already known to be in range.

use super::PixelBuffer;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl PixelBuffer {
    /// Offset of the first sample of pixel `(row, col)`.
    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * self.channels as usize
    }

    #[inline]
    fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Get one sample.
    ///
    /// Returns `None` if any index is out of range.
    pub fn get(&self, row: u32, col: u32, channel: u32) -> Option<u8> {
        if !self.in_bounds(row, col) || channel >= self.channels {
            return None;
        }
        Some(self.data[self.offset(row, col) + channel as usize])
    }

    /// Get one sample without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the data.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32, channel: u32) -> u8 {
        self.data[self.offset(row, col) + channel as usize]
    }

    /// Channel samples of pixel `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<&[u8]> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let start = self.offset(row, col);
        Some(&self.data[start..start + self.channels as usize])
    }

    /// Copy pixel `(row, col)` into a [`Pixel`].
    pub fn get_pixel(&self, row: u32, col: u32) -> Option<Pixel> {
        self.pixel(row, col).map(Pixel::from)
    }

    /// Mutable channel samples of pixel `(row, col)`.
    pub fn pixel_mut(&mut self, row: u32, col: u32) -> Option<&mut [u8]> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let start = self.offset(row, col);
        let channels = self.channels as usize;
        Some(&mut self.data[start..start + channels])
    }

    /// Set one sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any index is out of range.
    pub fn set(&mut self, row: u32, col: u32, channel: u32, value: u8) -> Result<()> {
        if !self.in_bounds(row, col) || channel >= self.channels {
            return Err(Error::IndexOutOfBounds {
                index: self.offset(row, col) + channel as usize,
                len: self.data.len(),
            });
        }
        let index = self.offset(row, col) + channel as usize;
        self.data[index] = value;
        Ok(())
    }

    /// Set every channel of pixel `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for bad coordinates and
    /// [`Error::ChannelMismatch`] if `values` is not exactly one pixel wide.
    pub fn set_pixel(&mut self, row: u32, col: u32, values: &[u8]) -> Result<()> {
        if values.len() != self.channels as usize {
            return Err(Error::ChannelMismatch {
                expected: self.channels,
                actual: values.len(),
            });
        }
        let len = self.data.len();
        let index = self.offset(row, col);
        let dst = self
            .pixel_mut(row, col)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        dst.copy_from_slice(values);
        Ok(())
    }
}
