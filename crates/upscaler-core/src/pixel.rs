//! Pixel - one pixel's channel values
//!
//! A `Pixel` is an ordered sequence of 8-bit channel samples. Its length
//! (the arity) matches the channel count of the buffer it came from.
//!
//! # Ordering
//!
//! Pixels compare like tuples: channel 0 first, then channel 1 and so on.
//! `(159, 255) < (160, 0)` holds even though the second channel is larger.
//! Pixels of different arity are comparable, but callers that rely on the
//! ordering (thresholding) must check arity first.

use std::fmt;

/// Channel values of a single pixel
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pixel(Vec<u8>);

impl Pixel {
    /// Create a pixel from its channel values.
    pub fn new(channels: Vec<u8>) -> Self {
        Self(channels)
    }

    /// Create a pixel with `arity` channels all set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use upscaler_core::Pixel;
    ///
    /// assert_eq!(Pixel::uniform(3, 160), Pixel::from([160, 160, 160]));
    /// ```
    pub fn uniform(arity: usize, value: u8) -> Self {
        Self(vec![value; arity])
    }

    /// Number of channels.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Channel values as a slice.
    pub fn channels(&self) -> &[u8] {
        &self.0
    }

    /// Get one channel value, `None` if out of range.
    pub fn channel(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Consume the pixel and return its channel values.
    pub fn into_channels(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Pixel {
    fn from(channels: Vec<u8>) -> Self {
        Self(channels)
    }
}

impl From<&[u8]> for Pixel {
    fn from(channels: &[u8]) -> Self {
        Self(channels.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Pixel {
    fn from(channels: [u8; N]) -> Self {
        Self(channels.to_vec())
    }
}

impl AsRef<[u8]> for Pixel {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
