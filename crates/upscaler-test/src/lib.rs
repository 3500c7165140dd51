//! upscaler-test - Regression test harness for the upscaler crates
//!
//! Every crate's `tests/*_reg.rs` drives its checks through [`RegParams`],
//! which numbers each comparison, records failures instead of panicking
//! on the first one, and reports a summary in [`RegParams::cleanup`].
//!
//! Three modes are supported:
//!
//! - **Generate**: Write golden files for later comparison
//! - **Compare**: Compare written images with golden files (default)
//! - **Display**: Run checks and write images without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use upscaler_test::RegParams;
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_values(40.0, value as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use upscaler_core::PixelBuffer;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // upscaler-test is at crates/upscaler-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a synthetic diagonal gradient.
///
/// Channel 0 ramps from 0 at the top-left corner to 255 at the bottom-right
/// corner. Further channels carry the inverted ramp (channel 1) and then
/// constant 255, so a 2-channel gradient looks like gray+alpha.
pub fn gradient_image(height: u32, width: u32, channels: u32) -> PixelBuffer {
    let span = (height + width).saturating_sub(2).max(1);
    let mut data = Vec::with_capacity(height as usize * width as usize * channels as usize);
    for row in 0..height {
        for col in 0..width {
            let value = ((row + col) * 255 / span) as u8;
            for channel in 0..channels {
                data.push(match channel {
                    0 => value,
                    1 => 255 - value,
                    _ => 255,
                });
            }
        }
    }
    PixelBuffer::from_raw(height, width, channels, data)
        .unwrap_or_else(|e| panic!("invalid gradient shape {height}x{width}x{channels}: {e}"))
}

/// Build a single-channel checkerboard of `cell`-sized squares.
pub fn checkerboard_image(height: u32, width: u32, cell: u32) -> PixelBuffer {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(height as usize * width as usize);
    for row in 0..height {
        for col in 0..width {
            let on = ((row / cell) + (col / cell)) % 2 == 0;
            data.push(if on { 255 } else { 0 });
        }
    }
    PixelBuffer::from_raw(height, width, 1, data)
        .unwrap_or_else(|e| panic!("invalid checkerboard shape {height}x{width}: {e}"))
}
