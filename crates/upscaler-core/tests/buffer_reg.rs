//! PixelBuffer regression test
//!
//! Tests buffer construction, pixel access, row/pixel iteration and
//! conversion to and from `Pixel` sequences.

use upscaler_core::{Error, Pixel, PixelBuffer};
use upscaler_test::{RegParams, gradient_image};

// ==========================================================================
// Test 1: Construction and shape
// ==========================================================================

#[test]
fn buffer_reg_construction() {
    let mut rp = RegParams::new("buffer_construction");

    let buf = PixelBuffer::new(30, 40, 2).expect("new");
    rp.compare_values(30.0, buf.height() as f64, 0.0);
    rp.compare_values(40.0, buf.width() as f64, 0.0);
    rp.compare_values(2.0, buf.channels() as f64, 0.0);
    rp.compare_values(1200.0, buf.pixel_count() as f64, 0.0);
    rp.compare_values(80.0, buf.row_stride() as f64, 0.0);
    rp.compare_values(2400.0, buf.data().len() as f64, 0.0);
    rp.compare_values(0.0, buf.data().iter().map(|&v| v as f64).sum::<f64>(), 0.0);

    // Invalid shapes
    let zero_w = matches!(PixelBuffer::new(3, 0, 1), Err(Error::InvalidDimension { .. }));
    let zero_c = matches!(PixelBuffer::new(3, 3, 0), Err(Error::InvalidChannels(0)));
    let short = matches!(
        PixelBuffer::from_raw(2, 2, 1, vec![0; 3]),
        Err(Error::DataLength { .. })
    );
    rp.compare_values(1.0, if zero_w { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if zero_c { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if short { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "buffer_construction regression test failed");
}

// ==========================================================================
// Test 2: Pixel access
// ==========================================================================

#[test]
fn buffer_reg_access() {
    let mut rp = RegParams::new("buffer_access");

    let mut buf = gradient_image(8, 6, 3);
    let (h, w, _) = buf.shape();

    // Corners of the gradient
    rp.compare_values(0.0, buf.get(0, 0, 0).unwrap_or(1) as f64, 0.0);
    rp.compare_values(255.0, buf.get(h - 1, w - 1, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(255.0, buf.get(3, 3, 2).unwrap_or(0) as f64, 0.0);

    // Out of bounds
    rp.compare_values(1.0, if buf.get(h, 0, 0).is_none() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if buf.pixel(0, w).is_none() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if buf.set(0, 0, 3, 1).is_err() { 1.0 } else { 0.0 }, 0.0);

    // Write then read back
    buf.set_pixel(2, 4, &[9, 8, 7]).expect("set_pixel");
    let p = buf.get_pixel(2, 4).expect("get_pixel");
    rp.compare_values(1.0, if p == Pixel::from([9, 8, 7]) { 1.0 } else { 0.0 }, 0.0);
    let wrong_arity = matches!(
        buf.set_pixel(0, 0, &[1, 2]),
        Err(Error::ChannelMismatch { .. })
    );
    rp.compare_values(1.0, if wrong_arity { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "buffer_access regression test failed");
}

// ==========================================================================
// Test 3: Pixel sequences
// ==========================================================================

#[test]
fn buffer_reg_pixels() {
    let mut rp = RegParams::new("buffer_pixels");

    let buf = gradient_image(5, 7, 2);
    let pixels = buf.to_pixels();
    rp.compare_values(35.0, pixels.len() as f64, 0.0);
    rp.compare_values(5.0, buf.rows().count() as f64, 0.0);

    // Row-major order
    let third = buf.pixel(0, 2).map(Pixel::from);
    rp.compare_values(1.0, if third.as_ref() == Some(&pixels[2]) { 1.0 } else { 0.0 }, 0.0);

    let rebuilt = PixelBuffer::from_pixels(5, 7, &pixels).expect("from_pixels");
    rp.compare_buffers(&buf, &rebuilt);

    // Mixed arity is rejected
    let mut mixed = pixels.clone();
    mixed[10] = Pixel::from([1, 2, 3]);
    rp.compare_values(
        1.0,
        if PixelBuffer::from_pixels(5, 7, &mixed).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "buffer_pixels regression test failed");
}
