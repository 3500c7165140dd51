//! Bilinear interpolation regression test
//!
//! Single-pixel interpolation: exact grid samples, blends between them,
//! edge clamping and coordinate validation.

use upscaler_core::PixelBuffer;
use upscaler_test::{RegParams, gradient_image};
use upscaler_transform::{TransformError, interpolate};

fn value(buf: &PixelBuffer, x: f64, y: f64) -> f64 {
    interpolate(buf, x, y)
        .ok()
        .and_then(|p| p.channel(0))
        .map_or(-1.0, f64::from)
}

#[test]
fn bilinear_reg() {
    let mut rp = RegParams::new("bilinear");

    let square = PixelBuffer::from_gray_rows(&[[10, 20], [30, 40]]).expect("square");

    // --- Test 1: Grid points return the stored sample ---
    rp.compare_values(10.0, value(&square, 0.0, 0.0), 0.0);
    rp.compare_values(20.0, value(&square, 1.0, 0.0), 0.0);
    rp.compare_values(30.0, value(&square, 0.0, 1.0), 0.0);
    rp.compare_values(40.0, value(&square, 1.0, 1.0), 0.0);

    // --- Test 2: Blends along each axis and at the center ---
    rp.compare_values(15.0, value(&square, 0.5, 0.0), 0.0);
    rp.compare_values(20.0, value(&square, 0.0, 0.5), 0.0);
    rp.compare_values(25.0, value(&square, 0.5, 0.5), 0.0);

    // --- Test 3: Right and bottom edges replicate ---
    rp.compare_values(40.0, value(&square, 1.5, 1.5), 0.0);
    rp.compare_values(40.0, value(&square, 1.99, 1.0), 0.0);

    // --- Test 4: Quarter offsets round half up ---
    let corner = PixelBuffer::from_gray_rows(&[[0, 0], [0, 255]]).expect("corner");
    rp.compare_values(16.0, value(&corner, 0.25, 0.25), 0.0);
    rp.compare_values(64.0, value(&corner, 0.5, 0.5), 0.0);

    // --- Test 5: Every channel of a multi-channel source ---
    let grad = gradient_image(6, 6, 4);
    let p = interpolate(&grad, 2.0, 3.0).expect("interpolate 4ch");
    let expected = grad.get_pixel(3, 2).unwrap_or_default();
    rp.compare_values(1.0, if p == expected { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(4.0, p.arity() as f64, 0.0);

    // --- Test 6: Results stay between the four neighbors ---
    let mut bounded = true;
    for i in 0..20 {
        for j in 0..20 {
            let (x, y) = (i as f64 * 0.25, j as f64 * 0.25);
            let v = value(&grad, x, y);
            let (xi, yi) = (x as u32, y as u32);
            let neighbors = [
                grad.get(yi, xi, 0),
                grad.get(yi, (xi + 1).min(5), 0),
                grad.get((yi + 1).min(5), xi, 0),
                grad.get((yi + 1).min(5), (xi + 1).min(5), 0),
            ];
            let lo = neighbors.iter().flatten().min().copied().unwrap_or(0) as f64;
            let hi = neighbors.iter().flatten().max().copied().unwrap_or(255) as f64;
            if v < lo || v > hi {
                bounded = false;
            }
        }
    }
    rp.compare_values(1.0, if bounded { 1.0 } else { 0.0 }, 0.0);

    // --- Test 7: Out-of-range coordinates are errors ---
    let rejected = [(-0.5, 0.0), (0.0, 2.0), (f64::NAN, 0.5)]
        .iter()
        .all(|&(x, y)| {
            matches!(
                interpolate(&square, x, y),
                Err(TransformError::InvalidCoordinate { .. })
            )
        });
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "bilinear regression test failed");
}
