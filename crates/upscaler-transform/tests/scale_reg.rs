//! Scale regression test
//!
//! Bilinear resizing on synthetic gradients and checkerboards: output
//! dimensions, preserved source samples, range bounds and progress.

use upscaler_io::ImageFormat;
use upscaler_test::{RegParams, checkerboard_image, gradient_image};
use upscaler_transform::{ScaleFactors, resize, resize_with_progress, scale};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let pixs = gradient_image(24, 32, 2);
    let (h, w, d) = pixs.shape();
    eprintln!("Image size: {}x{} channels={}", w, h, d);

    // --- Test 1: Scale up 5x ---
    let up5 = scale(&pixs, 5.0, 5.0, None).expect("scale 5x");
    rp.compare_values((w * 5) as f64, up5.width() as f64, 0.0);
    rp.compare_values((h * 5) as f64, up5.height() as f64, 0.0);
    rp.compare_values(d as f64, up5.channels() as f64, 0.0);
    eprintln!("  scale 5x: {}x{}", up5.width(), up5.height());

    // --- Test 2: Every 5th output sample is an exact source sample ---
    let mut exact = true;
    for row in 0..h {
        for col in 0..w {
            if up5.pixel(row * 5, col * 5) != pixs.pixel(row, col) {
                exact = false;
            }
        }
    }
    rp.compare_values(1.0, if exact { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: Fractional factor truncates ---
    let frac = scale(&pixs, 1.3, 2.7, None).expect("scale fractional");
    rp.compare_values((h as f64 * 1.3).floor(), frac.height() as f64, 0.0);
    rp.compare_values((w as f64 * 2.7).floor(), frac.width() as f64, 0.0);

    // --- Test 4: Identity resize ---
    let same = resize(&pixs, h, w).expect("identity resize");
    rp.compare_buffers(&pixs, &same);

    // --- Test 5: Output stays within the source range ---
    let board = checkerboard_image(8, 8, 2);
    let up = resize(&board, 37, 29).expect("resize checkerboard");
    let min = up.data().iter().copied().min().unwrap_or(0);
    let max = up.data().iter().copied().max().unwrap_or(0);
    rp.compare_values(0.0, min as f64, 0.0);
    rp.compare_values(255.0, max as f64, 0.0);
    rp.write_buffer_and_check(&up, ImageFormat::Png)
        .expect("write checkerboard");

    // --- Test 6: Progress reaches 1.0 after N calls ---
    let mut calls = 0usize;
    let mut last = 0.0f64;
    let mut monotonic = true;
    let mut cb = |f: f64| {
        if f <= last {
            monotonic = false;
        }
        last = f;
        calls += 1;
    };
    let out = resize_with_progress(&board, 20, 10, Some(&mut cb)).expect("progress resize");
    rp.compare_values(out.pixel_count() as f64, calls as f64, 0.0);
    rp.compare_values(1.0, last, 0.0);
    rp.compare_values(1.0, if monotonic { 1.0 } else { 0.0 }, 0.0);

    // --- Test 7: Factor mapping matches the resize grid ---
    let f = ScaleFactors::new(h, w, h * 5, w * 5).expect("factors");
    let (x, y) = f.source_coord(h * 5 - 1, w * 5 - 1);
    rp.compare_values((w * 5 - 1) as f64 / 5.0, x, 1e-9);
    rp.compare_values((h * 5 - 1) as f64 / 5.0, y, 1e-9);

    let gray = gradient_image(16, 16, 1);
    let up_gray = scale(&gray, 5.0, 5.0, None).expect("scale gray");
    rp.write_buffer_and_check(&up_gray, ImageFormat::Pnm)
        .expect("write gray");

    assert!(rp.cleanup(), "scale regression test failed");
}

#[test]
fn scale_invalid_reg() {
    let mut rp = RegParams::new("scale_invalid");

    let pixs = gradient_image(4, 4, 1);
    rp.compare_values(1.0, scale(&pixs, 0.0, 1.0, None).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, scale(&pixs, 1.0, -2.0, None).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, scale(&pixs, 0.1, 1.0, None).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, resize(&pixs, 0, 4).is_err() as u8 as f64, 0.0);

    // Target too large to allocate comes back as an error
    let one = gradient_image(1, 1, 1);
    rp.compare_values(1.0, scale(&one, 1e8, 1e8, None).is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "scale_invalid regression test failed");
}
