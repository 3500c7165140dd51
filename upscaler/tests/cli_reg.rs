//! CLI regression test
//!
//! Runs the `upscaler` binary and checks exit status and error reporting.

use std::process::Command;
use upscaler_test::{RegParams, regout_dir};

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");
    let outdir = regout_dir();

    // --- Missing input: exit 1, error chain reported once ---
    let out = Command::new(env!("CARGO_BIN_EXE_upscaler"))
        .arg(format!("{}/cli_does_not_exist.png", outdir))
        .arg("-o")
        .arg(format!("{}/cli_out.png", outdir))
        .arg("--no-progress")
        .env("RUST_LOG", "error")
        .output()
        .expect("spawn upscaler");
    let stderr = String::from_utf8_lossy(&out.stderr);
    eprintln!("  stderr: {}", stderr.trim());
    rp.compare_values(1.0, out.status.code().unwrap_or(-1) as f64, 0.0);
    rp.compare_values(1.0, stderr.matches("failed to process").count() as f64, 0.0);

    // --- Unsupported output extension is rejected up front ---
    let out = Command::new(env!("CARGO_BIN_EXE_upscaler"))
        .arg(format!("{}/cli_does_not_exist.png", outdir))
        .arg("-o")
        .arg(format!("{}/cli_out.jpg", outdir))
        .arg("--no-progress")
        .output()
        .expect("spawn upscaler");
    let stderr = String::from_utf8_lossy(&out.stderr);
    rp.compare_values(1.0, out.status.code().unwrap_or(-1) as f64, 0.0);
    rp.compare_values(
        1.0,
        if stderr.contains("no supported image format") { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "cli regression test failed");
}
