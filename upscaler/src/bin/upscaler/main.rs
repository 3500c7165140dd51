//! upscaler - enlarge an image 5x and threshold it
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=info`). Errors are
//! printed once with their cause chain and the process exits with code 1.

mod args;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();
    tracing::debug!(?config, "starting");

    let output = upscaler::run(&config)
        .with_context(|| format!("failed to process {}", config.input.display()))?;

    tracing::info!(
        resized = ?output.resized.shape(),
        binarized = ?output.binarized.shape(),
        "done"
    );
    Ok(())
}
