//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

use upscaler::PipelineConfig;

#[derive(Parser, Debug)]
#[command(name = "upscaler")]
#[command(version)]
#[command(about = "Enlarge an image with bilinear interpolation and threshold it to black and white")]
pub struct Args {
    /// Input image (PNG or binary PGM/PPM)
    #[arg(default_value = "lena.png")]
    pub input: PathBuf,

    /// Output path for the enlarged image
    #[arg(short, long, default_value = "lena_bi_py.png")]
    pub output: PathBuf,

    /// Enlargement factor for both axes
    #[arg(short, long, default_value_t = 5.0)]
    pub scale: f64,

    /// Per-channel threshold level (0-255)
    #[arg(short, long, default_value_t = 160)]
    pub threshold: u8,

    /// Also write the thresholded black-and-white image here
    #[arg(short, long)]
    pub binarized: Option<PathBuf>,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            binarized_output: self.binarized.clone(),
            scale_factor: self.scale,
            threshold_level: self.threshold,
            show_progress: !self.no_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline() {
        let args = Args::parse_from(["upscaler"]);
        assert_eq!(args.to_config(), PipelineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "upscaler",
            "in.ppm",
            "-o",
            "out.png",
            "--scale",
            "2.5",
            "--threshold",
            "90",
            "--binarized",
            "bw.ppm",
            "--no-progress",
        ]);
        let cfg = args.to_config();
        assert_eq!(cfg.input, PathBuf::from("in.ppm"));
        assert_eq!(cfg.output, PathBuf::from("out.png"));
        assert_eq!(cfg.scale_factor, 2.5);
        assert_eq!(cfg.threshold_level, 90);
        assert_eq!(cfg.binarized_output, Some(PathBuf::from("bw.ppm")));
        assert!(!cfg.show_progress);
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(Args::try_parse_from(["upscaler", "--threshold", "300"]).is_err());
    }
}
