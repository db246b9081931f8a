//! Run configuration built from command line flags.
//!
//! Everything here is validated before any file is opened: geometry,
//! frame rate, mode and operator.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use yuvproc_core::FrameGeometry;
use yuvproc_ops::{ArithmeticOp, ArithmeticParams, ProcessingMode};

use crate::Cli;

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub geometry: FrameGeometry,
    pub mode: ProcessingMode,
    /// Only set for pixel-wise arithmetic
    pub params: Option<ArithmeticParams>,
    /// `None` = all frames
    pub frames: Option<usize>,
    pub verbose: bool,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let duration_ms = frame_duration_ms(&cli.fps)?;
        let geometry = FrameGeometry::yuv420p(cli.width, cli.height, duration_ms as u32)
            .context("Invalid frame geometry")?;

        let mode: ProcessingMode = cli.mode.parse()?;
        let params = match mode {
            ProcessingMode::PixelWiseArithmetic => {
                let op: ArithmeticOp = cli.operator.parse()?;
                Some(ArithmeticParams::new(cli.y, cli.u, cli.v, op))
            }
            _ => None,
        };

        Ok(Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            geometry,
            mode,
            params,
            frames: cli.frames.filter(|&n| n > 0),
            verbose: cli.verbose,
            json: cli.json,
        })
    }
}

/// Parses a frame rate (`24`, `29.97`, `30000/1001`) into a frame duration
/// in milliseconds.
pub fn frame_duration_ms(fps: &str) -> Result<f64> {
    let (num, den) = match fps.split_once('/') {
        Some((num, den)) => (num, Some(den)),
        None => (fps, None),
    };

    let frames: f64 = num
        .trim()
        .parse()
        .with_context(|| format!("Failed to obtain number from the --fps argument: {fps}"))?;
    let seconds: f64 = match den.map(str::trim) {
        Some(den) if !den.is_empty() => den
            .parse()
            .with_context(|| format!("Failed to obtain the denominator from the --fps argument: {den}"))?,
        _ => 1.0,
    };

    if !(frames > 0.0 && seconds > 0.0) || !frames.is_finite() || !seconds.is_finite() {
        bail!("frame rate must be positive: {fps}");
    }
    Ok(seconds * 1000.0 / frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("yuvproc").chain(args.iter().copied()))?;
        Config::from_cli(&cli)
    }

    #[test]
    fn test_frame_duration() {
        assert_relative_eq!(frame_duration_ms("24").unwrap(), 1000.0 / 24.0);
        assert_relative_eq!(frame_duration_ms("25.0").unwrap(), 40.0);
        assert_relative_eq!(frame_duration_ms("30000/1001").unwrap(), 1001.0 * 1000.0 / 30000.0);
        // Trailing slash means no denominator
        assert_relative_eq!(frame_duration_ms("50/").unwrap(), 20.0);
    }

    #[test]
    fn test_frame_duration_rejects_garbage() {
        assert!(frame_duration_ms("fast").is_err());
        assert!(frame_duration_ms("30/x").is_err());
        assert!(frame_duration_ms("0").is_err());
        assert!(frame_duration_ms("-24").is_err());
        assert!(frame_duration_ms("24/0").is_err());
    }

    #[test]
    fn test_identity_defaults() {
        let config = parse(&["-w", "4", "-H", "4"]).unwrap();
        assert_eq!(config.mode, ProcessingMode::Identity);
        assert!(config.params.is_none());
        assert_eq!(config.geometry.duration_ms, 41);
        assert_eq!(config.geometry.frame_size(), Some(24));
        assert!(config.input.is_none() && config.output.is_none());
        assert_eq!(config.frames, None);
    }

    #[test]
    fn test_arithmetic_params() {
        let config = parse(&[
            "-w", "4", "-H", "4", "-m", "1", "--operator", "multiplication", "--y", "2", "--v", "255",
        ])
        .unwrap();
        assert_eq!(config.mode, ProcessingMode::PixelWiseArithmetic);
        assert_eq!(config.params, Some(ArithmeticParams::new(2, 0, 255, ArithmeticOp::Multiplication)));
    }

    #[test]
    fn test_operand_range_enforced() {
        assert!(parse(&["-w", "4", "-H", "4", "--y", "256"]).is_err());
    }

    #[test]
    fn test_zero_frames_means_all() {
        let config = parse(&["-w", "4", "-H", "4", "-n", "0"]).unwrap();
        assert_eq!(config.frames, None);
        let config = parse(&["-w", "4", "-H", "4", "-n", "3"]).unwrap();
        assert_eq!(config.frames, Some(3));
    }

    #[test]
    fn test_rejects_bad_geometry_and_mode() {
        assert!(parse(&["-w", "0", "-H", "4"]).is_err());
        assert!(parse(&["-w", "5", "-H", "4"]).is_err());
        assert!(parse(&["-w", "4", "-H", "4", "-m", "blur"]).is_err());
        assert!(parse(&["-w", "4", "-H", "4", "-m", "arithmetic", "--operator", "divide"]).is_err());
    }

    #[test]
    fn test_scaling_parses() {
        // Rejected later by the factory, not by flag parsing
        let config = parse(&["-w", "4", "-H", "4", "-m", "scaling"]).unwrap();
        assert_eq!(config.mode, ProcessingMode::Scaling);
    }
}
