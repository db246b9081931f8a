//! User-facing console text: mode line, header and final summary.
//!
//! Raw frames may own stdout, so console text goes to stderr unless the
//! frames are written to a file.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use yuvproc_core::FrameGeometry;
use yuvproc_io::{RunSummary, Termination};
use yuvproc_ops::{ArithmeticOp, ArithmeticParams, ProcessingMode};

use crate::config::Config;

/// Console stream: stdout when `to_stdout`, stderr otherwise.
pub fn console(to_stdout: bool) -> Box<dyn Write> {
    if to_stdout {
        Box::new(io::stdout())
    } else {
        Box::new(io::stderr())
    }
}

/// Writes one line. Console failures are not worth aborting a run for.
pub fn line(out: &mut Box<dyn Write>, text: &str) {
    let _ = writeln!(out, "{text}");
    let _ = out.flush();
}

fn op_symbol(op: ArithmeticOp) -> char {
    match op {
        ArithmeticOp::Addition => '+',
        ArithmeticOp::Subtraction => '-',
        ArithmeticOp::Multiplication => '*',
    }
}

/// `Processing mode: ...` line.
pub fn describe_mode(mode: ProcessingMode, params: Option<&ArithmeticParams>) -> String {
    let what = match (mode, params) {
        (ProcessingMode::Identity, _) => "Identity".to_string(),
        (ProcessingMode::PixelWiseArithmetic, Some(p)) => {
            format!("Pixel-wise arithmetic: {} ({}, {}, {})", op_symbol(p.op), p.y, p.u, p.v)
        }
        (ProcessingMode::PixelWiseArithmetic, None) => "Pixel-wise arithmetic".to_string(),
        (ProcessingMode::Scaling, _) => "Scaling".to_string(),
        (ProcessingMode::Unknown, _) => "Unknown".to_string(),
    };
    format!("Processing mode: {what}")
}

/// `<W>x<H>, <N> frames, <fps> fps` header.
pub fn header(geometry: &FrameGeometry, frames: Option<usize>) -> String {
    let frames = match frames {
        Some(n) => n.to_string(),
        None => "unbounded".to_string(),
    };
    format!(
        "{}x{}, {frames} frames, {} fps",
        geometry.y_width,
        geometry.y_height,
        geometry.fps()
    )
}

/// Plain-text summary lines.
///
/// The stop reason is only spelled out for errors, or with `verbose`.
pub fn summary_lines(summary: &RunSummary, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();
    match &summary.termination {
        Termination::Completed => {}
        Termination::EndOfStream { bytes_read, expected } => {
            if verbose {
                lines.push(format!("No more frame to read ({bytes_read} < {expected}), exit"));
            }
        }
        Termination::TransformFailed(err) => {
            lines.push(format!("processing error: {} ({err})", err.code()));
        }
    }
    if summary.frames_processed > 0 {
        lines.push(format!(
            "Video processing completed for {} frames in {} seconds",
            summary.frames_processed,
            summary.processing_time.as_secs_f64()
        ));
        lines.push(format!("FPS: {}", summary.fps()));
    }
    lines
}

#[derive(Serialize)]
struct ModeReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operands: Option<[u8; 3]>,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    geometry: &'a FrameGeometry,
    mode: ModeReport,
    frames_processed: usize,
    processing_time_s: f64,
    fps: f64,
    termination: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Final summary as a JSON document.
pub fn json(config: &Config, summary: &RunSummary) -> Result<String> {
    let (termination, error_code, error) = match &summary.termination {
        Termination::Completed => ("completed", None, None),
        Termination::EndOfStream { .. } => ("end_of_stream", None, None),
        Termination::TransformFailed(err) => ("transform_failed", Some(err.code()), Some(err.to_string())),
    };
    let report = SummaryReport {
        geometry: &config.geometry,
        mode: ModeReport {
            name: config.mode.to_string(),
            operator: config.params.map(|p| p.op.to_string()),
            operands: config.params.map(|p| [p.y, p.u, p.v]),
        },
        frames_processed: summary.frames_processed,
        processing_time_s: summary.processing_time.as_secs_f64(),
        fps: summary.fps(),
        termination,
        error_code,
        error,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use yuvproc_core::Error;

    fn summary(frames: usize, termination: Termination) -> RunSummary {
        RunSummary {
            frames_processed: frames,
            processing_time: Duration::from_millis(500),
            termination,
        }
    }

    #[test]
    fn test_describe_mode() {
        assert_eq!(describe_mode(ProcessingMode::Identity, None), "Processing mode: Identity");
        let params = ArithmeticParams::new(10, 0, 0, ArithmeticOp::Addition);
        assert_eq!(
            describe_mode(ProcessingMode::PixelWiseArithmetic, Some(&params)),
            "Processing mode: Pixel-wise arithmetic: + (10, 0, 0)"
        );
        let params = ArithmeticParams::new(1, 2, 3, ArithmeticOp::Multiplication);
        assert_eq!(
            describe_mode(ProcessingMode::PixelWiseArithmetic, Some(&params)),
            "Processing mode: Pixel-wise arithmetic: * (1, 2, 3)"
        );
    }

    #[test]
    fn test_header() {
        let g = FrameGeometry::yuv420p(1920, 1080, 40).unwrap();
        assert_eq!(header(&g, Some(250)), "1920x1080, 250 frames, 25 fps");
        assert_eq!(header(&g, None), "1920x1080, unbounded frames, 25 fps");
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&summary(10, Termination::Completed), false);
        assert_eq!(lines, vec![
            "Video processing completed for 10 frames in 0.5 seconds".to_string(),
            "FPS: 20".to_string(),
        ]);
    }

    #[test]
    fn test_summary_nothing_processed() {
        let eos = Termination::EndOfStream { bytes_read: 10, expected: 24 };
        assert!(summary_lines(&summary(0, eos), false).is_empty());

        let eos = Termination::EndOfStream { bytes_read: 10, expected: 24 };
        assert_eq!(summary_lines(&summary(0, eos), true), vec!["No more frame to read (10 < 24), exit"]);
    }

    #[test]
    fn test_summary_failure() {
        let failed = Termination::TransformFailed(Error::unimplemented("scaling"));
        let lines = summary_lines(&summary(0, failed), false);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("processing error: 5 ("));
    }

    #[test]
    fn test_json_report() {
        let config = Config {
            input: None,
            output: None,
            geometry: FrameGeometry::yuv420p(4, 4, 40).unwrap(),
            mode: ProcessingMode::PixelWiseArithmetic,
            params: Some(ArithmeticParams::new(10, 0, 0, ArithmeticOp::Subtraction)),
            frames: None,
            verbose: false,
            json: true,
        };
        let text = json(&config, &summary(3, Termination::Completed)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["frames_processed"], 3);
        assert_eq!(value["termination"], "completed");
        assert_eq!(value["mode"]["operator"], "subtraction");
        assert_eq!(value["mode"]["operands"][0], 10);
        assert_eq!(value["geometry"]["y_width"], 4);
        assert_eq!(value["geometry"]["format"], "yuv420p");
        assert!(value.get("error").is_none());
    }
}
