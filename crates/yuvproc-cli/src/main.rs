//! yuvproc - raw YUV420P frame processor
//!
//! Reads headerless YUV420P frames, applies one transform per frame and
//! writes the result, reporting throughput.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use yuvproc_io::{open_input, open_output, probe_frame_count, FrameLoop, FrameObserver, NoProgress, Termination};

mod config;
mod progress;
mod report;

use config::Config;
use progress::ProgressLine;

#[derive(Parser)]
#[command(name = "yuvproc")]
#[command(author, version, about = "Raw YUV420P frame processor")]
#[command(long_about = "
Applies a per-pixel transform to every frame of a raw YUV420P stream.
Input and output are headerless; geometry comes from --width/--height.
Without -i/-o, frames are read from stdin and written to stdout.

Examples:
  yuvproc -i in.yuv -o out.yuv -w 1920 -H 1080
  yuvproc -i in.yuv -o out.yuv -w 1920 -H 1080 -m arithmetic --operator add --y 16
  yuvproc -w 640 -H 480 -m 1 --operator mul --y 2 < in.yuv > out.yuv
  yuvproc -i in.yuv -o out.yuv -w 1280 -H 720 -f 30000/1001 -n 100 --verbose
")]
struct Cli {
    /// Input YUV file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output YUV file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame width in pixels
    #[arg(short, long)]
    width: u32,

    /// Frame height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Frame rate of the input: 24, 29.97 or 30000/1001
    #[arg(short, long, default_value = "24")]
    fps: String,

    /// Number of frames to process (0 = all)
    #[arg(short = 'n', long)]
    frames: Option<usize>,

    /// Processing mode: identity (0), pixel-wise-arithmetic (1), scaling (2)
    #[arg(short, long, default_value = "identity")]
    mode: String,

    /// Pixel-wise arithmetic operator: addition, subtraction, multiplication
    #[arg(long, default_value = "addition")]
    operator: String,

    /// Y channel operand for pixel-wise arithmetic
    #[arg(long = "y", default_value_t = 0)]
    y: u8,

    /// U channel operand for pixel-wise arithmetic
    #[arg(long = "u", default_value_t = 0)]
    u: u8,

    /// V channel operand for pixel-wise arithmetic
    #[arg(long = "v", default_value_t = 0)]
    v: u8,

    /// Show progress
    #[arg(long)]
    verbose: bool,

    /// Print debug log
    #[arg(short, long)]
    debug: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {e}"))
}

fn run(config: &Config) -> Result<()> {
    let mut console = report::console(config.output.is_some());

    report::line(&mut console, &report::describe_mode(config.mode, config.params.as_ref()));
    let transform = yuvproc_ops::create(config.mode, config.params)
        .with_context(|| format!("Failed to initialize video processor ({})", config.mode))?;

    // No transform changes resolution, so both sides share one geometry
    let frame_loop = FrameLoop::new(&transform, config.geometry, config.geometry)?;
    let frames = probe_frame_count(config.input.as_deref(), frame_loop.src_frame_size(), config.frames);
    if frames == Some(0) {
        warn!("no frame will be processed");
    }
    report::line(&mut console, &report::header(&config.geometry, frames));

    let mut input = open_input(config.input.as_deref()).with_context(|| match &config.input {
        Some(path) => format!("can not open input file: {}", path.display()),
        None => "can not open stdin".to_string(),
    })?;
    let mut output = open_output(config.output.as_deref()).with_context(|| match &config.output {
        Some(path) => format!("can not open output file: {}", path.display()),
        None => "can not open stdout".to_string(),
    })?;

    debug!(transform = transform.name(), ?frames, "start video filter process");
    let mut progress: Box<dyn FrameObserver> = if config.verbose {
        Box::new(ProgressLine::new(report::console(config.output.is_some())))
    } else {
        Box::new(NoProgress)
    };

    let summary = frame_loop
        .with_limit(frames)
        .run(&mut input, &mut output, progress.as_mut())?;
    drop(progress);

    if config.json {
        report::line(&mut console, &report::json(config, &summary)?);
    } else {
        for text in report::summary_lines(&summary, config.verbose) {
            report::line(&mut console, &text);
        }
    }

    if let Termination::TransformFailed(err) = summary.termination {
        bail!("processing stopped after {} frames: {err}", summary.frames_processed);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config = Config::from_cli(&cli)?;
    run(&config)
}
