//! In-place progress line for `--verbose`.

use std::io::Write;
use std::time::Duration;

use yuvproc_io::FrameObserver;

/// Rewrites a single console line with `\r` as frames go by.
///
/// Each frame is reported twice: once before it is read (no frame runtime
/// yet) and once after the transform. The line is padded with spaces when
/// it gets shorter so no stale characters remain. A newline is written
/// when the observer is dropped, if anything was printed.
pub struct ProgressLine<W: Write> {
    out: W,
    prev_len: usize,
    total_time: Duration,
}

impl<W: Write> ProgressLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prev_len: 0,
            total_time: Duration::ZERO,
        }
    }

    fn print(&mut self, index: usize, timestamp_ms: f64, frame_time: Option<Duration>) {
        let text = format_progress(index, timestamp_ms, self.total_time, frame_time);
        let pad = self.prev_len.saturating_sub(text.len());
        // Progress is cosmetic; a closed console must not stop processing
        let _ = write!(self.out, "\r{text}{:pad$}", "");
        let _ = self.out.flush();
        self.prev_len = text.len();
    }
}

impl<W: Write> FrameObserver for ProgressLine<W> {
    fn on_frame_start(&mut self, index: usize, timestamp_ms: f64) {
        self.print(index, timestamp_ms, None);
    }

    fn on_frame_done(&mut self, index: usize, timestamp_ms: f64, frame_time: Duration, total_time: Duration) {
        self.total_time = total_time;
        self.print(index, timestamp_ms, Some(frame_time));
    }
}

impl<W: Write> Drop for ProgressLine<W> {
    fn drop(&mut self) {
        if self.prev_len > 0 {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }
}

/// One progress line, without the leading `\r`.
///
/// Frame numbers are 1-based. Total runtime is shown at millisecond
/// resolution; speed is media time over processing time.
pub fn format_progress(index: usize, timestamp_ms: f64, total_time: Duration, frame_time: Option<Duration>) -> String {
    let timestamp_s = timestamp_ms / 1000.0;
    let total_s = total_time.as_millis() as f64 / 1000.0;

    let mut text = format!(
        "Processing frame {:04} at timestamp: {timestamp_s:.2} s     Total runtime: {total_s:.2} s",
        index + 1
    );
    if let Some(frame_time) = frame_time.filter(|t| !t.is_zero()) {
        let frame_ms = frame_time.as_micros() as f64 / 1000.0;
        text.push_str(&format!(", Frame runtime: {frame_ms:.2} ms "));
    }
    text.push_str(&format!("    Speed: {:.4}x", timestamp_s / total_s));
    text
}
