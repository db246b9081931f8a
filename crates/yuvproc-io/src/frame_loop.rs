//! The sequential read → transform → write loop.
//!
//! # States
//!
//! ```text
//!  Init ──▶ Reading ──▶ Transforming ──▶ Writing ──┐
//!             ▲   │            │                    │
//!             │   │ short read │ apply failed       │
//!             │   ▼            ▼                    │
//!             │  Drained     Failed                 │
//!             └─────────────────────────────────────┘
//!                 (frame limit reached: Completed)
//! ```
//!
//! One frame is fully read, transformed and written before the next read.
//! The two frame buffers are allocated once in [`FrameLoop::new`] and
//! reused for the whole run. Only the time spent inside
//! [`Transform::apply`] counts towards [`RunSummary::processing_time`].
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use yuvproc_core::FrameGeometry;
//! use yuvproc_io::{FrameLoop, NoProgress, Termination};
//! use yuvproc_ops::Transform;
//!
//! let geometry = FrameGeometry::yuv420p(4, 4, 40).unwrap();
//! let mut input = Cursor::new(vec![7u8; 24 * 2]);
//! let mut output = Vec::new();
//!
//! let mut frame_loop = FrameLoop::new(&Transform::Identity, geometry, geometry).unwrap();
//! let summary = frame_loop.run(&mut input, &mut output, &mut NoProgress).unwrap();
//!
//! assert_eq!(summary.frames_processed, 2);
//! assert!(matches!(summary.termination, Termination::EndOfStream { bytes_read: 0, .. }));
//! assert_eq!(output, vec![7u8; 48]);
//! ```

use std::io::{Read, Write};
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};
use yuvproc_core::{Error, FrameGeometry, PictureBuffer, PictureBufferMut, Result};
use yuvproc_ops::Transform;

use crate::stream::read_frame;

/// Receives per-frame progress. Purely observational.
pub trait FrameObserver {
    /// Called before reading frame `index`.
    fn on_frame_start(&mut self, index: usize, timestamp_ms: f64) {
        let _ = (index, timestamp_ms);
    }

    /// Called after frame `index` was transformed, before it is written.
    ///
    /// `total_time` already includes `frame_time`.
    fn on_frame_done(&mut self, index: usize, timestamp_ms: f64, frame_time: Duration, total_time: Duration) {
        let _ = (index, timestamp_ms, frame_time, total_time);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl FrameObserver for NoProgress {}

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Filling the source buffer.
    Reading,
    /// Running the transform.
    Transforming,
    /// Draining the destination buffer.
    Writing,
}

/// Why a run stopped.
#[derive(Debug)]
pub enum Termination {
    /// The requested number of frames was processed.
    Completed,
    /// The input ended; `bytes_read < expected` for the last attempted frame.
    EndOfStream {
        /// Bytes obtained for the incomplete frame
        bytes_read: usize,
        /// Full frame size
        expected: usize,
    },
    /// The transform rejected a frame; that frame was not written.
    TransformFailed(Error),
}

impl Termination {
    /// Whether the run stopped because of a transform error.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::TransformFailed(_))
    }
}

/// Outcome of one [`FrameLoop::run`].
#[derive(Debug)]
pub struct RunSummary {
    /// Frames transformed and written
    pub frames_processed: usize,
    /// Wall time spent inside `apply`
    pub processing_time: Duration,
    /// Stop reason
    pub termination: Termination,
}

impl RunSummary {
    /// Transform throughput in frames per second (0 when nothing was timed).
    pub fn fps(&self) -> f64 {
        let secs = self.processing_time.as_secs_f64();
        if secs > 0.0 { self.frames_processed as f64 / secs } else { 0.0 }
    }
}

/// Sequential frame driver.
///
/// Owns the two reusable frame buffers; borrows the transform.
pub struct FrameLoop<'t> {
    transform: &'t Transform,
    src_geometry: FrameGeometry,
    dst_geometry: FrameGeometry,
    src_buf: Vec<u8>,
    dst_buf: Vec<u8>,
    limit: Option<usize>,
}

/// Frame size of `geometry`, checked against its plane layout.
fn sized_frame(geometry: &FrameGeometry, side: &str) -> Result<usize> {
    let size = geometry
        .frame_size()
        .ok_or_else(|| Error::unsupported_format(geometry.format))?;
    let planes_end = geometry.plane_ranges()[2].end;
    if size < planes_end {
        return Err(Error::invalid_arguments(format!(
            "{side} frame of {size} bytes is smaller than its planes ({planes_end} bytes)"
        )));
    }
    Ok(size)
}

impl<'t> FrameLoop<'t> {
    /// Computes frame sizes and allocates both frame buffers.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if a geometry has no defined frame size
    /// - [`Error::InvalidArguments`] if a frame cannot hold its own planes
    pub fn new(transform: &'t Transform, src_geometry: FrameGeometry, dst_geometry: FrameGeometry) -> Result<Self> {
        let src_size = sized_frame(&src_geometry, "source")?;
        let dst_size = sized_frame(&dst_geometry, "destination")?;
        debug!(src_size, dst_size, transform = transform.name(), "frame loop initialized");
        Ok(Self {
            transform,
            src_geometry,
            dst_geometry,
            src_buf: vec![0; src_size],
            dst_buf: vec![0; dst_size],
            limit: None,
        })
    }

    /// Stops after `limit` frames; `None` runs until the input ends.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Source frame size in bytes.
    #[inline]
    pub fn src_frame_size(&self) -> usize {
        self.src_buf.len()
    }

    /// Destination frame size in bytes.
    #[inline]
    pub fn dst_frame_size(&self) -> usize {
        self.dst_buf.len()
    }

    /// Runs until the frame limit, the end of `input`, or a transform error.
    ///
    /// A transform error is reported through [`Termination::TransformFailed`],
    /// not as `Err`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading or writing fails (a short read is not a
    /// failure).
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W, observer: &mut dyn FrameObserver) -> Result<RunSummary>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let duration_ms = f64::from(self.src_geometry.duration_ms);
        let mut frames_processed = 0usize;
        let mut processing_time = Duration::ZERO;
        let mut index = 0usize;
        let mut state = LoopState::Reading;

        let termination = loop {
            trace!(?state, index, "frame loop step");
            let timestamp_ms = index as f64 * duration_ms;
            state = match state {
                LoopState::Reading => {
                    if self.limit.is_some_and(|limit| index >= limit) {
                        break Termination::Completed;
                    }
                    observer.on_frame_start(index, timestamp_ms);
                    let bytes_read = read_frame(input, &mut self.src_buf)?;
                    if bytes_read < self.src_buf.len() {
                        debug!(bytes_read, expected = self.src_buf.len(), "no more frames to read");
                        break Termination::EndOfStream {
                            bytes_read,
                            expected: self.src_buf.len(),
                        };
                    }
                    LoopState::Transforming
                }
                LoopState::Transforming => {
                    let src = PictureBuffer::new(&self.src_buf, self.src_geometry)?;
                    let mut dst = PictureBufferMut::new(&mut self.dst_buf, self.dst_geometry)?;

                    let start = Instant::now();
                    let result = self.transform.apply(&src, &mut dst);
                    let frame_time = start.elapsed();

                    if let Err(err) = result {
                        warn!(index, error = %err, "transform failed");
                        break Termination::TransformFailed(err);
                    }
                    processing_time += frame_time;
                    frames_processed += 1;
                    observer.on_frame_done(index, timestamp_ms, frame_time, processing_time);
                    LoopState::Writing
                }
                LoopState::Writing => {
                    output.write_all(&self.dst_buf)?;
                    index += 1;
                    LoopState::Reading
                }
            };
        };

        output.flush()?;
        Ok(RunSummary {
            frames_processed,
            processing_time,
            termination,
        })
    }
}
