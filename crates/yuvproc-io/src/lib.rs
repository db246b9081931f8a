//! # yuvproc-io
//!
//! Streaming side of the engine: moving raw frames between byte streams
//! and a [`Transform`](yuvproc_ops::Transform).
//!
//! - [`stream`] - Full-frame reads, file/stdio endpoints, frame-count probing
//! - [`frame_loop`] - The sequential [`FrameLoop`] and its [`RunSummary`]
//!
//! Errors are reported as [`yuvproc_core::Error`]; stream failures arrive
//! as its `Io` variant.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod frame_loop;
pub mod stream;

pub use frame_loop::{FrameLoop, FrameObserver, LoopState, NoProgress, RunSummary, Termination};
pub use stream::{open_input, open_output, probe_frame_count, read_frame};
