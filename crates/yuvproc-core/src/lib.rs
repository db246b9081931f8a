//! # yuvproc-core
//!
//! Core types for raw video frame processing.
//!
//! This crate provides the data model shared by the rest of the workspace:
//!
//! - [`VideoFormat`] - Memory layout tag of a raw frame
//! - [`FrameGeometry`] - Per-plane width, height and stride of one frame
//! - [`PictureBuffer`], [`PictureBufferMut`] - Borrowed plane views over a
//!   caller-owned frame buffer
//! - [`Error`] - Unified error type for the engine
//!
//! ## Crate Structure
//!
//! ```text
//! yuvproc-core (this crate)
//!    ^
//!    |
//!    +-- yuvproc-ops (transforms, factory)
//!    +-- yuvproc-io  (frame loop, stream helpers)
//!    +-- yuvproc-cli (command line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`VideoFormat`] and [`FrameGeometry`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod geometry;
pub mod picture;

pub use error::{Error, Result};
pub use format::VideoFormat;
pub use geometry::FrameGeometry;
pub use picture::{PictureBuffer, PictureBufferMut};

/// Prelude module for convenient imports.
///
/// ```
/// use yuvproc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::VideoFormat;
    pub use crate::geometry::FrameGeometry;
    pub use crate::picture::{PictureBuffer, PictureBufferMut};
}
