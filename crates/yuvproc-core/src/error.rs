//! Error types for frame processing.
//!
//! Every fallible engine call (geometry derivation, buffer views, transform
//! construction and application) reports failure through the single
//! [`Error`] enum defined here. Errors are plain values: nothing in the
//! engine panics or unwinds on bad input.
//!
//! # Usage
//!
//! ```rust
//! use yuvproc_core::{Error, Result};
//!
//! fn check_strides(src: u32, dst: u32) -> Result<()> {
//!     if src != dst {
//!         return Err(Error::stride_mismatch((src, src / 2), (dst, dst / 2)));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_strides(4, 6).unwrap_err().is_stride_mismatch());
//! ```
//!
//! # Numeric codes
//!
//! Each variant carries a stable numeric code (see [`Error::code`]) so the
//! command line front end can log a compact identifier next to the message.

use thiserror::Error;

use crate::VideoFormat;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running a frame transform.
///
/// # Categories
///
/// - **Caller errors**: [`InvalidArguments`](Error::InvalidArguments)
/// - **Layout errors**: [`UnsupportedFormat`](Error::UnsupportedFormat),
///   [`StrideMismatch`](Error::StrideMismatch)
/// - **Capability errors**: [`Unimplemented`](Error::Unimplemented)
/// - **Runtime errors**: [`ProcessingFailed`](Error::ProcessingFailed), [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing, empty or out of range.
    ///
    /// Covers empty picture views, missing transform parameters, unknown
    /// mode/operation selectors and invalid frame dimensions.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A buffer in a format the transform cannot handle reached it.
    ///
    /// Every transform accepts [`VideoFormat::Yuv420p`] only.
    #[error("unsupported video format: {format}")]
    UnsupportedFormat {
        /// Format of the offending buffer
        format: VideoFormat,
    },

    /// Source and destination rows are laid out differently.
    #[error("stride mismatch: src {src_y}/{src_uv} vs dst {dst_y}/{dst_uv} (y/uv)")]
    StrideMismatch {
        /// Source luma stride
        src_y: u32,
        /// Source chroma stride
        src_uv: u32,
        /// Destination luma stride
        dst_y: u32,
        /// Destination chroma stride
        dst_uv: u32,
    },

    /// The requested feature is declared but not available.
    #[error("unimplemented: {0}")]
    Unimplemented(String),

    /// Generic failure inside a transform body.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// I/O error while reading or writing frames.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArguments`] error.
    #[inline]
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: VideoFormat) -> Self {
        Self::UnsupportedFormat { format }
    }

    /// Creates an [`Error::StrideMismatch`] error from `(y, uv)` stride pairs.
    #[inline]
    pub fn stride_mismatch(src: (u32, u32), dst: (u32, u32)) -> Self {
        Self::StrideMismatch {
            src_y: src.0,
            src_uv: src.1,
            dst_y: dst.0,
            dst_uv: dst.1,
        }
    }

    /// Creates an [`Error::Unimplemented`] error.
    #[inline]
    pub fn unimplemented(what: impl Into<String>) -> Self {
        Self::Unimplemented(what.into())
    }

    /// Creates an [`Error::ProcessingFailed`] error.
    #[inline]
    pub fn processing_failed(msg: impl Into<String>) -> Self {
        Self::ProcessingFailed(msg.into())
    }

    /// Stable numeric code for this error kind.
    ///
    /// `0` is reserved for success and never returned.
    pub const fn code(&self) -> u32 {
        match self {
            Self::InvalidArguments(_) => 1,
            Self::UnsupportedFormat { .. } => 2,
            Self::ProcessingFailed(_) => 3,
            Self::StrideMismatch { .. } => 4,
            Self::Unimplemented(_) => 5,
            Self::Io(_) => 6,
        }
    }

    /// Returns `true` if this is an argument error.
    #[inline]
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }

    /// Returns `true` if this is a format rejection.
    #[inline]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is a stride rejection.
    #[inline]
    pub fn is_stride_mismatch(&self) -> bool {
        matches!(self, Self::StrideMismatch { .. })
    }

    /// Returns `true` if this is an unimplemented-feature error.
    #[inline]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
