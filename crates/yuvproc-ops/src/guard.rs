//! Layout validation for source/destination picture pairs.
//!
//! Every transform runs [`ensure_compatible`] before touching a byte, so a
//! rejected call leaves the destination exactly as it was.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. both views carry samples, else [`Error::InvalidArguments`]
//! 2. the source is YUV420P, else [`Error::UnsupportedFormat`]
//! 3. luma and chroma strides agree, else [`Error::StrideMismatch`]
//! 4. the destination planes can hold the source planes, else
//!    [`Error::InvalidArguments`]
//!
//! # Example
//!
//! ```rust
//! use yuvproc_core::{FrameGeometry, PictureBuffer, PictureBufferMut, VideoFormat};
//! use yuvproc_ops::guard::ensure_compatible;
//!
//! let g = FrameGeometry::yuv420p(4, 4, 40).unwrap();
//! let src = vec![0u8; 48];
//! let mut dst = vec![0u8; 48];
//!
//! let bgr = PictureBuffer::new(&src, g.with_format(VideoFormat::Bgr24)).unwrap();
//! let out = PictureBufferMut::new(&mut dst, g).unwrap();
//! assert!(ensure_compatible(&bgr, &out).unwrap_err().is_unsupported_format());
//! ```

use tracing::debug;
use yuvproc_core::{Error, PictureBuffer, PictureBufferMut, Result, VideoFormat};

/// Validates that `src` can be transformed into `dst`.
pub fn ensure_compatible(src: &PictureBuffer<'_>, dst: &PictureBufferMut<'_>) -> Result<()> {
    if src.is_empty() || dst.is_empty() {
        debug!("rejecting empty picture view");
        return Err(Error::invalid_arguments("source and destination pictures must not be empty"));
    }

    if src.format() != VideoFormat::Yuv420p {
        debug!(format = %src.format(), "rejecting non-yuv420p source");
        return Err(Error::unsupported_format(src.format()));
    }

    let (src_g, dst_g) = (src.geometry(), dst.geometry());
    if src_g.strides() != dst_g.strides() {
        debug!(src = ?src_g.strides(), dst = ?dst_g.strides(), "rejecting stride mismatch");
        return Err(Error::stride_mismatch(src_g.strides(), dst_g.strides()));
    }

    if dst_g.y_plane_len() < src_g.y_plane_len() || dst_g.uv_plane_len() < src_g.uv_plane_len() {
        return Err(Error::invalid_arguments(format!(
            "destination {}x{} cannot hold source {}x{}",
            dst_g.y_width, dst_g.y_height, src_g.y_width, src_g.y_height
        )));
    }

    Ok(())
}
