//! Frame geometry shared by every frame of a run.
//!
//! A [`FrameGeometry`] is derived once from the configured width, height
//! and frame rate, then reused to build picture views for every frame.
//! Raw streams carry no header, so this is the only source of layout
//! information.
//!
//! # Plane layout
//!
//! ```text
//! offset 0                 y_len             y_len + uv_len      y_len + 2*uv_len
//! |------- Y plane --------|----- U plane -----|----- V plane -----|
//!   y_height rows of          uv_height rows       uv_height rows
//!   y_stride bytes            of uv_stride bytes   of uv_stride bytes
//! ```

use std::ops::Range;

use crate::{Error, Result, VideoFormat};

/// Memory geometry of one raw frame.
///
/// For 4:2:0 subsampling the chroma fields are the luma fields halved
/// (integer division).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameGeometry {
    /// Luma width in pixels
    pub y_width: u32,
    /// Luma height in rows
    pub y_height: u32,
    /// Bytes per luma row
    pub y_stride: u32,
    /// Chroma width in pixels
    pub uv_width: u32,
    /// Chroma height in rows
    pub uv_height: u32,
    /// Bytes per chroma row
    pub uv_stride: u32,
    /// Nominal display duration of one frame
    pub duration_ms: u32,
    /// Pixel layout
    pub format: VideoFormat,
}

impl FrameGeometry {
    /// Derives a tightly packed YUV420P geometry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] if either dimension is zero or odd.
    ///
    /// # Example
    ///
    /// ```rust
    /// use yuvproc_core::FrameGeometry;
    ///
    /// let g = FrameGeometry::yuv420p(4, 4, 40).unwrap();
    /// assert_eq!((g.uv_width, g.uv_height, g.uv_stride), (2, 2, 2));
    /// assert_eq!(g.frame_size(), Some(24));
    /// assert!(FrameGeometry::yuv420p(5, 4, 40).is_err());
    /// ```
    pub fn yuv420p(width: u32, height: u32, duration_ms: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_arguments(format!(
                "width and height must be greater than 0 (got {width}x{height})"
            )));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(Error::invalid_arguments(format!(
                "width and height must be even for 4:2:0 subsampling (got {width}x{height})"
            )));
        }
        Ok(Self {
            y_width: width,
            y_height: height,
            y_stride: width,
            uv_width: width / 2,
            uv_height: height / 2,
            uv_stride: width / 2,
            duration_ms,
            format: VideoFormat::Yuv420p,
        })
    }

    /// Same geometry with a different format tag.
    #[inline]
    pub const fn with_format(mut self, format: VideoFormat) -> Self {
        self.format = format;
        self
    }

    /// Bytes covered by the Y plane.
    #[inline]
    pub const fn y_plane_len(&self) -> usize {
        self.y_height as usize * self.y_stride as usize
    }

    /// Bytes covered by each chroma plane.
    #[inline]
    pub const fn uv_plane_len(&self) -> usize {
        self.uv_height as usize * self.uv_stride as usize
    }

    /// Byte ranges of the Y, U and V planes inside one frame buffer.
    pub fn plane_ranges(&self) -> [Range<usize>; 3] {
        let y = self.y_plane_len();
        let uv = self.uv_plane_len();
        [0..y, y..y + uv, y + uv..y + 2 * uv]
    }

    /// Total bytes of one frame, `None` for unknown formats.
    #[inline]
    pub const fn frame_size(&self) -> Option<usize> {
        self.format.frame_size(self.y_height, self.y_stride)
    }

    /// Nominal frame rate derived from the duration.
    #[inline]
    pub fn fps(&self) -> f64 {
        1000.0 / f64::from(self.duration_ms)
    }

    /// `(y_stride, uv_stride)` pair.
    #[inline]
    pub const fn strides(&self) -> (u32, u32) {
        (self.y_stride, self.uv_stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation() {
        let g = FrameGeometry::yuv420p(1920, 1080, 41).unwrap();
        assert_eq!(g.y_stride, 1920);
        assert_eq!(g.uv_width, 960);
        assert_eq!(g.uv_height, 540);
        assert_eq!(g.uv_stride, 960);
        assert_eq!(g.format, VideoFormat::Yuv420p);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(FrameGeometry::yuv420p(0, 4, 40).unwrap_err().is_invalid_arguments());
        assert!(FrameGeometry::yuv420p(4, 0, 40).unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_rejects_odd() {
        assert!(FrameGeometry::yuv420p(3, 4, 40).is_err());
        assert!(FrameGeometry::yuv420p(4, 7, 40).is_err());
    }

    #[test]
    fn test_plane_ranges_are_contiguous() {
        let g = FrameGeometry::yuv420p(4, 4, 40).unwrap();
        let [y, u, v] = g.plane_ranges();
        assert_eq!(y, 0..16);
        assert_eq!(u, 16..20);
        assert_eq!(v, 20..24);
        assert_eq!(v.end, g.frame_size().unwrap());
    }

    #[test]
    fn test_fps() {
        let g = FrameGeometry::yuv420p(2, 2, 40).unwrap();
        assert!((g.fps() - 25.0).abs() < 1e-9);
    }
}
