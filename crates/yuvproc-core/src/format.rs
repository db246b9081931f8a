//! Raw video pixel formats.
//!
//! # Types
//!
//! - [`VideoFormat`] - Memory layout of one raw frame
//!
//! # Usage
//!
//! ```rust
//! use yuvproc_core::VideoFormat;
//!
//! // 4x4 YUV420P: 16 bytes of Y plus two 4-byte chroma planes
//! assert_eq!(VideoFormat::Yuv420p.frame_size(4, 4), Some(24));
//! assert_eq!(VideoFormat::Bgr24.frame_size(4, 4), Some(48));
//! assert_eq!(VideoFormat::Unknown.frame_size(4, 4), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Memory layout of a raw frame.
///
/// - `Yuv420p` - planar Y, then U, then V at half resolution in both axes
/// - `Bgr24` - packed 8-bit B, G, R triplets
/// - `Unknown` - unrecognized layout, rejected everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VideoFormat {
    /// Planar 4:2:0 YUV, 8 bits per sample.
    #[default]
    Yuv420p,
    /// Packed 24-bit BGR.
    Bgr24,
    /// Unrecognized layout.
    Unknown,
}

impl VideoFormat {
    /// Total byte size of one frame with the given luma height and stride.
    ///
    /// Returns `None` for [`VideoFormat::Unknown`].
    #[inline]
    pub const fn frame_size(&self, y_height: u32, y_stride: u32) -> Option<usize> {
        let luma = y_height as usize * y_stride as usize;
        match self {
            Self::Yuv420p => Some((luma * 3) >> 1),
            Self::Bgr24 => Some(luma * 3),
            Self::Unknown => None,
        }
    }

    /// Whether this is a planar layout.
    #[inline]
    pub const fn is_planar(&self) -> bool {
        matches!(self, Self::Yuv420p)
    }

    /// Lowercase short name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Yuv420p => "yuv420p",
            Self::Bgr24 => "bgr24",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VideoFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yuv420p" | "i420" => Ok(Self::Yuv420p),
            "bgr24" => Ok(Self::Bgr24),
            other => Err(Error::invalid_arguments(format!("unknown video format '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuv420p_size() {
        assert_eq!(VideoFormat::Yuv420p.frame_size(1080, 1920), Some(1920 * 1080 * 3 / 2));
        // Final shift truncates
        assert_eq!(VideoFormat::Yuv420p.frame_size(1, 3), Some(4));
    }

    #[test]
    fn test_bgr24_size() {
        assert_eq!(VideoFormat::Bgr24.frame_size(2, 6), Some(36));
    }

    #[test]
    fn test_parse() {
        assert_eq!("YUV420P".parse::<VideoFormat>().unwrap(), VideoFormat::Yuv420p);
        assert_eq!("bgr24".parse::<VideoFormat>().unwrap(), VideoFormat::Bgr24);
        assert!("nv12".parse::<VideoFormat>().unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_display_roundtrip() {
        for f in [VideoFormat::Yuv420p, VideoFormat::Bgr24] {
            assert_eq!(f.to_string().parse::<VideoFormat>().unwrap(), f);
        }
    }
}
