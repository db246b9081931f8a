//! Picture views over caller-owned frame buffers.
//!
//! - [`PictureBuffer`] - Immutable view (transform source)
//! - [`PictureBufferMut`] - Mutable view (transform destination)
//!
//! A view pairs a [`FrameGeometry`] with a borrowed byte slice and exposes
//! the three planes as disjoint sub-slices. Views never allocate; the frame
//! loop builds a fresh pair over its reusable buffers for every frame.
//!
//! # Example
//!
//! ```rust
//! use yuvproc_core::{FrameGeometry, PictureBuffer, PictureBufferMut};
//!
//! let geometry = FrameGeometry::yuv420p(4, 4, 40).unwrap();
//! let src_bytes = vec![7u8; 24];
//! let mut dst_bytes = vec![0u8; 24];
//!
//! let src = PictureBuffer::new(&src_bytes, geometry).unwrap();
//! let mut dst = PictureBufferMut::new(&mut dst_bytes, geometry).unwrap();
//!
//! let [y, u, v] = dst.planes_mut();
//! y.copy_from_slice(src.y());
//! u.copy_from_slice(src.u());
//! v.copy_from_slice(src.v());
//! assert_eq!(dst_bytes, src_bytes);
//! ```

use std::ops::Range;

use crate::{Error, FrameGeometry, Result, VideoFormat};

/// Checks that `len` bytes can hold every plane of `geometry`.
fn plane_layout(len: usize, geometry: &FrameGeometry) -> Result<[Range<usize>; 3]> {
    let planes = geometry.plane_ranges();
    let needed = planes[2].end;
    if len < needed {
        return Err(Error::invalid_arguments(format!(
            "buffer of {len} bytes cannot hold planes of {needed} bytes ({}x{} {})",
            geometry.y_width, geometry.y_height, geometry.format
        )));
    }
    debug_assert!(planes[0].end <= planes[1].start && planes[1].end <= planes[2].start);
    Ok(planes)
}

/// Immutable picture view.
#[derive(Debug, Clone, Copy)]
pub struct PictureBuffer<'a> {
    data: &'a [u8],
    geometry: FrameGeometry,
}

impl<'a> PictureBuffer<'a> {
    /// Creates a view over `data` laid out by `geometry`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] if `data` is shorter than the end of
    /// the V plane.
    pub fn new(data: &'a [u8], geometry: FrameGeometry) -> Result<Self> {
        plane_layout(data.len(), &geometry)?;
        Ok(Self { data, geometry })
    }

    /// Layout of this view.
    #[inline]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Pixel format tag.
    #[inline]
    pub fn format(&self) -> VideoFormat {
        self.geometry.format
    }

    /// Nominal display duration.
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.geometry.duration_ms
    }

    /// Whether the view carries no luma samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.geometry.y_plane_len() == 0
    }

    /// Luma plane.
    #[inline]
    pub fn y(&self) -> &'a [u8] {
        &self.data[self.geometry.plane_ranges()[0].clone()]
    }

    /// Blue-difference chroma plane.
    #[inline]
    pub fn u(&self) -> &'a [u8] {
        &self.data[self.geometry.plane_ranges()[1].clone()]
    }

    /// Red-difference chroma plane.
    #[inline]
    pub fn v(&self) -> &'a [u8] {
        &self.data[self.geometry.plane_ranges()[2].clone()]
    }

    /// All three planes in Y, U, V order.
    pub fn planes(&self) -> [&'a [u8]; 3] {
        let [y, u, v] = self.geometry.plane_ranges();
        [&self.data[y], &self.data[u], &self.data[v]]
    }
}

/// Mutable picture view.
#[derive(Debug)]
pub struct PictureBufferMut<'a> {
    data: &'a mut [u8],
    geometry: FrameGeometry,
}

impl<'a> PictureBufferMut<'a> {
    /// Creates a mutable view over `data` laid out by `geometry`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArguments`] if `data` is shorter than the end of
    /// the V plane.
    pub fn new(data: &'a mut [u8], geometry: FrameGeometry) -> Result<Self> {
        plane_layout(data.len(), &geometry)?;
        Ok(Self { data, geometry })
    }

    /// Layout of this view.
    #[inline]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Pixel format tag.
    #[inline]
    pub fn format(&self) -> VideoFormat {
        self.geometry.format
    }

    /// Whether the view carries no luma samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.geometry.y_plane_len() == 0
    }

    /// Read-only reborrow.
    pub fn as_picture(&self) -> PictureBuffer<'_> {
        PictureBuffer {
            data: &self.data[..],
            geometry: self.geometry,
        }
    }

    /// The three planes as disjoint mutable slices, in Y, U, V order.
    pub fn planes_mut(&mut self) -> [&mut [u8]; 3] {
        let [y, u, v] = self.geometry.plane_ranges();
        let (head, rest) = self.data[..v.end].split_at_mut(y.end);
        let (u_plane, v_plane) = rest.split_at_mut(u.end - u.start);
        [&mut head[y], u_plane, &mut v_plane[..v.end - v.start]]
    }
}
