//! Per-frame transforms.
//!
//! [`Transform`] is a closed set of variants dispatched through a single
//! [`Transform::apply`] entry point. Build one with
//! [`create`](crate::factory::create) and reuse it for every frame of a run.

use yuvproc_core::{Error, PictureBuffer, PictureBufferMut, Result};

use crate::arithmetic::PixelWiseArithmetic;
use crate::guard::ensure_compatible;

/// Frame transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Copies every plane unchanged.
    Identity,
    /// Saturating per-plane arithmetic.
    PixelWiseArithmetic(PixelWiseArithmetic),
    /// Resolution change. Not available; every call fails.
    Scaling,
}

impl Transform {
    /// Transforms `src` into `dst`.
    ///
    /// The pair is validated first (see [`crate::guard`]); on any error
    /// `dst` is left untouched. On success the first `height * stride`
    /// bytes of each destination plane are overwritten and nothing else.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArguments`] for empty or undersized views
    /// - [`Error::UnsupportedFormat`] for a non-YUV420P source
    /// - [`Error::StrideMismatch`] for differing strides
    /// - [`Error::Unimplemented`] for [`Transform::Scaling`]
    pub fn apply(&self, src: &PictureBuffer<'_>, dst: &mut PictureBufferMut<'_>) -> Result<()> {
        ensure_compatible(src, dst)?;

        match self {
            Self::Identity => {
                for (s, d) in src.planes().into_iter().zip(dst.planes_mut()) {
                    d[..s.len()].copy_from_slice(s);
                }
                Ok(())
            }
            Self::PixelWiseArithmetic(op) => {
                for ((s, d), ch) in src.planes().into_iter().zip(dst.planes_mut()).zip(op.channels()) {
                    ch.apply_plane(s, d);
                }
                Ok(())
            }
            Self::Scaling => Err(Error::unimplemented("scaling")),
        }
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::PixelWiseArithmetic(_) => "pixel-wise arithmetic",
            Self::Scaling => "scaling",
        }
    }
}
