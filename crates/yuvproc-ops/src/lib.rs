//! # yuvproc-ops
//!
//! Per-frame transforms for raw YUV420P video.
//!
//! # Modules
//!
//! - [`guard`] - Source/destination layout validation
//! - [`arithmetic`] - Saturating pixel-wise arithmetic kernels
//! - [`transform`] - The [`Transform`] variants and their `apply`
//! - [`factory`] - Mode selection and [`create`]
//!
//! # Example
//!
//! ```rust
//! use yuvproc_core::{FrameGeometry, PictureBuffer, PictureBufferMut};
//! use yuvproc_ops::{create, ArithmeticOp, ArithmeticParams, ProcessingMode};
//!
//! let transform = create(
//!     ProcessingMode::PixelWiseArithmetic,
//!     Some(ArithmeticParams::new(2, 1, 1, ArithmeticOp::Multiplication)),
//! ).unwrap();
//!
//! let geometry = FrameGeometry::yuv420p(4, 4, 40).unwrap();
//! let src = vec![200u8; 24];
//! let mut dst = vec![0u8; 24];
//! transform.apply(
//!     &PictureBuffer::new(&src, geometry).unwrap(),
//!     &mut PictureBufferMut::new(&mut dst, geometry).unwrap(),
//! ).unwrap();
//!
//! assert!(dst[..16].iter().all(|&p| p == 255));
//! assert!(dst[16..].iter().all(|&p| p == 200));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod arithmetic;
pub mod factory;
pub mod guard;
pub mod transform;

pub use arithmetic::{ArithmeticOp, ArithmeticParams, PixelWiseArithmetic};
pub use factory::{create, ProcessingMode};
pub use transform::Transform;

/// Version of the processing engine.
pub const ENGINE_VERSION: u32 = 1;
