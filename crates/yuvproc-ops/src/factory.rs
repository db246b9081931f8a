//! Transform construction.
//!
//! [`create`] is the single place a [`Transform`] is built. Selector and
//! parameter problems are reported here, before any stream is opened.
//!
//! ```rust
//! use yuvproc_ops::{create, ArithmeticOp, ArithmeticParams, ProcessingMode, Transform};
//!
//! assert_eq!(create(ProcessingMode::Identity, None).unwrap(), Transform::Identity);
//!
//! let params = ArithmeticParams::new(10, 0, 0, ArithmeticOp::Addition);
//! assert!(create(ProcessingMode::PixelWiseArithmetic, Some(params)).is_ok());
//! assert!(create(ProcessingMode::PixelWiseArithmetic, None).is_err());
//! assert!(create(ProcessingMode::Scaling, None).unwrap_err().is_unimplemented());
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use yuvproc_core::{Error, Result};

use crate::arithmetic::{ArithmeticParams, PixelWiseArithmetic};
use crate::transform::Transform;

/// Processing mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessingMode {
    /// Pass frames through unchanged.
    #[default]
    Identity,
    /// Saturating per-plane arithmetic.
    PixelWiseArithmetic,
    /// Resolution change (rejected).
    Scaling,
    /// Unrecognized selector (rejected).
    Unknown,
}

impl ProcessingMode {
    /// Maps numeric codes 0..=2 to modes; anything else is [`ProcessingMode::Unknown`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Identity,
            1 => Self::PixelWiseArithmetic,
            2 => Self::Scaling,
            _ => Self::Unknown,
        }
    }

    /// Numeric code of this mode.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Identity => 0,
            Self::PixelWiseArithmetic => 1,
            Self::Scaling => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identity => "identity",
            Self::PixelWiseArithmetic => "pixel-wise-arithmetic",
            Self::Scaling => "scaling",
            Self::Unknown => "unknown",
        })
    }
}

impl FromStr for ProcessingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "0" => Ok(Self::Identity),
            "pixel-wise-arithmetic" | "pixel-wise-arithmetics" | "arithmetic" | "1" => {
                Ok(Self::PixelWiseArithmetic)
            }
            "scaling" | "scale" | "2" => Ok(Self::Scaling),
            _ => Err(Error::invalid_arguments(format!("unsupported processing mode '{s}'"))),
        }
    }
}

/// Builds the transform for `mode`.
///
/// `params` is only read for [`ProcessingMode::PixelWiseArithmetic`];
/// operands are taken as given.
///
/// # Errors
///
/// - [`Error::InvalidArguments`] if arithmetic parameters are missing or
///   the mode is [`ProcessingMode::Unknown`]
/// - [`Error::Unimplemented`] for [`ProcessingMode::Scaling`]
pub fn create(mode: ProcessingMode, params: Option<ArithmeticParams>) -> Result<Transform> {
    debug!(%mode, ?params, "creating transform");
    match mode {
        ProcessingMode::Identity => Ok(Transform::Identity),
        ProcessingMode::PixelWiseArithmetic => {
            let params = params.ok_or_else(|| {
                Error::invalid_arguments("pixel-wise arithmetic requires operands and an operation")
            })?;
            Ok(Transform::PixelWiseArithmetic(PixelWiseArithmetic::new(params)))
        }
        ProcessingMode::Scaling => Err(Error::unimplemented("processing mode: scaling")),
        ProcessingMode::Unknown => Err(Error::invalid_arguments("unsupported processing mode")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::ArithmeticOp;

    #[test]
    fn test_identity_ignores_params() {
        let params = ArithmeticParams::new(1, 2, 3, ArithmeticOp::Addition);
        assert_eq!(create(ProcessingMode::Identity, Some(params)).unwrap(), Transform::Identity);
        assert_eq!(create(ProcessingMode::Identity, None).unwrap(), Transform::Identity);
    }

    #[test]
    fn test_arithmetic_binds_params() {
        let params = ArithmeticParams::new(1, 2, 3, ArithmeticOp::Subtraction);
        match create(ProcessingMode::PixelWiseArithmetic, Some(params)).unwrap() {
            Transform::PixelWiseArithmetic(op) => assert_eq!(op.params(), params),
            other => panic!("unexpected transform {other:?}"),
        }
    }

    #[test]
    fn test_arithmetic_requires_params() {
        let err = create(ProcessingMode::PixelWiseArithmetic, None).unwrap_err();
        assert!(err.is_invalid_arguments());
    }

    #[test]
    fn test_rejected_modes() {
        assert!(create(ProcessingMode::Scaling, None).unwrap_err().is_unimplemented());
        assert!(create(ProcessingMode::Unknown, None).unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_mode_codes() {
        for code in 0..3 {
            assert_eq!(ProcessingMode::from_code(code).code(), code);
        }
        assert_eq!(ProcessingMode::from_code(7), ProcessingMode::Unknown);
        assert_eq!(ProcessingMode::from_code(-1), ProcessingMode::Unknown);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("identity".parse::<ProcessingMode>().unwrap(), ProcessingMode::Identity);
        assert_eq!("1".parse::<ProcessingMode>().unwrap(), ProcessingMode::PixelWiseArithmetic);
        assert_eq!("Arithmetic".parse::<ProcessingMode>().unwrap(), ProcessingMode::PixelWiseArithmetic);
        assert_eq!("scaling".parse::<ProcessingMode>().unwrap(), ProcessingMode::Scaling);
        assert!("blur".parse::<ProcessingMode>().is_err());
        assert!("3".parse::<ProcessingMode>().is_err());
    }
}
