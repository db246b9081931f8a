//! Saturating pixel-wise arithmetic on 8-bit planes.
//!
//! Each plane gets its own operand; the operation is shared by all three:
//!
//! | Operation        | Per sample                       |
//! |------------------|----------------------------------|
//! | `Addition`       | `clamp(operand + p)`             |
//! | `Subtraction`    | `clamp(-operand + p)` = `max(0, p - operand)` |
//! | `Multiplication` | `clamp(operand * p)`             |
//!
//! Intermediates are `i32`; `255 * 255` fits with a wide margin.
//!
//! # Example
//!
//! ```rust
//! use yuvproc_ops::arithmetic::{ArithmeticOp, ArithmeticParams, PixelWiseArithmetic};
//!
//! let op = PixelWiseArithmetic::new(ArithmeticParams::new(10, 0, 0, ArithmeticOp::Addition));
//! let src = [250u8; 4];
//! let mut dst = [0u8; 4];
//! op.channels()[0].apply_plane(&src, &mut dst);
//! assert_eq!(dst, [255; 4]);
//! ```

use std::fmt;
use std::str::FromStr;

use yuvproc_core::Error;

/// Saturates a signed intermediate to the 8-bit sample range.
#[inline(always)]
pub fn clamp_pixel(value: i32) -> u8 {
    value.clamp(u8::MIN as i32, u8::MAX as i32) as u8
}

/// Arithmetic operation applied to every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArithmeticOp {
    /// Saturating add.
    #[default]
    Addition,
    /// Saturating subtract (sample minus operand).
    Subtraction,
    /// Saturating multiply.
    Multiplication,
}

impl ArithmeticOp {
    /// Looks up an operation by numeric code (0, 1, 2).
    pub fn from_code(code: i32) -> Result<Self, Error> {
        match code {
            0 => Ok(Self::Addition),
            1 => Ok(Self::Subtraction),
            2 => Ok(Self::Multiplication),
            other => Err(Error::invalid_arguments(format!("unsupported operation type {other}"))),
        }
    }

    /// Numeric code of this operation.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Addition => 0,
            Self::Subtraction => 1,
            Self::Multiplication => 2,
        }
    }

    /// Applies the operation to one sample.
    #[inline(always)]
    pub fn apply(&self, operand: u8, pixel: u8) -> u8 {
        let (o, p) = (i32::from(operand), i32::from(pixel));
        match self {
            Self::Addition => clamp_pixel(o + p),
            Self::Subtraction => clamp_pixel(-o + p),
            Self::Multiplication => clamp_pixel(o * p),
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
        })
    }
}

impl FromStr for ArithmeticOp {
    type Err = Error;

    /// Accepts names, short names, symbols and numeric codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(Self::Addition),
            "subtraction" | "sub" | "-" => Ok(Self::Subtraction),
            "multiplication" | "mul" | "*" => Ok(Self::Multiplication),
            other => match other.parse::<i32>() {
                Ok(code) => Self::from_code(code),
                Err(_) => Err(Error::invalid_arguments(format!("unknown operation '{s}'"))),
            },
        }
    }
}

/// Construction parameters: one operand per plane plus the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArithmeticParams {
    /// Luma operand
    pub y: u8,
    /// U operand
    pub u: u8,
    /// V operand
    pub v: u8,
    /// Operation shared by all planes
    pub op: ArithmeticOp,
}

impl ArithmeticParams {
    /// Creates a parameter bundle.
    pub const fn new(y: u8, u: u8, v: u8, op: ArithmeticOp) -> Self {
        Self { y, u, v, op }
    }
}

/// One plane's (operand, operation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOp {
    /// Operand applied to every sample of the plane
    pub operand: u8,
    /// Operation
    pub op: ArithmeticOp,
}

impl ChannelOp {
    /// Writes `op(operand, src[i])` into `dst[i]` for every `src` sample.
    ///
    /// The operation is resolved once, outside the sample loop.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`.
    pub fn apply_plane(&self, src: &[u8], dst: &mut [u8]) {
        let dst = &mut dst[..src.len()];
        let operand = i32::from(self.operand);
        match self.op {
            ArithmeticOp::Addition => add_plane(src, dst, operand),
            ArithmeticOp::Subtraction => add_plane(src, dst, -operand),
            ArithmeticOp::Multiplication => mul_plane(src, dst, operand),
        }
    }
}

#[inline]
fn add_plane(src: &[u8], dst: &mut [u8], operand: i32) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = clamp_pixel(operand + i32::from(s));
    }
}

#[inline]
fn mul_plane(src: &[u8], dst: &mut [u8], operand: i32) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = clamp_pixel(operand * i32::from(s));
    }
}

/// Pixel-wise arithmetic transform state.
///
/// The three channel ops are fixed at construction and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWiseArithmetic {
    channels: [ChannelOp; 3],
}

impl PixelWiseArithmetic {
    /// Binds each plane's operand to the shared operation.
    pub fn new(params: ArithmeticParams) -> Self {
        let bind = |operand| ChannelOp { operand, op: params.op };
        Self {
            channels: [bind(params.y), bind(params.u), bind(params.v)],
        }
    }

    /// Channel ops in Y, U, V order.
    #[inline]
    pub fn channels(&self) -> &[ChannelOp; 3] {
        &self.channels
    }

    /// Shared operation.
    #[inline]
    pub fn op(&self) -> ArithmeticOp {
        self.channels[0].op
    }

    /// Parameters this transform was built from.
    pub fn params(&self) -> ArithmeticParams {
        let [y, u, v] = self.channels;
        ArithmeticParams::new(y.operand, u.operand, v.operand, y.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pixel() {
        assert_eq!(clamp_pixel(-300), 0);
        assert_eq!(clamp_pixel(-1), 0);
        assert_eq!(clamp_pixel(0), 0);
        assert_eq!(clamp_pixel(128), 128);
        assert_eq!(clamp_pixel(255), 255);
        assert_eq!(clamp_pixel(256), 255);
        assert_eq!(clamp_pixel(65025), 255);
    }

    #[test]
    fn test_saturation_all_values() {
        for o in 0..=255u8 {
            for p in 0..=255u8 {
                let (oi, pi) = (o as u32, p as u32);
                assert_eq!(ArithmeticOp::Addition.apply(o, p) as u32, (oi + pi).min(255));
                assert_eq!(ArithmeticOp::Multiplication.apply(o, p) as u32, (oi * pi).min(255));
                assert_eq!(ArithmeticOp::Subtraction.apply(o, p), p.saturating_sub(o));
            }
        }
    }

    #[test]
    fn test_plane_matches_scalar() {
        let src: Vec<u8> = (0..=255).collect();
        for op in [ArithmeticOp::Addition, ArithmeticOp::Subtraction, ArithmeticOp::Multiplication] {
            let ch = ChannelOp { operand: 37, op };
            let mut dst = vec![0u8; src.len()];
            ch.apply_plane(&src, &mut dst);
            for (&s, &d) in src.iter().zip(&dst) {
                assert_eq!(d, op.apply(37, s), "{op} on {s}");
            }
        }
    }

    #[test]
    fn test_plane_leaves_tail() {
        let src = [10u8; 4];
        let mut dst = [99u8; 6];
        ChannelOp { operand: 1, op: ArithmeticOp::Addition }.apply_plane(&src, &mut dst);
        assert_eq!(dst, [11, 11, 11, 11, 99, 99]);
    }

    #[test]
    fn test_subtraction_sign() {
        // Sample minus operand, not operand minus sample
        assert_eq!(ArithmeticOp::Subtraction.apply(10, 200), 190);
        assert_eq!(ArithmeticOp::Subtraction.apply(200, 10), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("addition".parse::<ArithmeticOp>().unwrap(), ArithmeticOp::Addition);
        assert_eq!("SUB".parse::<ArithmeticOp>().unwrap(), ArithmeticOp::Subtraction);
        assert_eq!("*".parse::<ArithmeticOp>().unwrap(), ArithmeticOp::Multiplication);
        assert_eq!("2".parse::<ArithmeticOp>().unwrap(), ArithmeticOp::Multiplication);
        assert!("3".parse::<ArithmeticOp>().unwrap_err().is_invalid_arguments());
        assert!("divide".parse::<ArithmeticOp>().unwrap_err().is_invalid_arguments());
    }

    #[test]
    fn test_params_roundtrip() {
        let params = ArithmeticParams::new(1, 2, 3, ArithmeticOp::Multiplication);
        let op = PixelWiseArithmetic::new(params);
        assert_eq!(op.params(), params);
        assert_eq!(op.channels()[1].operand, 2);
        assert_eq!(op.op(), ArithmeticOp::Multiplication);
    }
}
