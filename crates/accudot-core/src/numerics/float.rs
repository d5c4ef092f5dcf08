use num_traits::Float;

use super::oracle::{DoubleDouble, OracleAccumulator, WideSum};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// IEEE-754 binary working precision for the accumulation kernels.
///
/// Implemented by `f32` and `f64` only. Supplies the bit layout consumed by
/// the genus classifier, the Veltkamp splitting constant for the non-FMA
/// product transform, conversions into the `f64` comparison precision, and
/// the oracle accumulator that is materially more precise than the working
/// type.
pub trait WorkingFloat:
    Float + sealed::Sealed + core::fmt::Debug + core::fmt::Display + 'static
{
    /// Biased-exponent field width.
    const EXPONENT_BITS: u32;
    /// Stored mantissa field width, implicit bit excluded.
    const MANTISSA_BITS: u32;
    /// Veltkamp splitting constant `2^ceil(p / 2) + 1` for `p` mantissa bits.
    const SPLIT_FACTOR: Self;

    /// Summation state precise enough to stand in for the exact value.
    type Oracle: OracleAccumulator<Self>;

    fn to_raw_bits(self) -> u64;
    fn from_raw_bits(bits: u64) -> Self;

    /// Conversion into the `f64` comparison precision. Exact for `f32`
    /// (every single-precision value is representable in double precision)
    /// and the identity for `f64`.
    fn widen(self) -> f64;

    /// Round a comparison-precision value back to the working precision.
    fn from_widened(value: f64) -> Self;
}

impl WorkingFloat for f32 {
    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;
    const SPLIT_FACTOR: f32 = 4_097.0;

    type Oracle = WideSum;

    fn to_raw_bits(self) -> u64 {
        u64::from(self.to_bits())
    }

    fn from_raw_bits(bits: u64) -> f32 {
        f32::from_bits(bits as u32)
    }

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn from_widened(value: f64) -> f32 {
        value as f32
    }
}

impl WorkingFloat for f64 {
    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;
    const SPLIT_FACTOR: f64 = 134_217_729.0;

    type Oracle = DoubleDouble;

    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }

    fn from_raw_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    fn widen(self) -> f64 {
        self
    }

    fn from_widened(value: f64) -> f64 {
        value
    }
}
