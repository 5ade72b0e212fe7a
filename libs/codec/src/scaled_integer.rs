//! # Scaled Integer Codec
//!
//! Maps a bounded real value onto a fixed-width integer by linear quantization, the
//! way every JAUS message represents positions, angles, speeds and efforts on the
//! wire.
//!
//! ## Mapping
//!
//! ```text
//! unsigned n-bit:  scale = (upper - lower) / (2^n - 1)   bias = lower
//! signed n-bit:    scale = (upper - lower) / (2^n - 2)   bias = (upper + lower) / 2
//!
//! integer = round((value - bias) / scale)      (saturated to the integer type)
//! value   = integer * scale + bias
//! ```
//!
//! Signed widths use the symmetric range `±(2^(n-1) - 1)` so zero is exactly
//! representable when the limits are symmetric. Rounding is to nearest, half away
//! from zero. A decoded value differs from the encoded one by at most half a
//! quantization step, i.e. less than `(upper - lower) / 2^bits`.

use crate::error::{JausError, JausResult};
use crate::stream::Stream;

/// Integer width and signedness of a scaled field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaledInteger {
    /// 2 bytes, signed
    Short,
    /// 2 bytes, unsigned
    UShort,
    /// 4 bytes, signed
    Int,
    /// 4 bytes, unsigned
    UInt,
}

impl ScaledInteger {
    /// Encoded size in bytes
    pub const fn size(self) -> usize {
        match self {
            Self::Short | Self::UShort => 2,
            Self::Int | Self::UInt => 4,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Short | Self::Int)
    }

    /// Number of quantization steps spanning `[lower, upper]`
    pub const fn steps(self) -> f64 {
        match self {
            Self::Short => 65_534.0,
            Self::UShort => 65_535.0,
            Self::Int => 4_294_967_294.0,
            Self::UInt => 4_294_967_295.0,
        }
    }

    /// Real-valued size of one integer step
    pub fn scale_factor(self, upper: f64, lower: f64) -> f64 {
        (upper - lower) / self.steps()
    }

    fn bias(self, upper: f64, lower: f64) -> f64 {
        if self.is_signed() {
            (upper + lower) / 2.0
        } else {
            lower
        }
    }

    /// Quantize `value` to the integer that goes on the wire
    pub fn to_integer(self, value: f64, upper: f64, lower: f64) -> i64 {
        let scaled = ((value - self.bias(upper, lower)) / self.scale_factor(upper, lower)).round();
        // float-to-int `as` casts saturate, and NaN maps to zero
        match self {
            Self::Short => i64::from(scaled as i16),
            Self::UShort => i64::from(scaled as u16),
            Self::Int => i64::from(scaled as i32),
            Self::UInt => i64::from(scaled as u32),
        }
    }

    /// Reconstruct the real value from a wire integer
    pub fn to_real(self, integer: i64, upper: f64, lower: f64) -> f64 {
        integer as f64 * self.scale_factor(upper, lower) + self.bias(upper, lower)
    }

    /// Append the scaled integer for `value`; returns bytes written
    pub fn write(self, stream: &mut Stream, value: f64, upper: f64, lower: f64) -> usize {
        let integer = self.to_integer(value, upper, lower);
        // to_integer already saturated into the target type's range
        match self {
            Self::Short => stream.write(integer as i16),
            Self::UShort => stream.write(integer as u16),
            Self::Int => stream.write(integer as i32),
            Self::UInt => stream.write(integer as u32),
        }
    }

    /// Consume a scaled integer and return the real value it encodes
    pub fn read(self, stream: &mut Stream, upper: f64, lower: f64) -> JausResult<f64> {
        let integer = match self {
            Self::Short => i64::from(stream.read::<i16>()?),
            Self::UShort => i64::from(stream.read::<u16>()?),
            Self::Int => i64::from(stream.read::<i32>()?),
            Self::UInt => i64::from(stream.read::<u32>()?),
        };
        Ok(self.to_real(integer, upper, lower))
    }
}

/// A named, range-limited scaled field of a message
///
/// Message types declare one constant per field; the constant is the single source
/// of the field's limits, width and name for validation, encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledField {
    pub name: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub width: ScaledInteger,
}

impl ScaledField {
    pub const fn new(name: &'static str, lower: f64, upper: f64, width: ScaledInteger) -> Self {
        Self {
            name,
            lower,
            upper,
            width,
        }
    }

    /// Accept `value` if it lies within `[lower, upper]`; never clamps
    pub fn validate(&self, value: f64) -> JausResult<f64> {
        if value.is_nan() || value < self.lower || value > self.upper {
            return Err(JausError::out_of_range(
                self.name, value, self.lower, self.upper,
            ));
        }
        Ok(value)
    }

    /// Encoded size in bytes
    pub const fn size(&self) -> usize {
        self.width.size()
    }

    /// Largest round-trip error for this field
    pub fn resolution(&self) -> f64 {
        self.width.scale_factor(self.upper, self.lower)
    }

    pub fn write(&self, stream: &mut Stream, value: f64) -> usize {
        self.width.write(stream, value, self.upper, self.lower)
    }

    pub fn read(&self, stream: &mut Stream) -> JausResult<f64> {
        self.width.read(stream, self.upper, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_unsigned_endpoints() {
        let width = ScaledInteger::UShort;
        assert_eq!(width.to_integer(0.0, 10_000.0, 0.0), 0);
        assert_eq!(width.to_integer(10_000.0, 10_000.0, 0.0), 65_535);
    }

    #[test]
    fn test_signed_is_symmetric() {
        let width = ScaledInteger::Short;
        assert_eq!(width.to_integer(0.0, PI, -PI), 0);
        assert_eq!(width.to_integer(PI, PI, -PI), 32_767);
        assert_eq!(width.to_integer(-PI, PI, -PI), -32_767);
    }

    #[test]
    fn test_out_of_range_saturates() {
        let width = ScaledInteger::Short;
        assert_eq!(width.to_integer(100.0, PI, -PI), i64::from(i16::MAX));
        assert_eq!(width.to_integer(f64::NAN, PI, -PI), 0);
    }

    #[test]
    fn test_round_trip_within_resolution() {
        let mut stream = Stream::new();
        let written = ScaledInteger::Int.write(&mut stream, 1234.567, 35_000.0, -10_000.0);
        assert_eq!(written, 4);

        let decoded = ScaledInteger::Int.read(&mut stream, 35_000.0, -10_000.0).unwrap();
        assert!((decoded - 1234.567).abs() <= 45_000.0 / 4_294_967_296.0);
    }

    #[test]
    fn test_field_validation_rejects_without_clamping() {
        let field = ScaledField::new("speed", 0.0, 10_000.0, ScaledInteger::UShort);
        assert_eq!(field.validate(12.5), Ok(12.5));
        assert!(matches!(
            field.validate(-0.001),
            Err(JausError::OutOfRange { field: "speed", .. })
        ));
        assert!(field.validate(10_000.001).is_err());
        assert!(field.validate(f64::NAN).is_err());
    }

    #[test]
    fn test_truncated_read_fails() {
        let mut stream = Stream::from(vec![0x01u8]);
        assert!(ScaledInteger::UShort.read(&mut stream, 1.0, 0.0).is_err());
    }
}
