//! # Scaled Integer Property Tests
//!
//! Properties that must hold for every width and every legal value:
//! - decode(encode(v)) stays within one quantization step of v
//! - encoded size equals the declared width
//! - encoding is monotonic in the value

use jaus_codec::{ScaledField, ScaledInteger, Stream};
use proptest::prelude::*;

fn any_width() -> impl Strategy<Value = ScaledInteger> {
    prop_oneof![
        Just(ScaledInteger::Short),
        Just(ScaledInteger::UShort),
        Just(ScaledInteger::Int),
        Just(ScaledInteger::UInt),
    ]
}

/// Random `[lower, upper]` with a non-trivial span, plus a value inside it
fn limits_and_value() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1.0e3f64..1.0e3, 1.0f64..1.0e4, 0.0f64..=1.0)
        .prop_map(|(lower, span, t)| (lower, lower + span, lower + span * t))
}

proptest! {
    #[test]
    fn prop_round_trip_within_resolution(width in any_width(), (lower, upper, value) in limits_and_value()) {
        let mut stream = Stream::new();
        let written = stream.write_scaled(value, upper, lower, width);
        prop_assert_eq!(written, width.size());
        prop_assert_eq!(stream.length(), width.size());

        let decoded = stream.read_scaled(upper, lower, width).unwrap();
        let bits = (width.size() * 8) as i32;
        let tolerance = (upper - lower) / 2f64.powi(bits);
        prop_assert!(
            (decoded - value).abs() <= tolerance * 1.000_001,
            "decoded {} vs {} (tolerance {})", decoded, value, tolerance
        );
    }

    #[test]
    fn prop_encoding_is_monotonic(width in any_width(), (lower, upper, a) in limits_and_value(), t in 0.0f64..=1.0) {
        let b = lower + (upper - lower) * t;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(width.to_integer(low, upper, lower) <= width.to_integer(high, upper, lower));
    }

    #[test]
    fn prop_field_rejects_outside_limits(epsilon in 1.0e-6f64..1.0e3) {
        let field = ScaledField::new("elevation", -10_000.0, 35_000.0, ScaledInteger::Int);
        prop_assert!(field.validate(-10_000.0 - epsilon).is_err());
        prop_assert!(field.validate(35_000.0 + epsilon).is_err());
    }
}

#[test]
fn test_global_vector_speed_example() {
    let speed = ScaledField::new("speed", 0.0, 10_000.0, ScaledInteger::UShort);
    let mut stream = Stream::new();
    assert_eq!(speed.write(&mut stream, 12.5), 2);

    let decoded = speed.read(&mut stream).unwrap();
    assert!((decoded - 12.5).abs() <= 10_000.0 / 65_535.0);
}

#[test]
fn test_heading_example() {
    use std::f64::consts::PI;
    let heading = ScaledField::new("heading", -PI, PI, ScaledInteger::Short);
    let mut stream = Stream::new();
    heading.write(&mut stream, 1.0);

    let decoded = heading.read(&mut stream).unwrap();
    assert!((decoded - 1.0).abs() <= PI / 32_767.0);
}
