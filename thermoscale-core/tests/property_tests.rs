//! Property tests for conversion invariants
//!
//! - Round trips reproduce the input within tolerance
//! - Valid inputs never produce a result below the target's absolute zero
//! - Inputs below the source's absolute zero always fail
//! - Unit symbols are case-insensitive

mod common;

use proptest::prelude::*;
use thermoscale_core::{
    celsius_to_fahrenheit, celsius_to_kelvin, convert, fahrenheit_to_celsius, kelvin_to_celsius,
    ConversionError, Converter, Scale, Temperature,
};

use common::TOLERANCE;

/// Upper bound for generated temperatures; well past any physical use while
/// keeping round-trip error under the tolerance.
const MAX_TEMPERATURE: f64 = 1.0e5;

fn any_scale() -> impl Strategy<Value = Scale> {
    prop_oneof![Just(Scale::Celsius), Just(Scale::Fahrenheit), Just(Scale::Kelvin)]
}

/// A valid value in `scale`: at or above absolute zero
fn valid_value(scale: Scale) -> impl Strategy<Value = f64> {
    scale.absolute_zero()..=MAX_TEMPERATURE
}

proptest! {
    #[test]
    fn celsius_fahrenheit_round_trip(c in -273.15f64..=MAX_TEMPERATURE) {
        let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c).unwrap()).unwrap();
        prop_assert!((back - c).abs() < TOLERANCE, "{} -> {}", c, back);
    }

    #[test]
    fn kelvin_celsius_round_trip(k in 0.0f64..=MAX_TEMPERATURE) {
        let back = celsius_to_kelvin(kelvin_to_celsius(k).unwrap()).unwrap();
        prop_assert!((back - k).abs() < TOLERANCE, "{} -> {}", k, back);
    }

    #[test]
    fn any_pair_round_trips(
        (from, value) in any_scale().prop_flat_map(|s| (Just(s), valid_value(s))),
        to in any_scale(),
    ) {
        let converter = Converter::new();
        let there = converter.convert_scales(value, from, to).unwrap();
        let back = converter.convert_scales(there, to, from).unwrap();
        prop_assert!((back - value).abs() < TOLERANCE);
    }

    #[test]
    fn valid_input_stays_above_target_zero(
        (from, value) in any_scale().prop_flat_map(|s| (Just(s), valid_value(s))),
        to in any_scale(),
    ) {
        let result = Converter::strict().convert_scales(value, from, to).unwrap();
        prop_assert!(!to.is_below_absolute_zero(result));
    }

    #[test]
    fn below_source_zero_always_fails(
        from in any_scale(),
        to in any_scale(),
        depth in 1.0e-6f64..1.0e6,
    ) {
        prop_assume!(from != to);
        let value = from.absolute_zero() - depth;
        let result = Converter::new().convert_scales(value, from, to);
        prop_assert!(
            matches!(result, Err(ConversionError::BelowAbsoluteZero { .. })),
            "error expected for {} {:?}",
            value,
            from
        );
        prop_assert!(Temperature::new(value, from).is_err());
    }

    #[test]
    fn symbols_are_case_insensitive(
        from in any_scale(),
        to in any_scale(),
        value in 0.0f64..1000.0,
    ) {
        let upper = convert(
            value,
            &from.symbol().to_string(),
            &to.symbol().to_string(),
        );
        let lower = convert(
            value,
            &from.symbol().to_ascii_lowercase().to_string(),
            &to.symbol().to_ascii_lowercase().to_string(),
        );
        prop_assert_eq!(upper, lower);
    }
}
