//! Shared checks and formulas behind every conversion
//!
//! ## Order of Checks
//!
//! Every conversion validates its input before doing any arithmetic, so a
//! failure never leaves a partial result behind:
//!
//! ```text
//! 1. above source zero? value < threshold     -> BelowAbsoluteZero
//! 2. finite? (strict)   NaN / ±inf            -> InvalidValue
//! 3. apply formula      (from, to) pair
//! 4. clamp to target zero (rounding noise only)
//! ```
//!
//! `-inf` is below every threshold, so it always fails step 1. NaN compares
//! false against everything and only step 2 catches it; the pairwise
//! functions skip that step and follow plain IEEE-754 arithmetic.
//!
//! ## Composition
//!
//! Fahrenheit and Kelvin are never converted into each other directly. Both
//! directions go through Celsius, reusing the Celsius formulas, so there is
//! exactly one formula per edge of the C-F and C-K pairs.
//!
//! ## Rounding at the Boundary
//!
//! The thresholds are not exactly representable in binary floating point, so
//! a value at or just above the source's absolute zero can round a few ulps
//! past the target's. Results that undershoot the target scale's absolute
//! zero are clamped to it, so a conversion never returns a physically
//! impossible value.
//!
//! ## Overflow
//!
//! The degree-span scaling multiplies before it divides, which keeps whole
//! anchors exact (`100 °C` is exactly `212 °F`). When the product overflows
//! for a finite input, the division runs first instead, so only results
//! whose true magnitude exceeds `f64::MAX` become infinite.

use crate::{
    constants::physics::{
        CELSIUS_DEGREE_SPAN, CELSIUS_KELVIN_OFFSET, FAHRENHEIT_DEGREE_SPAN,
        FAHRENHEIT_FREEZING_POINT,
    },
    errors::{ConversionError, ConversionResult},
    scale::Scale,
    traits::Validatable,
};

/// Reject NaN and infinities
pub fn check_finite(value: f64) -> ConversionResult<f64> {
    if !value.is_valid() {
        log_debug!("rejected non-finite temperature {}", value);
        return Err(ConversionError::InvalidValue);
    }
    Ok(value)
}

/// Not below the source scale's absolute zero, then finite
pub fn check_source(value: f64, scale: Scale) -> ConversionResult<f64> {
    scale.check_absolute_zero(value)?;
    check_finite(value)
}

/// `value * numerator / denominator`, dividing first if the product overflows
#[inline]
fn scale_span(value: f64, numerator: f64, denominator: f64) -> f64 {
    let product = value * numerator;
    if product.is_finite() || !value.is_finite() {
        product / denominator
    } else {
        value / denominator * numerator
    }
}

/// `F = C * 9/5 + 32`
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    scale_span(celsius, FAHRENHEIT_DEGREE_SPAN, CELSIUS_DEGREE_SPAN) + FAHRENHEIT_FREEZING_POINT
}

/// `K = C + 273.15`
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_KELVIN_OFFSET
}

/// `C = (F - 32) * 5/9`
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    scale_span(
        fahrenheit - FAHRENHEIT_FREEZING_POINT,
        CELSIUS_DEGREE_SPAN,
        FAHRENHEIT_DEGREE_SPAN,
    )
}

/// `C = K - 273.15`
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_KELVIN_OFFSET
}

/// Apply the formula for the `(from, to)` pair without any validation.
///
/// Identical scales return the value untouched.
pub fn apply(value: f64, from: Scale, to: Scale) -> f64 {
    let converted = match (from, to) {
        (Scale::Celsius, Scale::Fahrenheit) => celsius_to_fahrenheit(value),
        (Scale::Celsius, Scale::Kelvin) => celsius_to_kelvin(value),
        (Scale::Fahrenheit, Scale::Celsius) => fahrenheit_to_celsius(value),
        (Scale::Fahrenheit, Scale::Kelvin) => celsius_to_kelvin(fahrenheit_to_celsius(value)),
        (Scale::Kelvin, Scale::Celsius) => kelvin_to_celsius(value),
        (Scale::Kelvin, Scale::Fahrenheit) => celsius_to_fahrenheit(kelvin_to_celsius(value)),
        (Scale::Celsius, Scale::Celsius)
        | (Scale::Fahrenheit, Scale::Fahrenheit)
        | (Scale::Kelvin, Scale::Kelvin) => return value,
    };
    clamp_to_absolute_zero(converted, to)
}

/// Raise a result that undershoots `scale`'s absolute zero to the threshold.
///
/// NaN passes through untouched.
pub fn clamp_to_absolute_zero(value: f64, scale: Scale) -> f64 {
    let zero = scale.absolute_zero();
    if value < zero {
        zero
    } else {
        value
    }
}

/// Check `value` against `from`'s absolute zero, then convert it to `to`.
///
/// NaN and `+inf` go through the formulas unchanged.
pub fn convert_checked(value: f64, from: Scale, to: Scale) -> ConversionResult<f64> {
    let value = from.check_absolute_zero(value)?;
    Ok(apply(value, from, to))
}
