//! Pairwise conversions between the three scales
//!
//! Each function validates its input against the source scale before
//! converting:
//! - values strictly below the source's absolute zero are rejected, `-inf`
//!   included
//! - the threshold itself is a valid input
//! - NaN and `+inf` follow IEEE-754 arithmetic
//!
//! Fahrenheit <-> Kelvin goes through Celsius.

use crate::{errors::ConversionResult, scale::Scale};

use super::utils;

/// Convert Celsius to Fahrenheit: `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f64) -> ConversionResult<f64> {
    utils::convert_checked(celsius, Scale::Celsius, Scale::Fahrenheit)
}

/// Convert Celsius to Kelvin: `K = C + 273.15`
pub fn celsius_to_kelvin(celsius: f64) -> ConversionResult<f64> {
    utils::convert_checked(celsius, Scale::Celsius, Scale::Kelvin)
}

/// Convert Fahrenheit to Celsius: `C = (F - 32) * 5/9`
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> ConversionResult<f64> {
    utils::convert_checked(fahrenheit, Scale::Fahrenheit, Scale::Celsius)
}

/// Convert Fahrenheit to Kelvin, via Celsius
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> ConversionResult<f64> {
    utils::convert_checked(fahrenheit, Scale::Fahrenheit, Scale::Kelvin)
}

/// Convert Kelvin to Celsius: `C = K - 273.15`
pub fn kelvin_to_celsius(kelvin: f64) -> ConversionResult<f64> {
    utils::convert_checked(kelvin, Scale::Kelvin, Scale::Celsius)
}

/// Convert Kelvin to Fahrenheit, via Celsius
pub fn kelvin_to_fahrenheit(kelvin: f64) -> ConversionResult<f64> {
    utils::convert_checked(kelvin, Scale::Kelvin, Scale::Fahrenheit)
}
