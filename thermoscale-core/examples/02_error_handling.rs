//! Error Handling Example
//!
//! Shows every way a conversion can fail and how to tell the cases apart.
//!
//! ## Error Categories
//!
//! 1. **Invalid units** - symbols other than C, F, K
//! 2. **Below absolute zero** - physically impossible source values
//! 3. **Invalid values** - NaN and infinities, on a strict converter
//! 4. **Invalid argument types** - non-numeric untyped input
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_error_handling
//! ```

use serde_json::json;
use thermoscale_core::{
    convert, dynamic::convert_value, is_below_absolute_zero, ConversionError, Converter,
};

fn describe(result: Result<f64, ConversionError>) -> String {
    match result {
        Ok(value) => format!("ok: {value}"),
        Err(ConversionError::InvalidUnit { role, symbol }) => {
            format!("bad {role} '{symbol}'")
        }
        Err(ConversionError::BelowAbsoluteZero { threshold, scale, .. }) => {
            format!("impossible: floor is {threshold} {}", scale.unit_label())
        }
        Err(ConversionError::InvalidValue) => "not a finite number".to_string(),
        Err(ConversionError::InvalidArgumentType { found }) => format!("expected a number, got {found}"),
    }
}

fn main() {
    println!("thermoscale Error Handling Example");
    println!("==================================\n");

    println!("Typed input:");
    let cases = [
        (100.0, "X", "F", "unknown source unit"),
        (100.0, "C", "Z", "unknown target unit"),
        (-300.0, "C", "F", "below absolute zero"),
        (-300.0, "F", "C", "fine in Fahrenheit"),
        (f64::NEG_INFINITY, "C", "K", "negative infinity"),
    ];
    for (value, from, to, label) in cases {
        println!("  {label:<22} {}", describe(convert(value, from, to)));
    }
    println!();

    println!("Untyped input:");
    for value in [json!(37), json!("37"), json!(null)] {
        println!("  {:<22} {}", value.to_string(), describe(convert_value(&value, "C", "F")));
    }
    println!();

    println!("Identity conversions:");
    println!("  default {}", describe(Converter::new().convert(-5, "K", "K")));
    println!("  strict  {}", describe(Converter::strict().convert(-5, "K", "K")));
    println!();

    println!("Non-finite values:");
    println!("  default NaN  {}", describe(convert(f64::NAN, "C", "K")));
    println!("  strict  NaN  {}", describe(Converter::strict().convert(f64::NAN, "C", "K")));
    println!("  strict  +inf {}", describe(Converter::strict().convert(f64::INFINITY, "F", "C")));
    println!();

    println!("Boundary checks:");
    for (value, unit) in [(-300.0, "C"), (-273.15, "C"), (0.0, "k"), (0.0, "?")] {
        match is_below_absolute_zero(value, unit) {
            Ok(below) => println!("  {value} {unit}: below absolute zero = {below}"),
            Err(e) => println!("  {value} {unit}: {e}"),
        }
    }
}
