//! Basic Conversion Example
//!
//! The simplest use of thermoscale: converting readings between Celsius,
//! Fahrenheit and Kelvin.
//!
//! ## What You'll Learn
//!
//! - Calling the pairwise conversion functions
//! - Dispatching on unit symbols with `convert`
//! - Working with tagged `Temperature` values
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_conversion
//! ```

use thermoscale_core::{
    celsius_to_fahrenheit, convert, kelvin_to_celsius, ConversionResult, Scale, Temperature,
};

fn main() -> ConversionResult<()> {
    println!("thermoscale Basic Conversion Example");
    println!("====================================\n");

    // Pairwise functions
    println!("Pairwise conversions:");
    println!("  100 °C = {} °F", celsius_to_fahrenheit(100.0)?);
    println!("  0 K    = {} °C", kelvin_to_celsius(0.0)?);
    println!();

    // Symbol dispatch; symbols are case-insensitive
    println!("Symbol dispatch:");
    let readings = [(21.5, "c", "F"), (451.0, "F", "K"), (77.0, "k", "c"), (25.0, "C", "C")];
    for (value, from, to) in readings {
        let converted = convert(value, from, to)?;
        println!("  {value} {from} -> {converted:.2} {to}");
    }
    println!();

    // Tagged temperatures carry their scale with them
    println!("Tagged temperatures:");
    let body = Temperature::fahrenheit(98.6)?;
    for scale in Scale::ALL {
        println!("  {}", body.to(scale));
    }

    Ok(())
}
