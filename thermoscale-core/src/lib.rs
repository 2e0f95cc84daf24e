//! Temperature conversion for thermoscale
//!
//! Converts values among Celsius, Fahrenheit and Kelvin, refusing any input
//! that lies below its scale's absolute zero. Designed to run anywhere, from
//! microcontrollers to servers.
//!
//! Key constraints:
//! - `no_std` compatible (disable default features)
//! - No heap allocation on the conversion path
//! - Validation before arithmetic, so failures are atomic
//!
//! ```no_run
//! use thermoscale_core::{convert, celsius_to_fahrenheit, is_below_absolute_zero};
//!
//! let fahrenheit = celsius_to_fahrenheit(100.0)?;      // 212.0
//! let kelvin = convert(25, "c", "K")?;                 // 298.15
//! let impossible = is_below_absolute_zero(-300, "C")?; // true
//! # Ok::<(), thermoscale_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod converter;
pub mod errors;
pub mod scale;
pub mod temperature;
pub mod traits;

#[cfg(feature = "std")]
pub mod dynamic;

// Public API
pub use converter::{
    celsius_to_fahrenheit, celsius_to_kelvin, convert, fahrenheit_to_celsius,
    fahrenheit_to_kelvin, is_below_absolute_zero, kelvin_to_celsius, kelvin_to_fahrenheit,
    Converter, IdentityPolicy, NonFinitePolicy,
};
pub use errors::{ConversionError, ConversionResult, UnitRole, UnitSymbol};
pub use scale::Scale;
pub use temperature::Temperature;
pub use traits::{Numeric, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
