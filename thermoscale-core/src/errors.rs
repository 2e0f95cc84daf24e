//! Error Types for Temperature Conversion Failures
//!
//! ## Design Philosophy
//!
//! Conversions run in tight loops on small devices as well as on servers, so
//! the error type follows the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: every payload is inline. Rejected unit symbols
//!    are kept in a fixed-capacity [`UnitSymbol`] buffer, messages are
//!    `&'static str`.
//!
//! 2. **Actionable Information**: each variant carries what the caller needs
//!    to report the problem (the offending value, the threshold it violated,
//!    which argument held the bad unit) without a second lookup.
//!
//! ## Error Categories
//!
//! ### Input Shape
//! - `InvalidArgumentType`: an untyped value (JSON) was not a number
//! - `InvalidUnit`: a unit symbol was not one of `C`, `F`, `K`
//!
//! ### Physical Violations
//! - `BelowAbsoluteZero`: the source value lies below its scale's absolute zero
//! - `InvalidValue`: a strict conversion or a `Temperature` met NaN or infinity
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use thermoscale_core::{convert, ConversionError};
//!
//! match convert(-500.0, "C", "K") {
//!     Ok(kelvin) => {
//!         // use kelvin
//!         let _ = kelvin;
//!     }
//!     Err(ConversionError::BelowAbsoluteZero { threshold, scale, .. }) => {
//!         // physically impossible reading
//!         let _ = (threshold, scale);
//!     }
//!     Err(ConversionError::InvalidUnit { role, symbol }) => {
//!         // caller passed a bad symbol
//!         let _ = (role, symbol);
//!     }
//!     Err(_) => {}
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

use crate::scale::Scale;

/// Maximum number of characters of a rejected unit symbol kept for reporting.
///
/// Longer inputs are truncated; valid symbols are a single character.
pub const MAX_UNIT_SYMBOL_LEN: usize = 8;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - no heap data, cheap to clone
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Untyped input was not numeric (string, null, bool, ...)
    #[error("Temperature value must be numeric, got {found}")]
    InvalidArgumentType {
        /// Name of the type that was supplied instead of a number
        found: &'static str,
    },

    /// Unit symbol is not one of `C`, `F` or `K`
    #[error("Invalid {role}: {symbol}. Must be 'C', 'F', or 'K'")]
    InvalidUnit {
        /// Which argument carried the bad symbol
        role: UnitRole,
        /// The symbol after case normalization
        symbol: UnitSymbol,
    },

    /// Source value below its scale's absolute zero
    #[error("Temperature {value} cannot be below absolute zero ({threshold} {})", .scale.unit_label())]
    BelowAbsoluteZero {
        /// The rejected input value
        value: f64,
        /// Absolute zero in the source scale
        threshold: f64,
        /// The source scale
        scale: Scale,
    },

    /// NaN or infinity where a finite value is required
    #[error("Invalid value: not a finite number")]
    InvalidValue,
}

impl ConversionError {
    /// Build an `InvalidUnit` error from the raw symbol the caller supplied
    pub fn invalid_unit(role: UnitRole, raw: &str) -> Self {
        Self::InvalidUnit {
            role,
            symbol: UnitSymbol::normalized(raw),
        }
    }

    /// Build a `BelowAbsoluteZero` error for `value` in `scale`
    pub fn below_absolute_zero(value: f64, scale: Scale) -> Self {
        Self::BelowAbsoluteZero {
            value,
            threshold: scale.absolute_zero(),
            scale,
        }
    }
}

/// Position of a unit argument, used to tell the caller which one was wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    /// `from_unit` of a conversion
    Source,
    /// `to_unit` of a conversion
    Target,
    /// The single unit of a boundary check
    Unit,
}

impl UnitRole {
    /// Human-readable name used in error messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitRole::Source => "source unit",
            UnitRole::Target => "target unit",
            UnitRole::Unit => "unit",
        }
    }
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cased copy of a rejected unit symbol, stored inline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitSymbol(heapless::String<MAX_UNIT_SYMBOL_LEN>);

impl UnitSymbol {
    /// Normalize `raw` to upper case, keeping at most
    /// [`MAX_UNIT_SYMBOL_LEN`] bytes
    pub fn normalized(raw: &str) -> Self {
        let mut symbol = heapless::String::new();
        'outer: for c in raw.chars() {
            for upper in c.to_uppercase() {
                if symbol.push(upper).is_err() {
                    break 'outer;
                }
            }
        }
        Self(symbol)
    }

    /// The normalized symbol
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidArgumentType { found } =>
                defmt::write!(fmt, "Expected number, got {}", found),
            Self::InvalidUnit { role, symbol } =>
                defmt::write!(fmt, "Invalid {}: {}", role.as_str(), symbol.as_str()),
            Self::BelowAbsoluteZero { value, threshold, scale } =>
                defmt::write!(fmt, "{} below absolute zero ({} {})", value, threshold, scale.unit_label()),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
