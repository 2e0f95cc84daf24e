//! Temperature scales
//!
//! The three supported scales form a closed set. Unit symbols are parsed into
//! a [`Scale`] once, at the API boundary, so the conversion code never deals
//! with raw characters or case normalization.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::physics::{ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT, ABSOLUTE_ZERO_KELVIN},
    errors::{ConversionError, ConversionResult, UnitRole},
};

/// A linear temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scale {
    /// Degrees Celsius, symbol `C`
    Celsius,
    /// Degrees Fahrenheit, symbol `F`
    Fahrenheit,
    /// Kelvin, symbol `K`
    Kelvin,
}

impl Scale {
    /// Every supported scale, in symbol order
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Parse a single-character symbol, ignoring case
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(Scale::Celsius),
            'F' => Some(Scale::Fahrenheit),
            'K' => Some(Scale::Kelvin),
            _ => None,
        }
    }

    /// Parse a unit argument, reporting failures against `role`.
    ///
    /// The input must be exactly one of `C`, `F`, `K` in either case.
    /// Anything else, including the empty string and multi-character names
    /// such as `"celsius"`, is rejected with [`ConversionError::InvalidUnit`].
    pub fn parse_unit(raw: &str, role: UnitRole) -> ConversionResult<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Self::from_symbol(symbol).ok_or_else(|| ConversionError::invalid_unit(role, raw))
            }
            _ => Err(ConversionError::invalid_unit(role, raw)),
        }
    }

    /// Canonical upper-case symbol
    pub const fn symbol(&self) -> char {
        match self {
            Scale::Celsius => 'C',
            Scale::Fahrenheit => 'F',
            Scale::Kelvin => 'K',
        }
    }

    /// Full name of the scale
    pub const fn name(&self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }

    /// Unit label used after a number, e.g. `"°C"`
    pub const fn unit_label(&self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }

    /// Absolute zero expressed in this scale
    pub const fn absolute_zero(&self) -> f64 {
        match self {
            Scale::Celsius => ABSOLUTE_ZERO_CELSIUS,
            Scale::Fahrenheit => ABSOLUTE_ZERO_FAHRENHEIT,
            Scale::Kelvin => ABSOLUTE_ZERO_KELVIN,
        }
    }

    /// Whether `value` lies strictly below this scale's absolute zero.
    ///
    /// The threshold itself is a valid temperature.
    pub fn is_below_absolute_zero(&self, value: f64) -> bool {
        value < self.absolute_zero()
    }

    /// Fail with [`ConversionError::BelowAbsoluteZero`] if `value` is below
    /// this scale's absolute zero
    pub fn check_absolute_zero(&self, value: f64) -> ConversionResult<f64> {
        if self.is_below_absolute_zero(value) {
            log_debug!(
                "rejected {} {}: below absolute zero ({} {})",
                value,
                self.unit_label(),
                self.absolute_zero(),
                self.unit_label()
            );
            return Err(ConversionError::below_absolute_zero(value, *self));
        }
        Ok(value)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_unit(s, UnitRole::Unit)
    }
}

impl TryFrom<char> for Scale {
    type Error = ConversionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or_else(|| {
            let mut buf = [0u8; 4];
            ConversionError::invalid_unit(UnitRole::Unit, symbol.encode_utf8(&mut buf))
        })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Scale {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}
