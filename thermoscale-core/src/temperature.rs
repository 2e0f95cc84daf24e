//! Tagged temperature values
//!
//! A [`Temperature`] pairs a number with its [`Scale`] and can only be built
//! through a validating constructor: one that exists is finite and at or
//! above its scale's absolute zero. Converting it to another scale therefore
//! cannot fail, though a magnitude beyond `f64::MAX` in the target scale
//! comes out infinite.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    converter::utils,
    errors::{ConversionError, ConversionResult},
    scale::Scale,
};

/// A physically valid temperature in a specific scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTemperature"))]
pub struct Temperature {
    value: f64,
    scale: Scale,
}

impl Temperature {
    /// Validate and tag `value` with `scale`
    pub fn new(value: f64, scale: Scale) -> ConversionResult<Self> {
        let value = utils::check_source(value, scale)?;
        Ok(Self { value, scale })
    }

    /// Temperature in degrees Celsius
    pub fn celsius(value: f64) -> ConversionResult<Self> {
        Self::new(value, Scale::Celsius)
    }

    /// Temperature in degrees Fahrenheit
    pub fn fahrenheit(value: f64) -> ConversionResult<Self> {
        Self::new(value, Scale::Fahrenheit)
    }

    /// Temperature in kelvin
    pub fn kelvin(value: f64) -> ConversionResult<Self> {
        Self::new(value, Scale::Kelvin)
    }

    /// Absolute zero expressed in `scale`
    pub const fn absolute_zero(scale: Scale) -> Self {
        Self {
            value: scale.absolute_zero(),
            scale,
        }
    }

    /// The numeric value in this temperature's own scale
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The scale the value is expressed in
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// The same temperature expressed in `scale`
    pub fn to(self, scale: Scale) -> Self {
        Self {
            value: utils::apply(self.value, self.scale, scale),
            scale,
        }
    }

    /// Whether two temperatures are within `tolerance` kelvin of each other,
    /// whatever scales they are expressed in
    pub fn approx_eq(&self, other: &Temperature, tolerance: f64) -> bool {
        let lhs = self.to(Scale::Kelvin).value;
        let rhs = other.to(Scale::Kelvin).value;
        libm::fabs(lhs - rhs) <= tolerance
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.scale.unit_label())
    }
}

impl TryFrom<(f64, Scale)> for Temperature {
    type Error = ConversionError;

    fn try_from((value, scale): (f64, Scale)) -> Result<Self, Self::Error> {
        Self::new(value, scale)
    }
}

/// Unvalidated wire form; deserialization goes through [`Temperature::new`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTemperature {
    value: f64,
    scale: Scale,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTemperature> for Temperature {
    type Error = ConversionError;

    fn try_from(raw: RawTemperature) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.scale)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Temperature {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} {}", self.value, self.scale.unit_label())
    }
}
