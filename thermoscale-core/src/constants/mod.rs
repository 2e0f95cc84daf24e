//! Constants for thermoscale
//!
//! Every numeric value the converters rely on is defined here, with its
//! source. Conversion code never spells out `273.15` or `9.0 / 5.0` inline.
//!
//! ## Organization
//!
//! - **Physics**: absolute-zero thresholds per scale and the affine
//!   relationships between the three scales

/// Absolute-zero thresholds and affine scale relationships.
pub mod physics;

pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT, ABSOLUTE_ZERO_KELVIN,
    CELSIUS_DEGREE_SPAN, CELSIUS_KELVIN_OFFSET, FAHRENHEIT_DEGREE_SPAN, FAHRENHEIT_FREEZING_POINT,
};
