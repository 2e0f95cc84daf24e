//! Physical Constants for thermoscale
//!
//! Absolute zero expressed in each supported scale, plus the offsets and
//! ratios that tie the three linear scales together. Values follow the SI
//! definition of the kelvin and the conventional definitions of the Celsius
//! and Fahrenheit scales.

// ===== ABSOLUTE ZERO =====

/// Absolute zero in Celsius (°C).
///
/// The theoretical lower limit of temperature where molecular motion ceases.
/// No value below this is accepted or produced in the Celsius scale.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Absolute zero in Fahrenheit (°F).
///
/// Equivalent to −273.15 °C: `-273.15 * 9/5 + 32 = -459.67`.
///
/// Source: NIST Special Publication 811, Appendix B
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// Absolute zero in Kelvin (K).
///
/// The kelvin scale is anchored at absolute zero, so its floor is 0.
pub const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;

// ===== SCALE RELATIONSHIPS =====

/// Offset between the Celsius and Kelvin scales (K = °C + 273.15).
pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water in Fahrenheit (°F), the offset of the
/// Fahrenheit scale relative to Celsius.
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Fahrenheit degrees spanned by [`CELSIUS_DEGREE_SPAN`] Celsius degrees.
///
/// The two scales are related by the ratio 9:5. The ratio is kept as a
/// numerator/denominator pair and applied as `x * 9 / 5` so that whole
/// numbers such as 100 °C convert to exactly 212 °F.
pub const FAHRENHEIT_DEGREE_SPAN: f64 = 9.0;

/// Celsius degrees spanned by [`FAHRENHEIT_DEGREE_SPAN`] Fahrenheit degrees.
pub const CELSIUS_DEGREE_SPAN: f64 = 5.0;
