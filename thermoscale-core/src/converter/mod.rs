//! Temperature Converter
//!
//! ## Overview
//!
//! Six pairwise conversions cover every ordered pair of distinct scales. The
//! [`Converter`] dispatches to them from unit symbols (`'C'`, `'f'`, ...) or
//! from typed [`Scale`] values.
//!
//! ## Validation Layers
//!
//! Every conversion runs the same checks, in order, before any arithmetic:
//!
//! ### 1. Unit Symbols
//! The source symbol is parsed first, then the target. Either failing yields
//! `InvalidUnit` naming the argument:
//! ```rust
//! use thermoscale_core::{convert, ConversionError, UnitRole};
//!
//! let err = convert(100, "X", "F").unwrap_err();
//! assert!(matches!(err, ConversionError::InvalidUnit { role: UnitRole::Source, .. }));
//! ```
//!
//! ### 2. Absolute Zero
//! The value is compared against the *source* scale's absolute zero, before
//! conversion. Comparison is strict, so absolute zero itself converts:
//! ```rust
//! use thermoscale_core::convert;
//!
//! assert_eq!(convert(-273.15, "C", "K")?, 0.0);
//! assert!(convert(-273.16, "C", "K").is_err());
//! # Ok::<(), thermoscale_core::ConversionError>(())
//! ```
//! `-inf` lies below every threshold and fails here too.
//!
//! ### 3. Finite Input and Output
//! By default NaN and `+inf` follow IEEE-754 arithmetic. With
//! [`NonFinitePolicy::Reject`] (part of [`Converter::strict`]) a non-finite
//! input, or a result that overflows, fails with `InvalidValue`:
//! ```rust
//! use thermoscale_core::{convert, ConversionError, Converter};
//!
//! assert_eq!(convert(f64::INFINITY, "C", "K")?, f64::INFINITY);
//! assert_eq!(
//!     Converter::strict().convert(f64::INFINITY, "C", "K"),
//!     Err(ConversionError::InvalidValue)
//! );
//! # Ok::<(), thermoscale_core::ConversionError>(())
//! ```
//!
//! ## Identity Conversions
//!
//! Converting a scale to itself returns the value unchanged and, by default,
//! skips the absolute-zero check. Use [`Converter::strict`] (or
//! [`IdentityPolicy::Validate`]) to check identity conversions like every
//! other path:
//!
//! ```rust
//! use thermoscale_core::Converter;
//!
//! assert_eq!(Converter::new().convert(-500.0, "C", "C")?, -500.0);
//! assert!(Converter::strict().convert(-500.0, "C", "C").is_err());
//! # Ok::<(), thermoscale_core::ConversionError>(())
//! ```

mod pairwise;
pub(crate) mod utils;

pub use pairwise::{
    celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, fahrenheit_to_kelvin,
    kelvin_to_celsius, kelvin_to_fahrenheit,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConversionResult, UnitRole},
    scale::Scale,
    traits::Numeric,
};

/// How a conversion from a scale to itself is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdentityPolicy {
    /// Return the value untouched, without an absolute-zero check
    #[default]
    Passthrough,
    /// Check the value against the scale's absolute zero first
    Validate,
}

/// How NaN and infinite values are handled once the absolute-zero check passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonFinitePolicy {
    /// Let them through IEEE-754 arithmetic unchanged
    #[default]
    Allow,
    /// Fail with `InvalidValue` on a non-finite input or result
    Reject,
}

/// Stateless converter carrying only its validation policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Converter {
    /// Identity conversion handling
    identity: IdentityPolicy,

    /// NaN / infinity handling
    non_finite: NonFinitePolicy,
}

impl Converter {
    /// Default converter: identity passthrough, IEEE-754 for NaN and `+inf`
    pub const fn new() -> Self {
        Self {
            identity: IdentityPolicy::Passthrough,
            non_finite: NonFinitePolicy::Allow,
        }
    }

    /// Validate every path, identity conversions included, and reject
    /// non-finite values
    pub const fn strict() -> Self {
        Self {
            identity: IdentityPolicy::Validate,
            non_finite: NonFinitePolicy::Reject,
        }
    }

    /// Replace the identity policy
    pub const fn with_identity_policy(mut self, identity: IdentityPolicy) -> Self {
        self.identity = identity;
        self
    }

    /// Replace the non-finite policy
    pub const fn with_non_finite_policy(mut self, non_finite: NonFinitePolicy) -> Self {
        self.non_finite = non_finite;
        self
    }

    /// Current identity policy
    pub const fn identity_policy(&self) -> IdentityPolicy {
        self.identity
    }

    /// Current non-finite policy
    pub const fn non_finite_policy(&self) -> NonFinitePolicy {
        self.non_finite
    }

    /// Convert `value` between unit symbols (`C`, `F`, `K`, any case).
    ///
    /// The source symbol is validated before the target symbol.
    pub fn convert<V: Numeric>(
        &self,
        value: V,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<f64> {
        let from = Scale::parse_unit(from_unit, UnitRole::Source)?;
        let to = Scale::parse_unit(to_unit, UnitRole::Target)?;
        self.convert_scales(value.to_f64(), from, to)
    }

    /// Convert `value` between typed scales
    pub fn convert_scales(&self, value: f64, from: Scale, to: Scale) -> ConversionResult<f64> {
        if from == to {
            return match self.identity {
                IdentityPolicy::Passthrough => Ok(value),
                IdentityPolicy::Validate => {
                    from.check_absolute_zero(value)?;
                    self.check_finite(value)
                }
            };
        }

        from.check_absolute_zero(value)?;
        self.check_finite(value)?;
        let converted = self.check_finite(utils::apply(value, from, to))?;
        log_trace!(
            "converted {} {} -> {} {}",
            value,
            from.unit_label(),
            converted,
            to.unit_label()
        );
        Ok(converted)
    }

    fn check_finite(&self, value: f64) -> ConversionResult<f64> {
        match self.non_finite {
            NonFinitePolicy::Allow => Ok(value),
            NonFinitePolicy::Reject => utils::check_finite(value),
        }
    }
}

/// Convert `value` between unit symbols with the default [`Converter`]
pub fn convert<V: Numeric>(value: V, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    Converter::new().convert(value, from_unit, to_unit)
}

/// Whether `value` is strictly below absolute zero in the scale named by
/// `unit` (`C`, `F`, `K`, any case).
///
/// Fails only when `unit` is not a recognised symbol.
pub fn is_below_absolute_zero<V: Numeric>(value: V, unit: &str) -> ConversionResult<bool> {
    let scale = Scale::parse_unit(unit, UnitRole::Unit)?;
    Ok(scale.is_below_absolute_zero(value.to_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConversionError;

    #[test]
    fn dispatches_by_symbol() {
        assert_eq!(convert(100, "C", "F"), Ok(212.0));
        assert_eq!(convert(0, "c", "f"), Ok(32.0));
        assert_eq!(convert(32.0, "F", "c"), Ok(0.0));
        assert_eq!(convert(0u8, "k", "K"), Ok(0.0));
    }

    #[test]
    fn identity_returns_value_unchanged() {
        assert_eq!(convert(25, "C", "C"), Ok(25.0));
        assert_eq!(convert(-12.5, "f", "F"), Ok(-12.5));
        assert_eq!(convert(300, "K", "k"), Ok(300.0));
    }

    #[test]
    fn identity_passthrough_skips_absolute_zero() {
        assert_eq!(convert(-1, "K", "K"), Ok(-1.0));
    }

    #[test]
    fn strict_identity_checks_absolute_zero() {
        let converter = Converter::strict();
        assert_eq!(converter.convert(25, "C", "C"), Ok(25.0));
        assert_eq!(
            converter.convert(-1, "K", "K"),
            Err(ConversionError::below_absolute_zero(-1.0, Scale::Kelvin))
        );
    }

    #[test]
    fn source_unit_is_checked_before_target() {
        let err = convert(100, "X", "Z").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { role: UnitRole::Source, .. }));

        let err = convert(100, "C", "Z").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { role: UnitRole::Target, .. }));
    }

    #[test]
    fn unit_errors_win_over_value_errors() {
        let err = convert(-1000.0, "C", "Q").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { role: UnitRole::Target, .. }));
    }

    #[test]
    fn below_absolute_zero_uses_source_threshold() {
        // -300 °F is a valid Fahrenheit reading even though -300 °C is not
        assert!(convert(-300.0, "F", "C").is_ok());
        assert_eq!(
            convert(-300.0, "C", "F"),
            Err(ConversionError::below_absolute_zero(-300.0, Scale::Celsius))
        );
    }

    #[test]
    fn non_finite_follows_ieee_by_default() {
        assert!(convert(f64::NAN, "C", "F").unwrap().is_nan());
        assert_eq!(convert(f64::INFINITY, "C", "K"), Ok(f64::INFINITY));
        assert_eq!(
            convert(f64::NEG_INFINITY, "C", "F"),
            Err(ConversionError::below_absolute_zero(f64::NEG_INFINITY, Scale::Celsius))
        );
    }

    #[test]
    fn identity_passthrough_keeps_nan() {
        assert!(convert(f64::NAN, "C", "C").unwrap().is_nan());
        assert_eq!(convert(f64::NEG_INFINITY, "K", "K"), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn strict_rejects_non_finite() {
        let strict = Converter::strict();
        assert_eq!(strict.convert(f64::NAN, "C", "F"), Err(ConversionError::InvalidValue));
        assert_eq!(strict.convert(f64::INFINITY, "C", "K"), Err(ConversionError::InvalidValue));
        assert_eq!(strict.convert(f64::NAN, "K", "K"), Err(ConversionError::InvalidValue));
        // -inf is below absolute zero before it is non-finite
        assert!(matches!(
            strict.convert(f64::NEG_INFINITY, "C", "K"),
            Err(ConversionError::BelowAbsoluteZero { .. })
        ));
        assert!(matches!(
            strict.convert(f64::NEG_INFINITY, "F", "F"),
            Err(ConversionError::BelowAbsoluteZero { .. })
        ));
    }

    #[test]
    fn strict_rejects_overflowing_result() {
        assert_eq!(convert(f64::MAX, "C", "F"), Ok(f64::INFINITY));
        assert_eq!(
            Converter::strict().convert(f64::MAX, "C", "F"),
            Err(ConversionError::InvalidValue)
        );
        assert_eq!(Converter::strict().convert(5e307, "C", "F"), Ok(9e307 + 32.0));
    }

    #[test]
    fn builder_overrides_presets() {
        let converter = Converter::new()
            .with_identity_policy(IdentityPolicy::Validate)
            .with_non_finite_policy(NonFinitePolicy::Reject);
        assert_eq!(converter.identity_policy(), IdentityPolicy::Validate);
        assert_eq!(converter.non_finite_policy(), NonFinitePolicy::Reject);
        assert_eq!(converter, Converter::strict());
        assert_eq!(Converter::default(), Converter::new());
    }

    #[test]
    fn boundary_predicate() {
        assert_eq!(is_below_absolute_zero(-300, "C"), Ok(true));
        assert_eq!(is_below_absolute_zero(0, "C"), Ok(false));
        assert_eq!(is_below_absolute_zero(100, "K"), Ok(false));
        assert_eq!(is_below_absolute_zero(-459.67, "f"), Ok(false));
        assert_eq!(is_below_absolute_zero(-459.68, "f"), Ok(true));

        let err = is_below_absolute_zero(0, "R").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { role: UnitRole::Unit, .. }));
    }
}
