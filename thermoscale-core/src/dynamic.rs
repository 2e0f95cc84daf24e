//! Conversion of untyped JSON values
//!
//! The typed API rejects non-numeric input at compile time. Values that
//! arrive untyped (request bodies, configuration files, scripting layers)
//! are checked here instead, and anything that is not a JSON number fails
//! with [`ConversionError::InvalidArgumentType`] naming what was supplied.
//!
//! ```rust
//! use serde_json::json;
//! use thermoscale_core::{dynamic::convert_value, ConversionError};
//!
//! assert_eq!(convert_value(&json!(100), "C", "F")?, 212.0);
//! assert_eq!(
//!     convert_value(&json!("100"), "C", "F"),
//!     Err(ConversionError::InvalidArgumentType { found: "string" })
//! );
//! # Ok::<(), ConversionError>(())
//! ```

use serde_json::Value;

use crate::{
    converter::Converter,
    errors::{ConversionError, ConversionResult},
};

/// Name of a JSON value's type, as reported in `InvalidArgumentType`
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a numeric temperature from an untyped value.
///
/// Booleans are not numbers here, even though some languages treat them as
/// integers.
pub fn numeric_value(value: &Value) -> ConversionResult<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or(ConversionError::InvalidArgumentType {
            found: "number",
        }),
        other => {
            let found = json_type_name(other);
            log_debug!("rejected non-numeric temperature of type {}", found);
            Err(ConversionError::InvalidArgumentType { found })
        }
    }
}

impl Converter {
    /// Convert an untyped value between unit symbols.
    ///
    /// The value's type is checked before the unit symbols.
    pub fn convert_value(
        &self,
        value: &Value,
        from_unit: &str,
        to_unit: &str,
    ) -> ConversionResult<f64> {
        let value = numeric_value(value)?;
        self.convert(value, from_unit, to_unit)
    }
}

/// Convert an untyped value with the default [`Converter`]
pub fn convert_value(value: &Value, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    Converter::new().convert_value(value, from_unit, to_unit)
}
