//! Shape checks for loosely typed input
//!
//! Callers that receive sentences, steps or split parameters as JSON go
//! through these helpers before anything reaches the cursor.

use crate::error::{Result, StepperError};
use serde_json::Value;

/// Describe a value for error messages, e.g. `number 1.1` or `array of length 2`
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of length {}", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

/// Read an integral number.
///
/// Floats with no fractional part count as integers; `1.1`, NaN-like values
/// and anything that is not a number do not.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if value.is_u64() {
        // Larger than i64::MAX: still an integer, saturate for clamping
        return Some(i64::MAX);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}

/// Require an argument to be present
pub fn require<'a>(value: Option<&'a Value>, expected: &'static str) -> Result<&'a Value> {
    value.ok_or(StepperError::MissingArgument { expected })
}

/// Require an integral number
pub fn integer(value: &Value, expected: &'static str) -> Result<i64> {
    as_integer(value).ok_or_else(|| StepperError::wrong_shape(expected, describe(value)))
}

/// Require a non-negative integral number
pub fn non_negative_integer(value: &Value, expected: &'static str) -> Result<usize> {
    let n = integer(value, expected)?;
    usize::try_from(n).map_err(|_| StepperError::wrong_shape(expected, describe(value)))
}

/// Require a finite, non-negative number
pub fn non_negative_number(value: &Value, expected: &'static str) -> Result<f64> {
    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => Ok(f),
        _ => Err(StepperError::wrong_shape(expected, describe(value))),
    }
}

/// Require a string
pub fn string<'a>(value: &'a Value, expected: &'static str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| StepperError::wrong_shape(expected, describe(value)))
}

/// Require a boolean
pub fn boolean(value: &Value, expected: &'static str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| StepperError::wrong_shape(expected, describe(value)))
}
