use crate::error::{Error, Result};
use crate::value::type_name;
use serde_json::Value;

/// Add two numbers, rejecting NaN
pub fn add_numbers(a: f64, b: f64) -> Result<f64> {
    if a.is_nan() || b.is_nan() {
        return Err(Error::InvalidNumeric);
    }

    Ok(a + b)
}

/// Add two dynamically typed values.
///
/// Missing arguments are reported before type errors, and type errors before
/// NaN.
pub fn add_values(a: &Value, b: &Value) -> Result<f64> {
    if a.is_null() {
        return Err(Error::MissingValue { argument: "first" });
    }
    if b.is_null() {
        return Err(Error::MissingValue { argument: "second" });
    }

    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => add_numbers(a, b),
        (None, _) => Err(Error::TypeMismatch {
            expected: "number",
            found: type_name(a),
        }),
        (_, None) => Err(Error::TypeMismatch {
            expected: "number",
            found: type_name(b),
        }),
    }
}
