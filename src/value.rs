// Entry points for untyped input such as decoded JSON

use crate::error::{Error, Result};
use crate::{CaseStyle, Converter};
use serde_json::Value;

/// Name of a JSON value's type as used in error messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Converter {
    /// Convert a value that must be a JSON string
    pub fn convert_value(&self, value: &Value, style: CaseStyle) -> Result<String> {
        match value {
            Value::Null => Err(Error::MissingValue { argument: "input" }),
            Value::String(input) => self.convert(input, style),
            other => Err(Error::TypeMismatch {
                expected: "string",
                found: type_name(other),
            }),
        }
    }
}

/// Convert a value with the default converter
pub fn convert_value(value: &Value, style: CaseStyle) -> Result<String> {
    Converter::shared().convert_value(value, style)
}
