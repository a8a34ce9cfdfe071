//! Type checking of field values.
//!
//! Maps each [`FieldType`] to the JSON representations it accepts. Integers
//! are strict: `30.0` parses as a floating value and is not an integer.

use schemas_core::{FieldType, ValidationError};
use serde_json::Value;

/// Returns true if `value` has the JSON representation of `expected`.
pub fn matches_type(expected: FieldType, value: &Value) -> bool {
    match expected {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
    }
}

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks the type of a field value.
///
/// Returns a single `INVALID_FIELD_TYPE` error on mismatch.
pub fn check_type(field: &str, expected: FieldType, value: &Value) -> Option<ValidationError> {
    if matches_type(expected, value) {
        return None;
    }

    Some(
        ValidationError::type_mismatch(field, expected).with_context(format!(
            "expected {}, found {}",
            expected,
            json_type_name(value)
        )),
    )
}
