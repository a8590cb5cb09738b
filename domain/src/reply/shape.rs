//! Small shared helpers for walking decoded values.
//!
//! Kept crate-private: the per-kind parsers are the public surface.

use crate::core::error::SchemaViolation;
use serde_json::{Map, Value};

pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| SchemaViolation::wrong_type(path, "an object"))
}

pub(crate) fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaViolation> {
    value
        .as_array()
        .ok_or_else(|| SchemaViolation::wrong_type(path, "an array"))
}

/// Fetch a required string field.
pub(crate) fn str_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, SchemaViolation> {
    let value = obj
        .get(key)
        .ok_or_else(|| SchemaViolation::missing_key(path, key))?;
    value
        .as_str()
        .ok_or_else(|| SchemaViolation::wrong_type(format!("{path}.{key}"), "a string"))
}

/// Lenient integer coercion: numbers (floats truncate toward zero) and
/// integer-formatted strings both coerce; anything else is `None`.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
