//! JSON lookup helpers shared by the ticker adapters.

use serde_json::Value;

use crate::ApiError;

/// Parse `body` into a JSON value.
pub fn parse_document(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::malformed_json(e.to_string()))
}

/// Borrow the JSON object stored under `key`; `path` names it in errors.
pub fn object<'a>(parent: &'a Value, key: &str, path: &str) -> Result<&'a Value, ApiError> {
    parent
        .get(key)
        .filter(|value| value.is_object())
        .ok_or_else(|| ApiError::missing_field(path))
}

/// Read a JSON string field.
pub fn string<'a>(parent: &'a Value, key: &str, path: &str) -> Result<&'a str, ApiError> {
    parent
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::missing_field(path))
}

/// Read a JSON number field as a float.
pub fn number(parent: &Value, key: &str, path: &str) -> Result<f64, ApiError> {
    parent
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::missing_field(path))
}

/// Read a string field holding a base-10 integer, e.g. `"10951000"`.
pub fn integer_string(parent: &Value, key: &str, path: &str) -> Result<i64, ApiError> {
    let raw = string(parent, key, path)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::missing_field_with(path, format!("'{raw}' is not an integer")))
}
