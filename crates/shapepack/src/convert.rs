//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! `serde_json` is built with `preserve_order`, so object key order
//! survives both directions, matching the Map pair-order guarantee.

use serde_json::Value as JsonValue;

use crate::error::EncodeError;
use crate::value::Value;

/// Converts a JSON value into the codec value model.
///
/// JSON numbers map onto the narrowest scalar kind that holds their
/// magnitude. Unsigned integers above `i64::MAX` fit no kind and are
/// rejected rather than rounded through `f64`.
pub fn value_from_json(json: &JsonValue) -> Result<Value, EncodeError> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::int(i))
            } else if n.is_u64() {
                Err(EncodeError::UnsupportedValueKind(
                    "unsigned integer above i64 range",
                ))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float64(f))
            } else {
                Err(EncodeError::UnsupportedValueKind("number"))
            }
        }
        JsonValue::String(s) => Ok(Value::Text(s.clone())),
        JsonValue::Array(items) => {
            let items = items
                .iter()
                .map(value_from_json)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(items))
        }
        JsonValue::Object(obj) => {
            let mut pairs = Vec::with_capacity(obj.len());
            for (key, value) in obj {
                pairs.push((key.clone(), value_from_json(value)?));
            }
            Ok(Value::Map(pairs))
        }
    }
}

/// Converts a codec value to JSON.
///
/// JSON objects cannot hold duplicate keys, so repeated map keys collapse
/// to the last pair; the binary format itself keeps every pair. Non-finite
/// floats have no JSON form and become null.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int32(n) => JsonValue::from(*n),
        Value::Int64(n) => JsonValue::from(*n),
        Value::Float64(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Map(pairs) => {
            let mut obj = serde_json::Map::with_capacity(pairs.len());
            for (key, value) in pairs {
                obj.insert(key.clone(), value_to_json(value));
            }
            JsonValue::Object(obj)
        }
    }
}
