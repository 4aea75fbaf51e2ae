//! Forgiving `deserialize_with` helpers for hand-authored content.
//!
//! Each helper accepts any JSON value and maps the wrong shape to the
//! field's empty value. Nested records are decoded on a growable stack so
//! category depth is not limited by the thread's stack size.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An array of records; anything else is absent and bad elements are dropped
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(None),
        other => {
            ::log::debug!("Ignoring non-array collection: {}", kind(&other));
            return Ok(None);
        }
    };

    let decoded = items
        .into_iter()
        .filter_map(|item| match T::deserialize(serde_stacker::Deserializer::new(item)) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                ::log::debug!("Skipping malformed content entry: {}", e);
                None
            }
        })
        .collect();

    Ok(Some(decoded))
}

/// A string; any other value is absent
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// An array of strings; non-string elements are dropped, non-arrays are empty
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// True only for a literal JSON `true`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
