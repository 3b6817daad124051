//! Decode a pack index body into a [`LanguagePackList`].

use serde_json::Value;

use super::error::DiscoveryError;
use super::LanguagePackList;

/// Parses `body` as JSON and requires an object at top level.
/// Nothing partial is ever returned.
pub(crate) fn decode_pack_list(body: &[u8]) -> Result<LanguagePackList, DiscoveryError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(DiscoveryError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
