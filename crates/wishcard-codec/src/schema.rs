//! Discriminated parsing of decoded JSON payloads.
//!
//! A payload is either the compact schema (`s`, `r`, `m`, `v`) or the
//! expanded schema (`sender`, `recipient`, `message`, `vibe`). All four
//! fields must be present and string-valued; extra keys are ignored.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::WishRecord;

const COMPACT_KEYS: [&str; 4] = ["s", "r", "m", "v"];
const EXPANDED_KEYS: [&str; 4] = ["sender", "recipient", "message", "vibe"];

/// Parse the compact schema.
pub fn parse_compact(json: &Value) -> Result<WishRecord, DecodeError> {
    parse_with_keys(json, COMPACT_KEYS)
}

/// Parse the expanded (full field name) schema.
pub fn parse_expanded(json: &Value) -> Result<WishRecord, DecodeError> {
    parse_with_keys(json, EXPANDED_KEYS)
}

fn parse_with_keys(json: &Value, keys: [&'static str; 4]) -> Result<WishRecord, DecodeError> {
    let obj = json
        .as_object()
        .ok_or_else(|| DecodeError::Malformed("payload is not a JSON object".to_string()))?;
    let [sender, recipient, message, vibe] = keys;
    Ok(WishRecord {
        sender: string_field(obj, sender)?,
        recipient: string_field(obj, recipient)?,
        message: string_field(obj, message)?,
        vibe: string_field(obj, vibe)?,
    })
}

fn string_field(obj: &Map<String, Value>, key: &'static str) -> Result<String, DecodeError> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or(DecodeError::IncompletePayload { field: key })
}
