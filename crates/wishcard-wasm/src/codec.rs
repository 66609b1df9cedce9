//! WASM bindings for wishcard-codec.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wishcard_codec::{
    decode, decode_detailed, encode, extract_token, reveal_link, validate_for_compose,
    TokenFormat, Vibe, VibeInfo, WishRecord,
};

use crate::error::{from_js_value, to_js_error, to_js_value};

#[derive(Serialize)]
struct DecodedView {
    record: WishRecord,
    format: TokenFormat,
}

#[derive(Debug, Serialize)]
struct VibeEntry {
    id: &'static str,
    #[serde(flatten)]
    info: VibeInfo,
}

fn vibe_catalog() -> Vec<VibeEntry> {
    Vibe::ALL
        .into_iter()
        .map(|vibe| VibeEntry {
            id: vibe.as_str(),
            info: vibe.info(),
        })
        .collect()
}

// --- Tokens ---

/// Returns `""` when no token could be produced.
#[wasm_bindgen(js_name = "encodeWish")]
pub fn wasm_encode_wish(record: JsValue) -> Result<String, JsValue> {
    let record: WishRecord = from_js_value(record)?;
    Ok(encode(&record))
}

/// Returns `null` for any token that does not decode.
#[wasm_bindgen(js_name = "decodeWish")]
pub fn wasm_decode_wish(token: &str) -> Result<JsValue, JsValue> {
    match decode(token) {
        Some(record) => to_js_value(&record),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen(js_name = "decodeWishDetailed")]
pub fn wasm_decode_wish_detailed(token: &str) -> Result<JsValue, JsValue> {
    let decoded = decode_detailed(token).map_err(to_js_error)?;
    to_js_value(&DecodedView {
        record: decoded.record,
        format: decoded.format,
    })
}

// --- Links ---

#[wasm_bindgen(js_name = "revealLink")]
pub fn wasm_reveal_link(origin: &str, token: &str) -> String {
    reveal_link(origin, token)
}

#[wasm_bindgen(js_name = "extractToken")]
pub fn wasm_extract_token(link: &str) -> Option<String> {
    extract_token(link)
}

// --- Composer ---

#[wasm_bindgen(js_name = "validateWish")]
pub fn wasm_validate_wish(record: JsValue) -> Result<(), JsValue> {
    let record: WishRecord = from_js_value(record)?;
    validate_for_compose(&record).map_err(to_js_error)
}

#[wasm_bindgen(js_name = "vibeCatalog")]
pub fn wasm_vibe_catalog() -> Result<JsValue, JsValue> {
    to_js_value(&vibe_catalog())
}
