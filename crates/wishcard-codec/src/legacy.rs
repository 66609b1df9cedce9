//! Legacy token generation: `base64(encodeURIComponent(json))`.
//!
//! Tokens from before compression use the standard base64 alphabet (with
//! padding) over the percent-encoded JSON of the expanded schema.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{DecodeError, EncodeError};
use crate::schema::parse_expanded;
use crate::types::WishRecord;

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet, lenient like `atob`: padding optional, trailing bits ignored.
const LEGACY_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Produce a legacy-format token for `record`.
pub fn encode_legacy(record: &WishRecord) -> Result<String, EncodeError> {
    let json = serde_json::to_string(record)?;
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    Ok(LEGACY_BASE64.encode(escaped))
}

/// Decode a legacy-format token.
pub fn decode_legacy(token: &str) -> Result<WishRecord, DecodeError> {
    let raw = LEGACY_BASE64
        .decode(token)
        .map_err(|e| DecodeError::Malformed(format!("legacy base64: {e}")))?;
    // atob yields one char per byte; keep that mapping before unescaping.
    let binary: String = raw.iter().map(|&b| char::from(b)).collect();
    check_escapes(&binary)?;
    let json = percent_decode_str(&binary)
        .decode_utf8()
        .map_err(|e| DecodeError::Malformed(format!("legacy percent-decoding: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| DecodeError::Malformed(format!("legacy JSON: {e}")))?;
    parse_expanded(&value)
}

/// Every `%` must start a two-hex-digit escape, as `decodeURIComponent` requires.
fn check_escapes(s: &str) -> Result<(), DecodeError> {
    let bytes = s.as_bytes();
    for (i, _) in s.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(DecodeError::Malformed(format!(
                "legacy percent-decoding: bad escape at offset {i}"
            )));
        }
    }
    Ok(())
}
