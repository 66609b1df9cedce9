//! Share token encode/decode.
//!
//! Encode: WishRecord → CompactRecord → JSON → LZ-String (URI alphabet)
//! Decode: LZ-String → JSON → compact | expanded schema,
//!         falling back to the legacy base64 + percent-encoded JSON format.
//!
//! The public `encode`/`decode` pair never fails loudly: untrusted URL
//! content is routine input. `try_encode`/`decode_detailed` expose the
//! underlying errors for callers and tests that want them.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DecodeError, EncodeError};
use crate::legacy::decode_legacy;
use crate::schema::{parse_compact, parse_expanded};
use crate::token::{compress_token, decompress_token};
use crate::types::{CompactRecord, WishRecord};

/// Which token generation a record was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// Compressed, single-letter keys. What `encode` produces.
    Compact,
    /// Compressed, full field names.
    Expanded,
    /// Uncompressed base64 of percent-encoded JSON with full field names.
    Legacy,
}

/// A successfully decoded token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWish {
    pub record: WishRecord,
    pub format: TokenFormat,
}

/// Encode a record into a share token.
///
/// Returns an empty string if encoding fails; callers treat that as
/// "link not generated". A partial token is never returned.
pub fn encode(record: &WishRecord) -> String {
    match try_encode(record) {
        Ok(token) => token,
        Err(e) => {
            warn!(error = %e, "wish encoding failed");
            String::new()
        }
    }
}

/// Encode a record into a share token, reporting failures.
pub fn try_encode(record: &WishRecord) -> Result<String, EncodeError> {
    let json = serde_json::to_string(&CompactRecord::from(record))?;
    Ok(compress_token(&json))
}

/// Decode a share token. Returns `None` for anything that is not a valid
/// token of either generation.
pub fn decode(token: &str) -> Option<WishRecord> {
    match decode_detailed(token) {
        Ok(decoded) => Some(decoded.record),
        Err(e) => {
            debug!(error = %e, "wish token rejected");
            None
        }
    }
}

/// Decode a share token, reporting which generation matched or why none did.
///
/// The current format is tried first. The legacy path runs when the token
/// does not decompress to text, or when the text matches neither schema.
/// Spaces are read as `+`, since both alphabets use it and query parsing
/// turns it into a space.
pub fn decode_detailed(token: &str) -> Result<DecodedWish, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }
    let token = token.replace(' ', "+");

    let current_err = match decompress_token(&token) {
        Ok(Some(text)) => match parse_current(&text) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => Some(e),
        },
        Ok(None) => None,
        Err(e) => {
            debug!(error = %e, "token is not in the compressed format");
            None
        }
    };

    match decode_legacy(&token) {
        Ok(record) => Ok(DecodedWish {
            record,
            format: TokenFormat::Legacy,
        }),
        // A compressed object with missing fields explains the failure better
        // than the legacy path tripping over compressed bytes.
        Err(legacy_err) => Err(match current_err {
            Some(e @ DecodeError::IncompletePayload { .. }) => e,
            _ => legacy_err,
        }),
    }
}

fn parse_current(text: &str) -> Result<DecodedWish, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DecodeError::Malformed(format!("JSON: {e}")))?;

    match parse_compact(&value) {
        Ok(record) => Ok(DecodedWish {
            record,
            format: TokenFormat::Compact,
        }),
        Err(compact_err) => parse_expanded(&value)
            .map(|record| DecodedWish {
                record,
                format: TokenFormat::Expanded,
            })
            .map_err(|_| compact_err),
    }
}
