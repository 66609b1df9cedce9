//! Compressed token layer: LZ-String's URI-component encoding.
//!
//! Output uses only `A-Z a-z 0-9 + - $`, so a token can sit in a query
//! component without percent-encoding. `URLSearchParams` reads `+` back as a
//! space; decompression undoes that.

use lz_str::{compress_to_encoded_uri_component, decompress_from_encoded_uri_component};

use crate::error::CodecError;

/// Every character a compressed token may contain, in code order.
pub const TOKEN_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$";

/// True if every character of `s` belongs to [`TOKEN_ALPHABET`].
pub fn is_token_alphabet(s: &str) -> bool {
    s.chars().all(in_alphabet)
}

fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '$')
}

/// Compress `text` into a token.
pub fn compress_token(text: &str) -> String {
    compress_to_encoded_uri_component(text)
}

/// Recover the text a token was compressed from. `Ok(None)` means the
/// stream held no text at all.
///
/// Only the exact token `compress_token` would produce for the recovered
/// text is accepted. A cut-off token can still carry a complete stream when
/// the removed characters were padding, and this rules that out.
pub fn decompress_token(token: &str) -> Result<Option<String>, CodecError> {
    let token = token.replace(' ', "+");
    if let Some(c) = token.chars().find(|&c| !in_alphabet(c)) {
        return Err(CodecError::Alphabet(c));
    }

    let units = decompress_from_encoded_uri_component(token.as_str())
        .ok_or_else(|| CodecError::Decompress("invalid stream".to_string()))?;
    if units.is_empty() {
        return Ok(None);
    }
    let text = String::from_utf16(&units)
        .map_err(|e| CodecError::Decompress(format!("payload is not UTF-16: {e}")))?;

    if compress_token(&text) != token {
        return Err(CodecError::NonCanonical);
    }
    Ok(Some(text))
}
