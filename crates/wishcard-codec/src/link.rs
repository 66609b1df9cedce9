//! Carrying tokens in share links.
//!
//! Links have the shape `{origin}/#/reveal?d={token}`. The token alphabet
//! needs no escaping in a query component, so it is embedded as-is.

use percent_encoding::percent_decode_str;

use crate::codec::{decode_detailed, encode};
use crate::error::LinkError;
use crate::types::WishRecord;

/// Query parameter carrying the token.
pub const TOKEN_PARAM: &str = "d";

/// Hash-routed path of the reveal page.
pub const REVEAL_ROUTE: &str = "/#/reveal";

/// Build the reveal link for an already encoded token.
pub fn reveal_link(origin: &str, token: &str) -> String {
    format!(
        "{}{REVEAL_ROUTE}?{TOKEN_PARAM}={token}",
        origin.trim_end_matches('/')
    )
}

/// Encode `record` and build its reveal link.
///
/// `None` when encoding produced no token.
pub fn share_link(origin: &str, record: &WishRecord) -> Option<String> {
    let token = encode(record);
    if token.is_empty() {
        return None;
    }
    Some(reveal_link(origin, &token))
}

/// Find the token in a full URL, a hash-routed URL, or a bare query string.
///
/// Percent-escapes in the value are decoded (pasted links are sometimes
/// re-escaped); `+` is kept as-is since both token alphabets contain it.
pub fn extract_token(link: &str) -> Option<String> {
    let query = link.split_once('?').map_or(link, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    query
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == TOKEN_PARAM).then_some(value)
        })
        .filter(|value| !value.is_empty())
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Extract and decode the wish carried by a link.
pub fn open_link(link: &str) -> Result<WishRecord, LinkError> {
    let token = extract_token(link).ok_or(LinkError::MissingToken { param: TOKEN_PARAM })?;
    Ok(decode_detailed(&token)?.record)
}
