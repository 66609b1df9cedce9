//! Checks the composer applies before asking for a token.
//!
//! The codec itself accepts any strings; these rules only gate link creation.

use crate::error::ComposeError;
use crate::types::{WishRecord, MAX_MESSAGE_CHARS};

/// Validate a record for link generation.
///
/// Sender, recipient and message must contain non-whitespace text and the
/// message must fit in [`MAX_MESSAGE_CHARS`] characters. The vibe is not
/// checked; renderers handle unknown vibes.
pub fn validate_for_compose(record: &WishRecord) -> Result<(), ComposeError> {
    for (field, value) in [
        ("sender", &record.sender),
        ("recipient", &record.recipient),
        ("message", &record.message),
    ] {
        if value.trim().is_empty() {
            return Err(ComposeError::MissingField { field });
        }
    }

    let len = record.message.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(ComposeError::MessageTooLong {
            len,
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}
