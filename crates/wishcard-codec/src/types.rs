use serde::{Deserialize, Serialize};

use crate::vibe::Vibe;

/// Upper bound on message length enforced by the composer (not the codec).
pub const MAX_MESSAGE_CHARS: usize = 100;

/// One greeting: who sends it, to whom, what it says and how it plays.
///
/// Serializes with full field names so it can be stored structurally
/// (history) and matches the legacy token payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WishRecord {
    pub sender: String,
    pub recipient: String,
    pub message: String,
    /// Vibe identifier, carried verbatim. Unknown identifiers are allowed.
    pub vibe: String,
}

impl WishRecord {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
        vibe: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            message: message.into(),
            vibe: vibe.into(),
        }
    }

    /// Build a record with one of the known vibes.
    pub fn with_vibe(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
        vibe: Vibe,
    ) -> Self {
        Self::new(sender, recipient, message, vibe.as_str())
    }

    /// The vibe as a catalog entry, or `None` if the identifier is unknown.
    pub fn known_vibe(&self) -> Option<Vibe> {
        self.vibe.parse().ok()
    }
}

/// Wire form of a [`WishRecord`] with single-letter keys.
///
/// Field order is the serialization order: `s`, `r`, `m`, `v`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactRecord {
    /// Sender.
    pub s: String,
    /// Recipient.
    pub r: String,
    /// Message.
    pub m: String,
    /// Vibe identifier.
    pub v: String,
}

impl From<WishRecord> for CompactRecord {
    fn from(record: WishRecord) -> Self {
        Self {
            s: record.sender,
            r: record.recipient,
            m: record.message,
            v: record.vibe,
        }
    }
}

impl From<&WishRecord> for CompactRecord {
    fn from(record: &WishRecord) -> Self {
        record.clone().into()
    }
}

impl From<CompactRecord> for WishRecord {
    fn from(compact: CompactRecord) -> Self {
        Self {
            sender: compact.s,
            recipient: compact.r,
            message: compact.m,
            vibe: compact.v,
        }
    }
}
