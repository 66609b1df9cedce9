//! Wish record model and share token codec.
//!
//! A wish (sender, recipient, message, vibe) is packed into a compact,
//! URL-safe token and recovered exactly from it. Tokens from the older
//! uncompressed generation still decode.
//!
//! Tokens are obfuscated, not encrypted: anyone holding a link can read the
//! wish, and anyone can mint a token.

pub mod codec;
pub mod compose;
pub mod error;
pub mod legacy;
pub mod link;
pub mod schema;
pub mod token;
pub mod types;
pub mod vibe;

pub use codec::{decode, decode_detailed, encode, try_encode, DecodedWish, TokenFormat};
pub use compose::validate_for_compose;
pub use error::{CodecError, ComposeError, DecodeError, EncodeError, LinkError};
pub use legacy::{decode_legacy, encode_legacy};
pub use link::{extract_token, open_link, reveal_link, share_link, REVEAL_ROUTE, TOKEN_PARAM};
pub use token::{is_token_alphabet, TOKEN_ALPHABET};
pub use types::{CompactRecord, WishRecord, MAX_MESSAGE_CHARS};
pub use vibe::{UnknownVibe, Vibe, VibeInfo};
