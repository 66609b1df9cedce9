use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON encode error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Empty token")]
    Empty,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Incomplete payload: missing or non-string field {field}")]
    IncompletePayload { field: &'static str },
}

/// Failures inside the compressed token layer.
///
/// `decode_detailed` logs these at debug level and moves on to the legacy
/// path. When that also fails, the legacy error is what callers see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Character outside the token alphabet: {0:?}")]
    Alphabet(char),

    #[error("Decompression failed: {0}")]
    Decompress(String),

    #[error("Token is not the canonical encoding of its payload")]
    NonCanonical,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Link has no `{param}` parameter")]
    MissingToken { param: &'static str },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Wish is missing {field}")]
    MissingField { field: &'static str },

    #[error("Message too long: {len} characters (max {max})")]
    MessageTooLong { len: usize, max: usize },
}
