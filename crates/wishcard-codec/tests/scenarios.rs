//! End-to-end token scenarios: composer → link → reveal.

use base64::Engine;
use wishcard_codec::{
    decode, decode_detailed, encode, encode_legacy, is_token_alphabet, open_link, share_link,
    DecodeError, TokenFormat, Vibe, WishRecord,
};

// ============================================================================
// Helpers
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// `btoa(encodeURIComponent(json))` for an ASCII-only payload, written out by hand.
fn legacy_token_for(json: &str) -> String {
    let mut escaped = String::new();
    for b in json.bytes() {
        if b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b) {
            escaped.push(char::from(b));
        } else {
            escaped.push_str(&format!("%{b:02X}"));
        }
    }
    base64::engine::general_purpose::STANDARD.encode(escaped)
}

// ============================================================================
// Current format
// ============================================================================

#[test]
fn birthday_wish_round_trips() {
    init_tracing();
    let record = WishRecord::new("Alex", "Sam", "Happy Birthday!", "LOVE");
    let token = encode(&record);
    assert!(!token.is_empty());
    assert_eq!(decode(&token), Some(record));
}

#[test]
fn empty_fields_are_preserved() {
    let record = WishRecord::new("", "", "", "DEEP");
    let token = encode(&record);
    assert!(!token.is_empty());
    assert_eq!(decode(&token), Some(record));
}

#[test]
fn emoji_and_reserved_characters_round_trip() {
    let record = WishRecord::new("Zoë", "山田", "♥ 100% free? #yes", "COSMIC");
    let token = encode(&record);
    assert!(is_token_alphabet(&token));
    assert_eq!(decode(&token), Some(record));
}

#[test]
fn whitespace_and_json_metacharacters_round_trip() {
    let record = WishRecord::new(
        "  padded  ",
        "tab\there",
        "line1\nline2 \"quoted\" \\ {braces} [brackets]",
        "CHILL",
    );
    assert_eq!(decode(&encode(&record)), Some(record));
}

#[test]
fn long_message_round_trips() {
    // The codec has no length limit of its own.
    let record = WishRecord::new("a", "b", "wish ".repeat(2_000), "MEMORY");
    assert_eq!(decode(&encode(&record)), Some(record));
}

#[test]
fn composer_sized_repetitive_messages_round_trip() {
    for message in [
        "♥".repeat(100),
        "ha".repeat(50),
        "!".repeat(100),
        "🎂".repeat(100),
        " ".repeat(100),
    ] {
        let record = WishRecord::new("Alex", "Sam", message, "LOVE");
        assert_eq!(decode(&encode(&record)), Some(record));
    }
}

#[test]
fn token_minted_by_the_web_app_decodes() {
    init_tracing();
    let token = "N4IgziBcIIIDYFMAeIA0IBOUQGUCGAtmiEdABJ4AOlAngAQBCAlhgC4AWAJnjQITEA3bABkA8gDUAoiAC+QA";
    let decoded = decode_detailed(token).unwrap();
    assert_eq!(decoded.format, TokenFormat::Compact);
    assert_eq!(
        decoded.record,
        WishRecord::new("Alex", "Sam", "Happy Birthday!", "LOVE")
    );
}

#[test]
fn web_app_link_opens_after_query_parsing() {
    let link = "https://wish.example/#/reveal?d=N4IgziBcIIIDYFMAeIA0IBOUQGUCGAtmiEdABJ4AOlAngAQBCAlhgC4AWAJnjQITEA3bABkA8gDUAoiAC+QA";
    assert_eq!(
        open_link(link).unwrap(),
        WishRecord::new("Alex", "Sam", "Happy Birthday!", "LOVE")
    );
}

#[test]
fn unknown_vibe_passes_through() {
    let record = WishRecord::new("a", "b", "c", "VAPORWAVE");
    let decoded = decode(&encode(&record)).unwrap();
    assert_eq!(decoded.vibe, "VAPORWAVE");
    assert_eq!(decoded.known_vibe(), None);
}

#[test]
fn every_catalog_vibe_round_trips() {
    for vibe in Vibe::ALL {
        let record = WishRecord::with_vibe("a", "b", "c", vibe);
        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded.known_vibe(), Some(vibe));
    }
}

#[test]
fn same_record_gives_same_token() {
    let record = WishRecord::with_vibe("Alex", "Sam", "Hi", Vibe::Anime);
    assert_eq!(encode(&record), encode(&record));
}

#[test]
fn compressed_token_is_shorter_than_legacy() {
    let record = WishRecord::with_vibe(
        "Alex",
        "Sam",
        "Happy birthday! Wishing you the happiest of days.",
        Vibe::Love,
    );
    assert!(encode(&record).len() < encode_legacy(&record).unwrap().len());
}

// ============================================================================
// Legacy format
// ============================================================================

#[test]
fn legacy_token_decodes_via_fallback() {
    init_tracing();
    let token =
        legacy_token_for(r#"{"sender":"Jo","recipient":"Kim","message":"Hi","vibe":"CHILL"}"#);
    let decoded = decode_detailed(&token).unwrap();
    assert_eq!(decoded.format, TokenFormat::Legacy);
    assert_eq!(decoded.record, WishRecord::new("Jo", "Kim", "Hi", "CHILL"));
}

#[test]
fn legacy_encoder_matches_hand_built_token() {
    let record = WishRecord::new("Jo", "Kim", "Hi", "CHILL");
    let expected =
        legacy_token_for(r#"{"sender":"Jo","recipient":"Kim","message":"Hi","vibe":"CHILL"}"#);
    assert_eq!(encode_legacy(&record).unwrap(), expected);
}

#[test]
fn legacy_unicode_round_trips() {
    let record = WishRecord::new("Zoë", "山田", "♥ 100% free? #yes", "LOVE");
    let token = encode_legacy(&record).unwrap();
    assert_eq!(decode(&token), Some(record));
}

#[test]
fn legacy_partial_payload_is_rejected() {
    let token = legacy_token_for(r#"{"sender":"Jo","recipient":"Kim","message":"Hi"}"#);
    assert_eq!(
        decode_detailed(&token),
        Err(DecodeError::IncompletePayload { field: "vibe" })
    );
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn empty_token_is_rejected() {
    assert_eq!(decode(""), None);
}

#[test]
fn garbage_token_is_rejected() {
    init_tracing();
    assert_eq!(decode("not-a-real-token-???"), None);
}

#[test]
fn assorted_garbage_is_rejected() {
    for token in [
        " ",
        "=",
        "====",
        "null",
        "e30",      // base64 of "{}"
        "W10",      // base64 of "[]"
        "AAAA",
        "Q",
        "%7B%7D",
        "🎂🎂🎂",
        "\0\0\0\0",
    ] {
        assert_eq!(decode(token), None, "token {token:?}");
    }
}

#[test]
fn single_character_edits_never_panic() {
    let record = WishRecord::new("Alex", "Sam", "Happy Birthday!", "LOVE");
    let token = encode(&record);
    for i in 0..token.len() {
        let mut bytes = token.clone().into_bytes();
        bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
        let mutated = String::from_utf8(bytes).unwrap();
        // An edit may still decompress to a valid payload; only the
        // decoded-or-rejected outcome matters here.
        let _ = decode_detailed(&mutated);
    }
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn share_link_opens_on_reveal_page() {
    let record = WishRecord::with_vibe("Alex", "Sam", "♥ 100% free? #yes", Vibe::Glitch);
    let link = share_link("https://wish.example", &record).unwrap();
    assert!(link.starts_with("https://wish.example/#/reveal?d="));
    assert_eq!(open_link(&link).unwrap(), record);
}
