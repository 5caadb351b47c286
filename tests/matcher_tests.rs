//! Tests for value decoding and pattern matching

use kube_string_finder::matcher::{decode, matches, DecodeError, Matcher, MAX_DATA_SIZE};

// ============================================================================
// Decoder Tests
// ============================================================================

#[test]
fn decode_accepts_valid_utf8_within_limit() {
    let inputs: [&[u8]; 4] = [b"", b"s3cret", "pässwörd".as_bytes(), "🔑 key".as_bytes()];

    for input in inputs {
        let text = decode(input, MAX_DATA_SIZE).expect("valid UTF-8 should decode");
        assert_eq!(text.as_bytes(), input);
    }
}

#[test]
fn decode_accepts_payload_exactly_at_limit() {
    let payload = vec![b'a'; MAX_DATA_SIZE];
    let text = decode(&payload, MAX_DATA_SIZE).unwrap();
    assert_eq!(text.len(), MAX_DATA_SIZE);
}

#[test]
fn decode_rejects_payload_over_limit() {
    for limit in [0, 1, 16, MAX_DATA_SIZE] {
        let payload = vec![b'a'; limit + 1];
        assert_eq!(
            decode(&payload, limit),
            Err(DecodeError::Oversized {
                size: limit + 1,
                limit
            })
        );
    }
}

#[test]
fn decode_rejects_invalid_utf8() {
    let inputs: [&[u8]; 4] = [
        &[0xff],
        &[0xc3, 0x28],
        &[0x30, 0x82, 0x01, 0x0a, 0x02, 0x82, 0x01, 0x01, 0x00, 0xc0], // DER-ish prefix
        &[b'o', b'k', 0xe2, 0x82],                                     // truncated sequence
    ];

    for input in inputs {
        assert_eq!(decode(input, MAX_DATA_SIZE), Err(DecodeError::NotUtf8));
    }
}

#[test]
fn decode_checks_size_before_encoding() {
    let payload = vec![0xff; 32];
    assert!(matches!(
        decode(&payload, 8),
        Err(DecodeError::Oversized { size: 32, limit: 8 })
    ));
}

#[test]
fn decode_error_messages_name_the_reason() {
    let oversized = DecodeError::Oversized {
        size: 20_000,
        limit: 10_000,
    };
    assert!(oversized.to_string().contains("exceeds limit"));
    assert!(DecodeError::NotUtf8.to_string().contains("UTF-8"));
}

// ============================================================================
// Matcher Tests
// ============================================================================

#[test]
fn empty_pattern_always_matches() {
    for candidate in ["", "anything", "MiXeD", "ünïcode"] {
        assert!(matches(candidate, "", true));
        assert!(matches(candidate, "", false));
    }
}

#[test]
fn case_insensitive_match_folds_both_sides() {
    assert!(matches("Hello", "hello", false));
    assert!(matches("hello", "HELLO", false));
    assert!(matches("Ärger", "äRGER", false));
}

#[test]
fn case_sensitive_match_is_exact() {
    assert!(!matches("Hello", "hello", true));
    assert!(matches("Hello", "Hello", true));
}

#[test]
fn match_requires_contiguous_substring() {
    assert!(matches("abcdef", "cde", true));
    assert!(!matches("abcdef", "xyz", true));
    assert!(!matches("abcdef", "ace", true));
    assert!(!matches("abc", "abcd", true));
}

#[test]
fn match_does_not_normalize_whitespace() {
    assert!(!matches("pass word", "password", false));
    assert!(!matches("password", " password", false));
}

#[test]
fn matcher_agrees_with_matches() {
    let cases = [
        ("Hello", "hello", false),
        ("Hello", "hello", true),
        ("abcdef", "cde", true),
        ("abcdef", "xyz", true),
        ("DB_PASSWORD", "password", false),
        ("db_password", "PASSWORD", false),
        ("anything", "", true),
    ];

    for (candidate, pattern, case_sensitive) in cases {
        let matcher = Matcher::new(pattern, case_sensitive);
        assert_eq!(
            matcher.is_match(candidate),
            matches(candidate, pattern, case_sensitive),
            "candidate={:?} pattern={:?} case_sensitive={}",
            candidate,
            pattern,
            case_sensitive
        );
    }
}

#[test]
fn matcher_folds_pattern_unless_case_sensitive() {
    assert_eq!(Matcher::new("S3cret", false).pattern(), "s3cret");
    assert_eq!(Matcher::new("S3cret", true).pattern(), "S3cret");
    assert!(Matcher::new("S3cret", true).case_sensitive());
}
