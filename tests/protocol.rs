// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::io::Cursor;

use hotspot_register::routeros::{
    ClientError, ProtocolError, Response, decode_length, encode_length, legacy_response,
    parse_reply, read_word, write_word,
};

#[test]
fn test_encode_length() {
    assert_eq!(encode_length(0x7F), vec![0x7F]);
    assert_eq!(encode_length(0x80), vec![0x80, 0x80]);
    assert_eq!(encode_length(0x4000 - 1), vec![0xBF, 0xFF]);
    assert_eq!(encode_length(0x4000), vec![0xC0, 0x40, 0x00]);
    assert_eq!(encode_length(0x0020_0000), vec![0xE0, 0x20, 0x00, 0x00]);
    assert_eq!(
        encode_length(0x1000_0000),
        vec![0xF0, 0x10, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_length_tier_edges_decode() {
    // last value of each tier and first value of the next
    let edges: [usize; 8] = [
        0x7F,
        0x80,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        0x0FFF_FFFF,
        0x1000_0000,
    ];

    for value in edges {
        let encoded = encode_length(value);
        assert_eq!(
            decode_length(&encoded),
            Ok(value),
            "decoding {encoded:02X?} for {value:#X}"
        );
    }
    assert_eq!(decode_length(&encode_length(0xFFFF_FFFF)), Ok(0xFFFF_FFFF));
}

#[test]
fn test_reserved_prefix_is_rejected() {
    for first in [0xF1u8, 0xF8, 0xFF] {
        assert_eq!(
            decode_length(&[first, 0, 0, 0, 0]),
            Err(ProtocolError::InvalidLengthPrefix(first))
        );
    }
}

#[test]
fn test_sentence_over_buffer() {
    let comment = format!("=comment={}", "x".repeat(200));
    let mut wire = Vec::new();
    for word in ["!re", "=name=alice", comment.as_str(), ""] {
        write_word(&mut wire, word.as_bytes()).unwrap();
    }

    let mut reader = Cursor::new(wire);
    assert_eq!(read_word(&mut reader).unwrap(), b"!re");
    assert_eq!(read_word(&mut reader).unwrap(), b"=name=alice");
    assert_eq!(read_word(&mut reader).unwrap(), comment.as_bytes());
    assert!(read_word(&mut reader).unwrap().is_empty());
    assert!(matches!(
        read_word(&mut reader),
        Err(ClientError::Protocol(ProtocolError::Closed))
    ));
}

#[test]
fn test_truncated_word() {
    let mut wire = Vec::new();
    write_word(&mut wire, b"=name=alice").unwrap();
    wire.truncate(5);

    assert!(matches!(
        read_word(&mut Cursor::new(wire)),
        Err(ClientError::Protocol(ProtocolError::Truncated))
    ));
}

#[test]
fn test_parse_reply_shapes() {
    let sentences = vec![
        vec!["!re".to_string(), "=name=alice".to_string()],
        vec!["!done".to_string()],
    ];
    let response = parse_reply(&sentences);
    assert!(matches!(response, Response::Done(ref records) if records.len() == 1));

    let sentences = vec![
        vec!["!trap".to_string(), "=message=already exists".to_string()],
        vec!["!done".to_string()],
    ];
    let response = parse_reply(&sentences);
    assert!(response.is_trap());
    assert_eq!(response.trap_message(), Some("already exists"));
}

#[test]
fn test_legacy_response_vectors() {
    assert_eq!(
        legacy_response("pw", "00112233445566778899aabbccddeeff").unwrap(),
        "008e656b13eedbb868d58fddcb551be7bd"
    );
    assert_eq!(
        legacy_response("", "0123456789abcdef0123456789abcdef").unwrap(),
        "00fcb4c16e4375c2590775f3dee281da6b"
    );
}
