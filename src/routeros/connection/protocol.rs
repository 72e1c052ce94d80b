// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS wire protocol helpers
//!
//! A word is a length prefix followed by that many payload bytes. The prefix
//! is 1 to 5 bytes wide; the high bits of its first byte select the width.

use std::io::{ErrorKind, Read, Write};

use crate::routeros::error::{ClientError, ProtocolError};

/// Longest word a length prefix can describe
pub const MAX_WORD_LEN: usize = u32::MAX as usize;

/// Encodes a word length. `len` must not exceed [`MAX_WORD_LEN`].
// RouterOS protocol length encoding - intentional truncation is part of the wire format
#[allow(clippy::cast_possible_truncation)]
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else if len < 0x4000 {
        vec![((len >> 8) as u8) | 0x80, (len & 0xFF) as u8]
    } else if len < 0x0020_0000 {
        vec![
            ((len >> 16) as u8) | 0xC0,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    } else if len < 0x1000_0000 {
        vec![
            ((len >> 24) as u8) | 0xE0,
            ((len >> 16) & 0xFF) as u8,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    } else {
        vec![
            0xF0,
            ((len >> 24) & 0xFF) as u8,
            ((len >> 16) & 0xFF) as u8,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    }
}

/// Width in bytes of a length prefix, judged from its first byte
pub fn length_prefix_width(first: u8) -> Result<usize, ProtocolError> {
    match first {
        0x00..=0x7F => Ok(1),
        0x80..=0xBF => Ok(2),
        0xC0..=0xDF => Ok(3),
        0xE0..=0xEF => Ok(4),
        0xF0 => Ok(5),
        reserved => Err(ProtocolError::InvalidLengthPrefix(reserved)),
    }
}

/// Decodes a length prefix produced by [`encode_length`].
///
/// Bytes past the prefix width are ignored.
pub fn decode_length(prefix: &[u8]) -> Result<usize, ProtocolError> {
    let (&first, rest) = prefix.split_first().ok_or(ProtocolError::Truncated)?;
    let width = length_prefix_width(first)?;
    let high = match width {
        1 => return Ok(usize::from(first)),
        2 => first & 0x3F,
        3 => first & 0x1F,
        4 => first & 0x0F,
        // 0xF0 carries no length bits
        _ => 0,
    };
    let tail = rest.get(..width - 1).ok_or(ProtocolError::Truncated)?;
    Ok(tail
        .iter()
        .fold(usize::from(high), |acc, &b| (acc << 8) | usize::from(b)))
}

/// Fills `buf` completely from `reader`.
///
/// A single `read` may return fewer bytes than asked for, so this keeps
/// accumulating until the buffer is full. End of stream before that is
/// reported as [`ProtocolError::Truncated`].
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), ClientError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(ProtocolError::Truncated.into()),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Writes one length-prefixed word. An empty `word` is a sentence terminator.
pub fn write_word<W: Write + ?Sized>(writer: &mut W, word: &[u8]) -> Result<(), ClientError> {
    if word.len() > MAX_WORD_LEN {
        return Err(ProtocolError::WordTooLong(word.len()).into());
    }
    writer.write_all(&encode_length(word.len()))?;
    writer.write_all(word)?;
    Ok(())
}

/// Reads one length-prefixed word. An empty result is a sentence terminator.
pub fn read_word<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, ClientError> {
    let mut prefix = [0u8; 5];
    read_full(reader, &mut prefix[..1]).map_err(|e| match e {
        ClientError::Protocol(ProtocolError::Truncated) => ProtocolError::Closed.into(),
        other => other,
    })?;
    let width = length_prefix_width(prefix[0])?;
    read_full(reader, &mut prefix[1..width])?;
    let len = decode_length(&prefix[..width])?;

    // buffer grows with received bytes, not with the claimed length
    let mut word = Vec::new();
    let received = Read::take(&mut *reader, len as u64).read_to_end(&mut word)?;
    if received < len {
        return Err(ProtocolError::Truncated.into());
    }
    Ok(word)
}
