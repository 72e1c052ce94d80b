// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS reply parsing

use crate::routeros::types::{Marker, Record, Response, Sentence};

/// Splits an `=key=value` attribute word.
///
/// The key is everything up to the first `=` after its first character, so
/// values may themselves contain `=`. Words of any other shape yield `None`.
pub(crate) fn parse_attribute(word: &str) -> Option<(&str, &str)> {
    let body = word.strip_prefix('=')?;
    let (split, _) = body.char_indices().skip(1).find(|&(_, c)| c == '=')?;
    Some((&body[..split], &body[split + 1..]))
}

/// Groups the words of a reply into records.
///
/// Every marker word closes the record being built (kept only if it gathered
/// attributes) and opens a new one. A `!trap` anywhere turns the whole reply
/// into [`Response::Trap`].
pub fn parse_reply(sentences: &[Sentence]) -> Response {
    let mut records: Vec<Record> = Vec::new();
    let mut current: Option<Record> = None;
    let mut trap = false;

    for word in sentences.iter().flatten() {
        if let Some(marker) = Marker::from_word(word) {
            if marker == Marker::Trap {
                trap = true;
            }
            if let Some(record) = current.take().filter(|r| !r.is_empty()) {
                records.push(record);
            }
            current = Some(Record::new());
        } else if let Some((key, value)) = parse_attribute(word) {
            // attributes before the first marker belong to no record
            if let Some(record) = current.as_mut() {
                record.insert(key.to_string(), value.to_string());
            }
        }
    }
    if let Some(record) = current.filter(|r| !r.is_empty()) {
        records.push(record);
    }

    if trap {
        Response::Trap(records)
    } else {
        Response::Done(records)
    }
}
