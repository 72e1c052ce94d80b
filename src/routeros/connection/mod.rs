// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Low-level RouterOS API connection handling

mod auth;
mod parse;
pub(crate) mod protocol;

use std::io::{Read, Write};

use super::error::{ClientError, ProtocolError};
use super::types::{Marker, Response, Sentence};

pub use auth::legacy_response;
pub use parse::parse_reply;
use protocol::{read_word, write_word};

/// Low-level RouterOS API connection over any duplex byte stream
pub(crate) struct Connection<S> {
    stream: S,
    debug: bool,
}

impl<S: Read + Write> Connection<S> {
    pub(crate) fn new(stream: S, debug: bool) -> Self {
        Self { stream, debug }
    }

    pub(crate) fn into_inner(self) -> S {
        self.stream
    }

    /// Sends `path` followed by one `=key=value` word per attribute and
    /// returns the parsed reply.
    pub(crate) fn command(
        &mut self,
        path: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Response, ClientError> {
        let mut words: Vec<String> = Vec::with_capacity(1 + attributes.len());
        words.push(path.to_string());
        for (key, value) in attributes {
            words.push(format!("={key}={value}"));
        }
        let sentences = self.raw_command(&words)?;
        Ok(parse_reply(&sentences))
    }

    fn raw_command(&mut self, words: &[String]) -> Result<Vec<Sentence>, ClientError> {
        self.send_sentence(words)?;
        self.read_reply()
    }

    fn send_sentence(&mut self, words: &[String]) -> Result<(), ClientError> {
        for w in words {
            self.trace_word(">>>", w);
            write_word(&mut self.stream, w.as_bytes())?;
        }
        // zero length word terminator
        write_word(&mut self.stream, &[])?;
        self.stream.flush()?;
        Ok(())
    }

    /// Reads reply sentences until the one opened by `!done` is terminated
    fn read_reply(&mut self) -> Result<Vec<Sentence>, ClientError> {
        let mut sentences: Vec<Sentence> = Vec::new();
        let mut current: Sentence = Vec::new();
        let mut fatal: Option<String> = None;
        loop {
            let word = match read_word(&mut self.stream) {
                Ok(word) => word,
                Err(ClientError::Protocol(ProtocolError::Closed)) if fatal.is_some() => {
                    return Err(ClientError::Fatal(fatal.unwrap_or_default()));
                }
                Err(e) => return Err(e),
            };

            if !word.is_empty() {
                let word = decode_word(word);
                self.trace_word("<<<", &word);
                current.push(word);
                continue;
            }
            if current.is_empty() {
                continue;
            }

            let marker = current.first().and_then(|w| Marker::from_word(w));
            if let Some(m) = marker {
                tracing::trace!(
                    "{} sentence, {} attribute word(s)",
                    m.as_str(),
                    current.len() - 1
                );
            }
            if marker == Some(Marker::Fatal) {
                let reason = current[1..].join(" ");
                tracing::warn!("RouterOS sent !fatal: {}", reason);
                fatal = Some(if reason.is_empty() {
                    "fatal".to_string()
                } else {
                    reason
                });
            }
            sentences.push(std::mem::take(&mut current));
            if marker == Some(Marker::Done) {
                tracing::trace!("Command complete, {} sentences received", sentences.len());
                break;
            }
        }
        Ok(sentences)
    }

    /// Echo of raw words; `debug` lifts it from trace to info level
    fn trace_word(&self, direction: &str, word: &str) {
        if self.debug {
            tracing::info!("{} {}", direction, redact(word));
        } else {
            tracing::trace!("{} {}", direction, redact(word));
        }
    }
}

/// Reply words are expected to be UTF-8; anything else is kept lossily.
fn decode_word(word: Vec<u8>) -> String {
    match String::from_utf8(word) {
        Ok(word) => word,
        Err(e) => {
            let word = String::from_utf8_lossy(e.as_bytes()).into_owned();
            tracing::trace!(
                "Reply word is not valid UTF-8, invalid bytes replaced: {}",
                word
            );
            word
        }
    }
}

/// Hides credential values in traced words
fn redact(word: &str) -> &str {
    if word.starts_with("=password=") {
        "=password=***"
    } else if word.starts_with("=response=") {
        "=response=***"
    } else {
        word
    }
}
