// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS authentication
//!
//! Routers since 6.43 accept the password in the first `/login` sentence and
//! answer with a bare `!done`. Older firmware ignores the password and answers
//! `!done` with `=ret=<hex challenge>`, expecting a second `/login` carrying an
//! MD5 proof of the password.

use std::io::{Read, Write};

use md5::compute as md5_compute;

use super::Connection;
use super::parse::parse_attribute;
use crate::routeros::error::ClientError;
use crate::routeros::types::{Marker, Sentence};

/// Computes the legacy login proof: `"00"` followed by the lowercase hex of
/// `MD5(0x00 || password || challenge)`.
///
/// # Errors
///
/// Returns an error if `challenge_hex` is not valid hex.
pub fn legacy_response(password: &str, challenge_hex: &str) -> Result<String, hex::FromHexError> {
    let challenge = hex::decode(challenge_hex)?;

    // Build MD5 hash of 0 + password + challenge
    let mut data = Vec::with_capacity(1 + password.len() + challenge.len());
    data.push(0u8);
    data.extend_from_slice(password.as_bytes());
    data.extend_from_slice(&challenge);
    let digest = md5_compute(&data);

    let mut response = String::from("00");
    response.push_str(&hex::encode(digest.0));
    Ok(response)
}

#[derive(Debug, PartialEq, Eq)]
enum LoginReply {
    Accepted,
    Challenge(String),
    Rejected(String),
}

fn classify(reply: &[Sentence]) -> LoginReply {
    let challenge = reply
        .iter()
        .flatten()
        .filter_map(|w| parse_attribute(w))
        .find_map(|(key, value)| (key == "ret").then(|| value.to_string()));
    if let Some(challenge) = challenge {
        return LoginReply::Challenge(challenge);
    }
    if starts_with_done(reply) {
        return LoginReply::Accepted;
    }
    let message = reply
        .iter()
        .flatten()
        .filter_map(|w| parse_attribute(w))
        .find_map(|(key, value)| (key == "message").then(|| value.to_string()))
        .unwrap_or_else(|| "login rejected".to_string());
    LoginReply::Rejected(message)
}

fn starts_with_done(reply: &[Sentence]) -> bool {
    reply
        .first()
        .and_then(|s| s.first())
        .is_some_and(|w| Marker::from_word(w) == Some(Marker::Done))
}

impl<S: Read + Write> Connection<S> {
    pub(crate) fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        tracing::trace!("Attempting login for user: {}", username);
        let reply = self.raw_command(&[
            "/login".to_string(),
            format!("=name={username}"),
            format!("=password={password}"),
        ])?;

        match classify(&reply) {
            LoginReply::Accepted => {
                tracing::debug!("Login successful (plain method)");
                Ok(())
            }
            LoginReply::Challenge(challenge_hex) => {
                tracing::debug!("Router issued a legacy login challenge");
                self.answer_challenge(username, password, &challenge_hex)
            }
            LoginReply::Rejected(message) => {
                tracing::debug!("Login rejected: {}", message);
                Err(ClientError::Auth(message))
            }
        }
    }

    /// Legacy challenge-response login (pre-6.43)
    fn answer_challenge(
        &mut self,
        username: &str,
        password: &str,
        challenge_hex: &str,
    ) -> Result<(), ClientError> {
        tracing::trace!("Challenge received, length: {}", challenge_hex.len());
        let response = legacy_response(password, challenge_hex)
            .map_err(|e| ClientError::Auth(format!("malformed login challenge: {e}")))?;

        let reply = self.raw_command(&[
            "/login".to_string(),
            format!("=name={username}"),
            format!("=response={response}"),
        ])?;

        if starts_with_done(&reply) {
            tracing::debug!("Login successful (legacy method)");
            return Ok(());
        }
        match classify(&reply) {
            LoginReply::Rejected(message) => Err(ClientError::Auth(message)),
            _ => Err(ClientError::Auth("legacy login rejected".to_string())),
        }
    }
}
