// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for RouterOS API exchanges

use std::collections::HashMap;
use std::time::Duration;

use super::error::RemoteTrap;

/// Attribute map assembled from one reply sentence
pub type Record = HashMap<String, String>;

/// Words of one sentence, without the zero-length terminator
pub type Sentence = Vec<String>;

/// Control word opening a reply sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Done,
    Re,
    Trap,
    Fatal,
}

impl Marker {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "!done" => Some(Self::Done),
            "!re" => Some(Self::Re),
            "!trap" => Some(Self::Trap),
            "!fatal" => Some(Self::Fatal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "!done",
            Self::Re => "!re",
            Self::Trap => "!trap",
            Self::Fatal => "!fatal",
        }
    }
}

/// Result of one command invocation
///
/// A reply that contained any `!trap` sentence is reported as [`Response::Trap`]
/// carrying every record of the exchange; otherwise it is [`Response::Done`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Done(Vec<Record>),
    Trap(Vec<Record>),
}

impl Response {
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Done(records) | Self::Trap(records) => records,
        }
    }

    pub fn is_trap(&self) -> bool {
        matches!(self, Self::Trap(_))
    }

    /// Human-readable reason of a trap, when the router supplied one
    pub fn trap_message(&self) -> Option<&str> {
        match self {
            Self::Trap(records) => records
                .iter()
                .find_map(|r| r.get("message"))
                .map(String::as_str),
            Self::Done(_) => None,
        }
    }

    /// Converts a trap into an error so it can be propagated with `?`
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTrap`] when the router answered with `!trap`.
    pub fn into_result(self) -> Result<Vec<Record>, RemoteTrap> {
        match self {
            Self::Done(records) => Ok(records),
            Self::Trap(records) => Err(RemoteTrap {
                message: records
                    .iter()
                    .find_map(|r| r.get("message").cloned())
                    .unwrap_or_else(|| "Unknown error".to_string()),
                records,
            }),
        }
    }
}

/// Connection settings applied by [`RouterOsClient`](super::RouterOsClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Echo every raw word sent and received at debug level
    pub debug: bool,
    /// Socket connect, read and write timeout
    pub timeout: Duration,
    /// Connect-and-login attempts before giving up
    pub attempts: u32,
    /// Pause between failed attempts
    pub retry_delay: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            debug: false,
            timeout: Duration::from_secs(3),
            attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}
