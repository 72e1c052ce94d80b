// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the RouterOS API client

use thiserror::Error;

use super::types::Record;

/// Malformed or incomplete data on the wire
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Leading length byte uses one of the reserved `0xF1..=0xFF` values
    #[error("invalid length prefix byte {0:#04x}")]
    InvalidLengthPrefix(u8),

    /// Stream ended in the middle of a word
    #[error("stream ended in the middle of a word")]
    Truncated,

    /// Stream ended cleanly between two words
    #[error("connection closed by router")]
    Closed,

    /// Word longer than the length prefix can describe
    #[error("word of {0} bytes exceeds the protocol limit")]
    WordTooLong(usize),
}

/// Errors returned by [`RouterOsClient`](super::RouterOsClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// Socket could not be established
    #[error("connection error: {0}")]
    Connect(#[source] std::io::Error),

    /// Router rejected both login variants
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Every connect attempt failed
    #[error("could not connect to router after {attempts} attempt(s)")]
    ConnectFailed { attempts: u32 },

    /// Read or write failure, including timeouts
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed frame
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Router sent `!fatal` and closed the connection
    #[error("router closed the session: {0}")]
    Fatal(String),

    /// Command issued without an open session
    #[error("not connected")]
    NotConnected,
}

/// A command that reached the router and was refused with `!trap`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("router trap: {message}")]
pub struct RemoteTrap {
    pub message: String,
    pub records: Vec<Record>,
}
