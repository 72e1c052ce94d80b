// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! `MikroTik` `RouterOS` API client module
//!
//! This module speaks the RouterOS binary API over a blocking TCP stream:
//! length-prefixed word framing, plain and legacy challenge-response login,
//! command sentences and reply parsing.

mod client;
mod connection;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod transport;
mod types;

// Re-export public types and functions
pub use client::RouterOsClient;
pub use connection::protocol::{
    MAX_WORD_LEN, decode_length, encode_length, length_prefix_width, read_full, read_word,
    write_word,
};
pub use connection::{legacy_response, parse_reply};
pub use error::{ClientError, ProtocolError, RemoteTrap};
pub use transport::{Connector, TcpConnector};
pub use types::{ClientOptions, Marker, Record, Response, Sentence};
