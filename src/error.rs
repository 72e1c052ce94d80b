// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the hotspot registration service

use thiserror::Error;

use crate::hotspot::HotspotError;
use crate::routeros::ClientError;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// RouterOS session error
    #[error("RouterOS error: {0}")]
    RouterOs(#[from] ClientError),

    /// Hotspot operation error
    #[error("Hotspot error: {0}")]
    Hotspot(#[from] HotspotError),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Blocking router worker panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(String),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
