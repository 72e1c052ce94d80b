// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use hotspot_register::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, HotspotConfig, RouterConfig};
pub use crate::error::{AppError, Result};

// Metrics types
pub use crate::metrics::{MetricsRegistry, RegistrationStatus};

// RouterOS client
pub use crate::routeros::{
    ClientError, ClientOptions, Connector, Record, RemoteTrap, Response, RouterOsClient,
    TcpConnector,
};

// Hotspot operations
pub use crate::hotspot::{
    HotspotUser, NewAccount, RegistrationForm, RegistrationOutcome, list_profiles, list_users,
    register_account,
};
