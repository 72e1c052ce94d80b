// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Hotspot Register
//!
//! Self-service hotspot account registration for MikroTik RouterOS devices.
//!
//! The crate carries its own RouterOS API client and exposes a small HTTP
//! service that turns a registration form into a hotspot user on the router.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `hotspot`: registration rules and hotspot account operations
//! - `metrics`: Prometheus registry
//! - `routeros`: RouterOS API client
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod hotspot;
mod metrics;
pub mod prelude;
pub mod routeros;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, HotspotConfig, RouterConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::{ApiResponse, RegisteredUser};
pub use api::{AppState, create_router};

/// Metrics registry and labels
pub use metrics::{MetricsRegistry, RegistrationLabels, RegistrationStatus};

/// RouterOS client entry point
pub use routeros::{ClientError, ClientOptions, Response, RouterOsClient};
