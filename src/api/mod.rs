// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the hotspot registration service
//!
//! # Endpoints
//! - `GET /health`: health check
//! - `GET /metrics`: Prometheus metrics
//! - `POST /register`: create a hotspot account from a form submission

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route(
            "/register",
            post(handlers::register_handler).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
