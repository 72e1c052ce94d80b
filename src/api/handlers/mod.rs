// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod register;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use register::{ApiResponse, RegisteredUser, method_not_allowed, register_handler};
