// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for the registration service
//!
//! Counts registration outcomes and router session health in Prometheus format.

mod labels;
mod registry;


/// Registration outcome labels
pub use labels::{RegistrationLabels, RegistrationStatus};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
