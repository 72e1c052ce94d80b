// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

use std::sync::Arc;
use std::time::Duration;

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::metrics::labels::{RegistrationLabels, RegistrationStatus};

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    registrations: Family<RegistrationLabels, Counter>,
    connect_failures: Counter,
    session_duration_milliseconds: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let registrations = Family::<RegistrationLabels, Counter>::default();
        registry.register(
            "hotspot_registrations",
            "Registration requests by outcome",
            registrations.clone(),
        );
        let connect_failures = Counter::default();
        registry.register(
            "routeros_connect_failures",
            "Failed connect-and-login attempts to the router, retries included",
            connect_failures.clone(),
        );
        let session_duration_milliseconds = Gauge::default();
        registry.register(
            "routeros_session_duration_milliseconds",
            "Duration of the most recent router session",
            session_duration_milliseconds.clone(),
        );

        // Every outcome is exported from the start so rates work before the first event
        for status in RegistrationStatus::ALL {
            let _ = registrations.get_or_create(&status.into());
        }

        Self {
            registry: Arc::new(Mutex::new(registry)),
            registrations,
            connect_failures,
            session_duration_milliseconds,
        }
    }

    pub async fn encode_metrics(&self) -> Result<String, AppError> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    pub fn record_registration(&self, status: RegistrationStatus) {
        self.registrations.get_or_create(&status.into()).inc();
    }

    /// Adds the failed connect-and-login attempts of one session
    pub fn record_connect_failures(&self, attempts: u32) {
        self.connect_failures.inc_by(u64::from(attempts));
    }

    pub fn record_session_duration(&self, duration: Duration) {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.session_duration_milliseconds.set(millis);
    }

    pub fn registration_count(&self, status: RegistrationStatus) -> u64 {
        self.registrations.get_or_create(&status.into()).get()
    }

    pub fn connect_failure_count(&self) -> u64 {
        self.connect_failures.get()
    }
}
