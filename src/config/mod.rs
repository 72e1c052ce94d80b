// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the hotspot registration service
//!
//! Loads and parses configuration from environment variables and JSON.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::routeros::ClientOptions;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const ROUTEROS_HOST: &str = "192.168.88.1";
    pub const ROUTEROS_PORT: u16 = 8728;
    pub const ROUTEROS_USERNAME: &str = "admin";
    pub const ROUTEROS_PASSWORD: &str = "";
    pub const TIMEOUT_SECONDS: u64 = 3;
    pub const ATTEMPTS: u32 = 2;
    pub const RETRY_DELAY_SECONDS: u64 = 1;
    pub const HOTSPOT_PROFILE: &str = "default";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const ROUTER_CONFIG: &str = "ROUTER_CONFIG";
    pub const ROUTEROS_HOST: &str = "ROUTEROS_HOST";
    pub const ROUTEROS_PORT: &str = "ROUTEROS_PORT";
    pub const ROUTEROS_USERNAME: &str = "ROUTEROS_USERNAME";
    pub const ROUTEROS_PASSWORD: &str = "ROUTEROS_PASSWORD";
    pub const ROUTEROS_TIMEOUT_SECONDS: &str = "ROUTEROS_TIMEOUT_SECONDS";
    pub const ROUTEROS_ATTEMPTS: &str = "ROUTEROS_ATTEMPTS";
    pub const ROUTEROS_RETRY_DELAY_SECONDS: &str = "ROUTEROS_RETRY_DELAY_SECONDS";
    pub const ROUTEROS_DEBUG: &str = "ROUTEROS_DEBUG";
    pub const HOTSPOT_PROFILE: &str = "HOTSPOT_PROFILE";
    pub const HOTSPOT_SERVER: &str = "HOTSPOT_SERVER";
}

/// Router the service manages
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RouterConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn default_port() -> u16 {
    defaults::ROUTEROS_PORT
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            host: defaults::ROUTEROS_HOST.to_string(),
            port: defaults::ROUTEROS_PORT,
            username: defaults::ROUTEROS_USERNAME.to_string(),
            password: defaults::ROUTEROS_PASSWORD.to_string(),
        }
    }
}

impl RouterConfig {
    /// Validates router configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Router host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err(format!("Invalid port 0 for router '{}'", self.host));
        }

        if self.username.trim().is_empty() {
            return Err(format!(
                "Username cannot be empty for router '{}'",
                self.host
            ));
        }

        Ok(())
    }

    /// `host:port` form used in logs
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Attributes given to every account created through the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotConfig {
    pub profile: String,
    /// Hotspot server the account is bound to; all servers when unset
    pub server: Option<String>,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            profile: defaults::HOTSPOT_PROFILE.to_string(),
            server: None,
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub router: RouterConfig,
    pub client: ClientOptions,
    pub hotspot: HotspotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            router: RouterConfig::default(),
            client: ClientOptions::default(),
            hotspot: HotspotConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let router = router_from_lookup(&lookup);
        if let Err(e) = router.validate() {
            tracing::error!("Invalid router configuration: {}", e);
        }

        let timeout_secs = parse_var(
            &lookup,
            env_vars::ROUTEROS_TIMEOUT_SECONDS,
            defaults::TIMEOUT_SECONDS,
        );
        let timeout_secs = if timeout_secs == 0 {
            tracing::warn!(
                "{} must be positive, using {}",
                env_vars::ROUTEROS_TIMEOUT_SECONDS,
                defaults::TIMEOUT_SECONDS
            );
            defaults::TIMEOUT_SECONDS
        } else {
            timeout_secs
        };

        let client = ClientOptions {
            debug: lookup(env_vars::ROUTEROS_DEBUG).is_some_and(|v| parse_flag(&v)),
            timeout: Duration::from_secs(timeout_secs),
            attempts: parse_var(&lookup, env_vars::ROUTEROS_ATTEMPTS, defaults::ATTEMPTS).max(1),
            retry_delay: Duration::from_secs(parse_var(
                &lookup,
                env_vars::ROUTEROS_RETRY_DELAY_SECONDS,
                defaults::RETRY_DELAY_SECONDS,
            )),
        };

        let hotspot = HotspotConfig {
            profile: lookup(env_vars::HOTSPOT_PROFILE)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| defaults::HOTSPOT_PROFILE.to_string()),
            server: lookup(env_vars::HOTSPOT_SERVER).filter(|v| !v.trim().is_empty()),
        };

        Config {
            server_addr,
            router,
            client,
            hotspot,
        }
    }
}

fn router_from_lookup<F>(lookup: &F) -> RouterConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(config_json) = lookup(env_vars::ROUTER_CONFIG) {
        match serde_json::from_str(&config_json) {
            Ok(router) => return router,
            Err(e) => {
                tracing::warn!(
                    "Failed to parse ROUTER_CONFIG: {}. Falling back to ROUTEROS_* variables.",
                    e
                );
            }
        }
    }

    RouterConfig {
        host: lookup(env_vars::ROUTEROS_HOST)
            .unwrap_or_else(|| defaults::ROUTEROS_HOST.to_string()),
        port: parse_var(lookup, env_vars::ROUTEROS_PORT, defaults::ROUTEROS_PORT),
        username: lookup(env_vars::ROUTEROS_USERNAME)
            .unwrap_or_else(|| defaults::ROUTEROS_USERNAME.to_string()),
        password: lookup(env_vars::ROUTEROS_PASSWORD)
            .unwrap_or_else(|| defaults::ROUTEROS_PASSWORD.to_string()),
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value '{}' for {}, using {}", raw, key, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
