//! # Configuration Management
//!
//! Environment-driven configuration for the Latchkey service. Every setting has
//! a default, so an empty environment yields a runnable server.

use std::net::SocketAddr;

use crate::Result;

pub const ENV_API_BIND_ADDRESS: &str = "LATCHKEY_API_BIND_ADDRESS";
pub const ENV_API_PORT: &str = "LATCHKEY_API_PORT";
pub const ENV_LOG_LEVEL: &str = "LATCHKEY_LOG_LEVEL";
pub const ENV_JSON_LOGGING: &str = "LATCHKEY_JSON_LOGGING";
pub const ENV_SERVICE_NAME: &str = "LATCHKEY_SERVICE_NAME";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiServerConfig,
    pub observability: ObservabilityConfig,
}

/// HTTP API listener configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl ApiServerConfig {
    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| crate::Error::config(format!("Invalid API address: {}", e)))
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json_logging: bool,

    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logging: false,
            service_name: crate::APP_NAME.to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let json_logging = match std::env::var(ENV_JSON_LOGGING) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                crate::Error::config(format!("Invalid {}: '{}'", ENV_JSON_LOGGING, raw))
            })?,
            Err(_) => defaults.json_logging,
        };

        Ok(Self {
            log_level: std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            json_logging,
            service_name: std::env::var(ENV_SERVICE_NAME).unwrap_or(defaults.service_name),
        })
    }
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = std::env::var(ENV_API_PORT)
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| crate::Error::config(format!("Invalid API port: {}", e)))?;

        let bind_address =
            std::env::var(ENV_API_BIND_ADDRESS).unwrap_or_else(|_| "0.0.0.0".to_string());

        let api = ApiServerConfig { bind_address, port };
        api.socket_addr()?;

        Ok(Self { api, observability: ObservabilityConfig::from_env()? })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
