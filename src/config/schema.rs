//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend endpoint resolution.
    pub endpoint: EndpointConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// User-facing failure messages.
    pub messages: MessageConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Endpoint configuration.
///
/// The base URL is derived from `origin` unless `base_url` is set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Origin the client is calling from (e.g., "https://shop.example.com").
    pub origin: String,

    /// Explicit base URL, bypassing origin resolution.
    pub base_url: Option<String>,

    /// Host used when the origin is a loopback name.
    pub loopback_host: String,

    /// Backend port for loopback origins.
    pub local_port: u16,

    /// Backend port for every other origin.
    pub remote_port: u16,

    /// Path prefix of the API (e.g., "/api").
    pub base_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost".to_string(),
            base_url: None,
            loopback_host: "localhost".to_string(),
            local_port: 5004,
            remote_port: 5004,
            base_path: "/api".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Ceiling for a whole request/response exchange in seconds.
    pub request_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            connect_secs: 5,
        }
    }
}

/// Messages shown through the notification sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Used when the server provides neither `message` nor `error`.
    pub fallback: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            fallback: "Request failed".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the pretty format.
    pub json_logs: bool,

    /// Record request metrics through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
        }
    }
}
