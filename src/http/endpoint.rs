//! Base endpoint resolution.
//!
//! The backend address depends on where the client runs: loopback origins talk
//! to a fixed local port, any other origin reuses its own host (and scheme)
//! with the fixed remote port.
//!
//! ```text
//! http://localhost:3000        → http://localhost:5004/api
//! http://127.0.0.1             → http://localhost:5004/api
//! https://shop.example.com     → https://shop.example.com:5004/api
//! ```

use thiserror::Error;
use url::Url;

use crate::config::EndpointConfig;

/// Host names treated as "running on this machine".
pub const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Errors that can occur while resolving the base URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Origin '{0}' has no host")]
    MissingHost(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub fn is_loopback(host: &str) -> bool {
    LOOPBACK_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host))
}

/// Resolve the API base URL for the configured origin.
pub fn resolve_base_url(config: &EndpointConfig) -> Result<Url, EndpointError> {
    if let Some(base_url) = &config.base_url {
        return parse_base(base_url);
    }

    let origin = Url::parse(&config.origin).map_err(|e| EndpointError::InvalidOrigin {
        origin: config.origin.clone(),
        reason: e.to_string(),
    })?;
    let host = origin
        .host_str()
        .ok_or_else(|| EndpointError::MissingHost(config.origin.clone()))?;

    let raw = if is_loopback(host) {
        format!(
            "http://{}:{}{}",
            config.loopback_host, config.local_port, config.base_path
        )
    } else {
        format!(
            "{}://{}:{}{}",
            origin.scheme(),
            host,
            config.remote_port,
            config.base_path
        )
    };

    let url = parse_base(&raw)?;
    tracing::debug!(origin = %config.origin, base_url = %url, "Resolved API base URL");
    Ok(url)
}

fn parse_base(raw: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(raw).map_err(|e| EndpointError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(EndpointError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}
