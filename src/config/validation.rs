//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports non-zero)
//! - Check that origin and base URL parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "endpoint.local_port").
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let endpoint = &config.endpoint;

    match &endpoint.base_url {
        Some(base_url) => {
            if let Err(e) = Url::parse(base_url) {
                errors.push(ValidationError::new("endpoint.base_url", e.to_string()));
            }
        }
        None => match Url::parse(&endpoint.origin) {
            Ok(origin) if origin.host_str().is_none() => {
                errors.push(ValidationError::new("endpoint.origin", "origin has no host"));
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::new("endpoint.origin", e.to_string())),
        },
    }

    if endpoint.local_port == 0 {
        errors.push(ValidationError::new("endpoint.local_port", "must be non-zero"));
    }
    if endpoint.remote_port == 0 {
        errors.push(ValidationError::new("endpoint.remote_port", "must be non-zero"));
    }
    if endpoint.loopback_host.trim().is_empty() {
        errors.push(ValidationError::new("endpoint.loopback_host", "must not be empty"));
    }
    if !endpoint.base_path.is_empty() && !endpoint.base_path.starts_with('/') {
        errors.push(ValidationError::new("endpoint.base_path", "must start with '/'"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::new("timeouts.connect_secs", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
