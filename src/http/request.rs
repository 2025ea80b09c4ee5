//! Request descriptors.
//!
//! # Responsibilities
//! - Describe one outbound call: method, path segments, query, JSON body
//! - Flatten typed parameter structs into query pairs
//! - Derive cache-busting fields for personalized recommendation calls
//!
//! # Design Decisions
//! - Paths are kept as segments so user-supplied values are percent-encoded
//!   by the transport instead of being spliced into a URL string
//! - `path()` renders the unencoded form for logs; classification uses the
//!   encoded path the transport actually sent
//! - Empty segments are rejected rather than collapsed into a different route

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Query key carrying the millisecond timestamp.
pub const CACHE_BUST_TIMESTAMP: &str = "_t";
/// Query key carrying the random request id.
pub const CACHE_BUST_REQUEST_ID: &str = "_r";

/// A single outbound call, relative to the API base URL.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    /// Path relative to the base URL, e.g. `/v1/users/alice`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Reject descriptors whose path would not survive URL encoding intact.
    pub fn check_segments(&self) -> ApiResult<()> {
        if self.segments.iter().any(|s| s.is_empty()) {
            return Err(ApiError::InvalidRequest(format!(
                "empty path segment in {}",
                self.path()
            )));
        }
        Ok(())
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append every non-null field of a serializable struct as query parameters.
    ///
    /// Arrays repeat the key once per element.
    pub fn params<T: Serialize>(mut self, params: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(params)
            .map_err(|e| ApiError::InvalidRequest(format!("unserializable parameters: {}", e)))?;

        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(self),
            other => {
                return Err(ApiError::InvalidRequest(format!(
                    "parameters must be an object, got {}",
                    other
                )))
            }
        };

        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_to_string(item) {
                            self.query.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_to_string(other) {
                        self.query.push((key, text));
                    }
                }
            }
        }
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("unserializable body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Attach the timestamp and random request id that defeat intermediate caches.
    pub fn cache_busted(self) -> Self {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        self.query(CACHE_BUST_TIMESTAMP, now_ms)
            .query(CACHE_BUST_REQUEST_ID, Uuid::new_v4().simple())
    }

    /// Look up the first value of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Nested structures have no query representation.
        Value::Array(_) | Value::Object(_) => None,
    }
}
