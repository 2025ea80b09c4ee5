//! Shared HTTP transport.
//!
//! # Responsibilities
//! - Own the single `reqwest::Client` (connection pool) for every call
//! - Attach the fixed content-type and cache-suppression headers
//! - Enforce the per-call timeout ceiling
//! - Map transport failures to `ApiError`
//!
//! # Design Decisions
//! - No retries: one attempt per call, failures surface immediately
//! - Non-2xx responses are not errors here; classification happens upstream

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::TimeoutConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::request::RequestDescriptor;

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Encoded path as sent, relative to the base URL.
    pub path: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Transport shared by all call groups.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl Transport {
    pub fn new(base_url: Url, timeouts: &TimeoutConfig) -> ApiResult<Self> {
        let request_timeout = Duration::from_secs(timeouts.request_secs);
        let connect_timeout = Duration::from_secs(timeouts.connect_secs);
        let client = Client::builder()
            .default_headers(default_headers())
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            request_timeout,
            connect_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of a request, with path segments percent-encoded.
    pub fn url_for(&self, req: &RequestDescriptor) -> ApiResult<Url> {
        req.check_segments()?;
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidRequest(format!("base URL {} cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in &req.segments {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Path of `url` below the base URL, still percent-encoded.
    pub fn relative_path(&self, url: &Url) -> String {
        let base = self.base_url.path().trim_end_matches('/');
        match url.path().strip_prefix(base) {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => url.path().to_string(),
        }
    }

    /// Send one request and read the whole body.
    pub async fn execute(&self, req: &RequestDescriptor) -> ApiResult<RawResponse> {
        let url = self.url_for(req)?;
        let path = self.relative_path(&url);

        let mut builder = self.client.request(req.method.clone(), url);
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(RawResponse {
            path,
            status,
            body: body.to_vec(),
        })
    }

    fn map_error(&self, e: reqwest::Error) -> ApiError {
        self.failure(e.is_timeout(), e.is_connect(), e.to_string())
    }

    // A connect timeout also reports `is_timeout`; it is bounded by the
    // connect ceiling, not the request ceiling.
    fn failure(&self, timed_out: bool, connecting: bool, detail: String) -> ApiError {
        match (timed_out, connecting) {
            (true, true) => ApiError::Network(format!(
                "connect timed out after {} seconds",
                self.connect_timeout.as_secs()
            )),
            (true, false) => ApiError::Timeout(self.request_timeout.as_secs()),
            _ => ApiError::Network(detail),
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_secs", &self.request_timeout.as_secs())
            .field("connect_timeout_secs", &self.connect_timeout.as_secs())
            .finish()
    }
}

/// Headers attached to every request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}
