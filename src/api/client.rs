//! Gateway client.
//!
//! # Responsibilities
//! - Resolve the base URL and build the shared transport once
//! - Hand out the grouped call APIs
//! - Run every call through classification, logging, metrics and notification
//!
//! # Design Decisions
//! - Cheap to clone; clones share the connection pool and notifier
//! - Each failed call notifies at most once, and never for silent failures

use std::sync::Arc;
use std::time::Instant;

use url::Url;

use crate::api::{InteractionsApi, ProductsApi, RecommendationsApi, SystemApi, UsersApi};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::http::endpoint::resolve_base_url;
use crate::http::request::RequestDescriptor;
use crate::http::response::{classify, Envelope};
use crate::http::transport::Transport;
use crate::notify::{Notification, Notifier};
use crate::observability::metrics::{self, Outcome};

/// Client for the product search and recommendation backend.
#[derive(Clone)]
pub struct GatewayClient {
    transport: Transport,
    notifier: Arc<dyn Notifier>,
    fallback_message: Arc<str>,
    metrics_enabled: bool,
}

impl GatewayClient {
    /// Create a client from configuration, reporting failures to `notifier`.
    pub fn new(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> ApiResult<Self> {
        let base_url = resolve_base_url(&config.endpoint)?;
        let transport = Transport::new(base_url, &config.timeouts)?;

        tracing::info!(
            base_url = %transport.base_url(),
            timeout_secs = config.timeouts.request_secs,
            "Gateway client initialized"
        );

        Ok(Self {
            transport,
            notifier,
            fallback_message: Arc::from(config.messages.fallback.as_str()),
            metrics_enabled: config.observability.metrics_enabled,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn recommendations(&self) -> RecommendationsApi<'_> {
        RecommendationsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn interactions(&self) -> InteractionsApi<'_> {
        InteractionsApi::new(self)
    }

    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Execute a request and classify its response.
    pub async fn send(&self, req: RequestDescriptor) -> ApiResult<Envelope> {
        let start = Instant::now();
        let method = req.method.to_string();

        tracing::debug!(method = %method, path = %req.path(), "Sending request");

        // Carve-outs match the encoded path as sent, not the raw segments.
        let (path, result) = match self.transport.execute(&req).await {
            Ok(raw) => {
                let result = classify(&raw.path, raw.status, &raw.body, &self.fallback_message);
                (raw.path, result)
            }
            Err(e) => (req.path(), Err(e)),
        };

        let outcome = match &result {
            Ok(envelope) if envelope.success => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Request succeeded"
                );
                Outcome::Success
            }
            Ok(envelope) => {
                tracing::info!(
                    method = %method,
                    path = %path,
                    reason = envelope.failure_message().unwrap_or_default(),
                    "Returning non-success envelope to caller"
                );
                Outcome::Passthrough
            }
            Err(e) if e.is_silent() => {
                tracing::info!(method = %method, path = %path, error = %e, "Request failed silently");
                Outcome::Silent
            }
            Err(e) => {
                tracing::warn!(
                    method = %method,
                    path = %path,
                    status = ?e.status().map(|s| s.as_u16()),
                    error = %e,
                    "Request failed"
                );
                self.notifier.notify(Notification {
                    method: method.clone(),
                    path: path.clone(),
                    message: e.to_string(),
                });
                if self.metrics_enabled {
                    metrics::record_notification();
                }
                Outcome::Failed
            }
        };

        if self.metrics_enabled {
            metrics::record_request(&method, outcome, start);
        }

        result
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("transport", &self.transport)
            .field("fallback_message", &self.fallback_message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::notify::BroadcastNotifier;

    #[test]
    fn test_new_resolves_base_url() {
        let mut config = ClientConfig::default();
        config.endpoint.origin = "https://shop.example.com".to_string();
        let client = GatewayClient::new(&config, Arc::new(BroadcastNotifier::default())).unwrap();
        assert_eq!(client.base_url().as_str(), "https://shop.example.com:5004/api");
    }

    #[test]
    fn test_new_rejects_bad_origin() {
        let mut config = ClientConfig::default();
        config.endpoint.origin = "nowhere".to_string();
        let err = GatewayClient::new(&config, Arc::new(BroadcastNotifier::default())).unwrap_err();
        assert!(matches!(err, ApiError::Endpoint(_)));
    }

    #[tokio::test]
    async fn test_network_failure_notifies_once() {
        let mut config = ClientConfig::default();
        config.endpoint.base_url = Some("http://127.0.0.1:9/api".to_string());
        let notifier = BroadcastNotifier::new(8);
        let mut rx = notifier.subscribe();
        let client = GatewayClient::new(&config, Arc::new(notifier)).unwrap();

        let err = client.system().health().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.path, "/health");
        assert_eq!(notification.method, "GET");
        assert!(notification.message.starts_with("Network error"));
        assert!(rx.try_recv().is_err());
    }
}
