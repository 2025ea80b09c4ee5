//! Metrics collection.
//!
//! # Metrics
//! - `gateway_client_requests_total` (counter): calls by method, outcome
//! - `gateway_client_request_duration_seconds` (histogram): latency by method
//! - `gateway_client_notifications_total` (counter): failures announced to the sink
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the embedding application
//!   installs an exporter (no recorder means no-op)

use std::time::Instant;

/// How a call ended, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Envelope reported success.
    Success,
    /// Non-success envelope handed back on a personalized path.
    Passthrough,
    /// Failure returned without notification.
    Silent,
    /// Failure returned and announced.
    Failed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Passthrough => "passthrough",
            Outcome::Silent => "silent",
            Outcome::Failed => "failed",
        }
    }
}

pub fn record_request(method: &str, outcome: Outcome, start: Instant) {
    metrics::counter!(
        "gateway_client_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    metrics::histogram!(
        "gateway_client_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_notification() {
    metrics::counter!("gateway_client_notifications_total").increment(1);
}
