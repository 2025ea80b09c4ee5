//! Failure notification sinks.
//!
//! # Responsibilities
//! - Define the `Notifier` seam the client reports unhandled failures to
//! - Provide a log-backed sink and a broadcast sink for UI surfaces
//!
//! # Design Decisions
//! - The sink is injected into the client; there is no process-wide global
//! - Notifying is synchronous and must not fail the call that triggered it
//! - Any `Fn(Notification)` closure is a sink

pub mod channel;
pub mod log;

pub use channel::BroadcastNotifier;
pub use log::LogNotifier;

use serde::Serialize;

/// A user-facing failure announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// HTTP method of the failed call.
    pub method: String,
    /// Request path relative to the API base URL.
    pub path: String,
    /// Human-readable message.
    pub message: String,
}

/// Receiver of unhandled failure announcements.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
