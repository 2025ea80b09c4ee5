//! Notification sink that writes to the log.

use crate::notify::{Notification, Notifier};

/// Emits every notification as an `error` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::error!(
            method = %notification.method,
            path = %notification.path,
            "{}",
            notification.message
        );
    }
}
