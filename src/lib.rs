//! Gateway client for the product search and recommendation backend.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod observability;

pub use api::GatewayClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::Envelope;
pub use notify::{Notification, Notifier};
