//! Errors returned by gateway calls.

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::endpoint::EndpointError;
use crate::http::response::Envelope;

/// Errors that can occur during a gateway call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed or the exchange broke off.
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the per-call ceiling.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
        envelope: Option<Envelope>,
    },

    /// Backend answered 2xx but the envelope did not report success.
    #[error("{message}")]
    Rejected { message: String, envelope: Envelope },

    /// 404 on a user lookup. Never announced; the caller may register the user.
    #[error("User not found at {path}")]
    UserNotFound {
        path: String,
        envelope: Option<Envelope>,
    },

    /// Response body was not a JSON envelope.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The request could not be built (bad path or parameters).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Base URL could not be resolved.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

/// Result type for gateway calls.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::UserNotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }

    /// Whether the failure is kept from the notification sink.
    pub fn is_silent(&self) -> bool {
        matches!(self, ApiError::UserNotFound { .. })
    }

    /// Server envelope attached to the failure, if any.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            ApiError::Status { envelope, .. } | ApiError::UserNotFound { envelope, .. } => {
                envelope.as_ref()
            }
            ApiError::Rejected { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = ApiError::Timeout(30);
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");

        let err = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream down".to_string(),
            envelope: None,
        };
        assert_eq!(err.to_string(), "upstream down");
    }

    #[test]
    fn test_status_helpers() {
        let not_found = ApiError::UserNotFound {
            path: "/v1/users/alice".to_string(),
            envelope: None,
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_conflict());

        let conflict = ApiError::Status {
            status: StatusCode::CONFLICT,
            message: "exists".to_string(),
            envelope: None,
        };
        assert!(conflict.is_conflict());

        assert_eq!(ApiError::Network("refused".into()).status(), None);
    }

    #[test]
    fn test_envelope_accessor() {
        let envelope = Envelope::from_value(json!({"success": false, "message": "nope"}));
        let err = ApiError::Rejected {
            message: "nope".to_string(),
            envelope,
        };
        assert_eq!(err.envelope().and_then(|e| e.message.as_deref()), Some("nope"));
        assert!(ApiError::Decode("eof".into()).envelope().is_none());
    }
}
