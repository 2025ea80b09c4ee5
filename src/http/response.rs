//! Response envelope parsing and classification.
//!
//! # Responsibilities
//! - Parse the backend's JSON envelope
//! - Decide whether a response resolves or fails
//! - Pick the human-readable failure message
//!
//! # Classification
//! ```text
//! 2xx + success == true                         → resolved
//! 2xx + success != true + personalized path     → resolved (caller inspects envelope)
//! 2xx + success != true                         → Rejected
//! 404 + users path                              → UserNotFound (silent)
//! other non-2xx                                 → Status
//! ```
//!
//! # Design Decisions
//! - Only JSON `true` counts as success; the legacy `status: "success"`
//!   convention is not recognized
//! - Message precedence: envelope `message`, envelope `error`, configured fallback

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Path segment of the endpoint family that returns raw envelopes.
pub const PERSONALIZED_SEGMENT: &str = "/personalized-recommendations/";
/// Path segment of the endpoint family whose 404s are not announced.
pub const USERS_SEGMENT: &str = "/users/";

/// The wrapper object every backend response carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Every other top-level key, left opaque.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    pub fn from_value(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            // Not an envelope at all; keep the body reachable as data.
            other => {
                return Self {
                    data: Some(other),
                    ..Self::default()
                }
            }
        };

        let success = matches!(map.remove("success"), Some(Value::Bool(true)));
        let message = take_string(&mut map, "message");
        let error = take_string(&mut map, "error");
        // Values that do not fit the typed fields stay in `payload`.
        let data = match map.remove("data") {
            Some(Value::Null) => {
                map.insert("data".to_string(), Value::Null);
                None
            }
            other => other,
        };
        let code = map
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u16::try_from(c).ok());
        if code.is_some() {
            map.remove("code");
        }
        let timestamp = take_string(&mut map, "timestamp");

        Self {
            success,
            message,
            error,
            data,
            code,
            timestamp,
            payload: map,
        }
    }

    /// The server's own explanation of a failure, if it gave one.
    pub fn failure_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }

    /// Look up a payload key outside the standard envelope fields.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Deserialize `data` into a typed value.
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone().unwrap_or(Value::Null))
    }

    /// Re-assemble the envelope as JSON.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<Value> for Envelope {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

pub fn is_personalized_path(path: &str) -> bool {
    path.contains(PERSONALIZED_SEGMENT)
}

pub fn is_users_path(path: &str) -> bool {
    path.contains(USERS_SEGMENT)
}

/// Classify a completed exchange.
///
/// `path` is the request path relative to the base URL; `fallback` is used
/// when the server gives no message.
pub fn classify(path: &str, status: StatusCode, body: &[u8], fallback: &str) -> ApiResult<Envelope> {
    let parsed = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<Value>(body).ok().map(Envelope::from_value)
    };

    if !status.is_success() {
        if status == StatusCode::NOT_FOUND && is_users_path(path) {
            return Err(ApiError::UserNotFound {
                path: path.to_string(),
                envelope: parsed,
            });
        }

        let message = parsed
            .as_ref()
            .and_then(|e| e.failure_message())
            .unwrap_or(fallback)
            .to_string();
        return Err(ApiError::Status {
            status,
            message,
            envelope: parsed,
        });
    }

    let envelope = match parsed {
        Some(envelope) => envelope,
        None => {
            return Err(ApiError::Decode(format!(
                "expected a JSON envelope from {} ({} bytes)",
                path,
                body.len()
            )))
        }
    };

    if envelope.success || is_personalized_path(path) {
        return Ok(envelope);
    }

    let message = envelope.failure_message().unwrap_or(fallback).to_string();
    Err(ApiError::Rejected { message, envelope })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "Request failed";

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_envelope_fields() {
        let envelope = Envelope::from_value(json!({
            "success": true,
            "data": {"id": 3},
            "message": "ok",
            "code": 200,
            "timestamp": "2024-01-01T00:00:00Z",
            "recommendations": []
        }));

        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert_eq!(envelope.code, Some(200));
        assert_eq!(envelope.get("recommendations"), Some(&json!([])));
        assert!(envelope.get("success").is_none());

        #[derive(Deserialize)]
        struct Item {
            id: u32,
        }
        assert_eq!(envelope.data_as::<Item>().unwrap().id, 3);
    }

    #[test]
    fn test_only_boolean_true_is_success() {
        assert!(!Envelope::from_value(json!({"success": "true"})).success);
        assert!(!Envelope::from_value(json!({"success": 1})).success);
        assert!(!Envelope::from_value(json!({"status": "success"})).success);
        assert!(!Envelope::from_value(json!([1, 2])).success);
    }

    #[test]
    fn test_failure_message_precedence() {
        let both = Envelope::from_value(json!({"message": "m", "error": "e"}));
        assert_eq!(both.failure_message(), Some("m"));

        let error_only = Envelope::from_value(json!({"message": "", "error": "e"}));
        assert_eq!(error_only.failure_message(), Some("e"));

        assert_eq!(Envelope::from_value(json!({})).failure_message(), None);
    }

    #[test]
    fn test_roundtrip_preserves_payload() {
        let original = json!({"success": false, "error": "x", "recommendations": [1]});
        let envelope: Envelope = serde_json::from_value(original).unwrap();
        let back = envelope.to_value();
        assert_eq!(back["success"], json!(false));
        assert_eq!(back["error"], json!("x"));
        assert_eq!(back["recommendations"], json!([1]));
        assert!(back.get("message").is_none());
    }

    #[test]
    fn test_untyped_values_survive_roundtrip() {
        let original = json!({
            "success": false,
            "code": "E100",
            "data": null,
            "message": "bad"
        });
        let envelope = Envelope::from_value(original.clone());

        assert_eq!(envelope.code, None);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.get("code"), Some(&json!("E100")));
        assert_eq!(envelope.to_value(), original);

        let big = Envelope::from_value(json!({"success": true, "code": 70000}));
        assert_eq!(big.code, None);
        assert_eq!(big.to_value()["code"], json!(70000));
    }

    #[test]
    fn test_classify_success() {
        let result = classify("/products", StatusCode::OK, &body(json!({"success": true})), FALLBACK);
        assert!(result.unwrap().success);
    }

    #[test]
    fn test_classify_rejected_envelope() {
        let err = classify(
            "/products",
            StatusCode::OK,
            &body(json!({"success": false, "message": "out of stock"})),
            FALLBACK,
        )
        .unwrap_err();

        match err {
            ApiError::Rejected { message, .. } => assert_eq!(message, "out of stock"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_rejected_uses_fallback() {
        let err = classify("/search", StatusCode::OK, &body(json!({"success": false})), FALLBACK)
            .unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);
    }

    #[test]
    fn test_classify_personalized_passthrough() {
        let envelope = classify(
            "/v2/personalized-recommendations/user/9",
            StatusCode::OK,
            &body(json!({"success": false, "error": "no profile", "recommendations": []})),
            FALLBACK,
        )
        .unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("no profile"));
    }

    #[test]
    fn test_classify_user_not_found() {
        let err = classify(
            "/v1/users/alice",
            StatusCode::NOT_FOUND,
            &body(json!({"success": false, "error": "no such user"})),
            FALLBACK,
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::UserNotFound { .. }));
        assert_eq!(err.envelope().and_then(|e| e.error.as_deref()), Some("no such user"));
    }

    #[test]
    fn test_classify_not_found_elsewhere() {
        let err = classify(
            "/products/99",
            StatusCode::NOT_FOUND,
            &body(json!({"success": false, "message": "missing product"})),
            FALLBACK,
        )
        .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "missing product");

        let err = classify("/products/99", StatusCode::NOT_FOUND, b"<html>", FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);
    }

    #[test]
    fn test_user_interactions_is_not_users_path() {
        assert!(!is_users_path("/v1/user-interactions/user/4"));
        let err = classify("/v1/user-interactions/user/4", StatusCode::NOT_FOUND, b"", FALLBACK)
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn test_classify_undecodable_success() {
        let err = classify("/health", StatusCode::OK, b"not json", FALLBACK).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
