//! Unified SDK error types.

use serde_json::Value;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The bare message shown on the status line (no layer prefix).
    pub fn message(&self) -> String {
        match self {
            Self::Http(e) => e.to_string(),
            Self::Validation(msg) | Self::Other(msg) => msg.clone(),
            Self::Serde(e) => e.to_string(),
        }
    }

    /// The server-side error, when the failure came from a non-2xx response.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(HttpError::Api(e)) => Some(e),
            _ => None,
        }
    }
}

/// Request pipeline errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The API base URL is not configured. Fatal, never retried.
    #[error("{0}")]
    Config(String),

    /// The request never produced an HTTP response (unreachable, timeout,
    /// malformed response).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        tracing::debug!(error = %e, "transport failure");
        #[cfg(not(target_arch = "wasm32"))]
        if e.is_timeout() {
            return HttpError::Transport("Request timed out".to_string());
        }
        match e.status() {
            Some(status) => HttpError::Transport(format!("HTTP {}", status.as_u16())),
            None => HttpError::Transport("Network request failed".to_string()),
        }
    }
}

/// Token storage errors. These never escape [`crate::session::SessionStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage access denied: {0}")]
    Denied(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage contents unreadable: {0}")]
    Corrupt(String),
}

/// A non-2xx response, normalized.
///
/// `message` comes from the payload's `error` or `message` field when the body
/// parsed as JSON and carried one, otherwise it is `"HTTP <status>"`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub http_status: u16,
    pub payload: Option<Value>,
}

impl ApiError {
    pub fn new(http_status: u16, payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(|p| {
                ["error", "message"].iter().find_map(|field| {
                    p.get(field)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| format!("HTTP {}", http_status));
        Self {
            message,
            http_status,
            payload,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.http_status == 401
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_prefers_error_field() {
        let err = ApiError::new(400, Some(json!({"error": "bad password", "message": "x"})));
        assert_eq!(err.message, "bad password");
        assert_eq!(err.http_status, 400);
    }

    #[test]
    fn test_api_error_falls_back_to_message_field() {
        let err = ApiError::new(409, Some(json!({"message": "Not enough coins"})));
        assert_eq!(err.message, "Not enough coins");
    }

    #[test]
    fn test_api_error_without_payload_uses_status() {
        let err = ApiError::new(502, None);
        assert_eq!(err.message, "HTTP 502");
        assert!(err.payload.is_none());
    }

    #[test]
    fn test_api_error_ignores_non_string_reason() {
        let err = ApiError::new(500, Some(json!({"error": {"code": 7}})));
        assert_eq!(err.message, "HTTP 500");
    }

    #[test]
    fn test_sdk_error_message_has_no_prefix() {
        let err: SdkError = HttpError::Api(ApiError::new(401, None)).into();
        assert_eq!(err.message(), "HTTP 401");
        assert!(err.api_error().unwrap().is_unauthorized());

        let err = SdkError::Validation("Enter username and password.".into());
        assert_eq!(err.message(), "Enter username and password.");
    }
}
