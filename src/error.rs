//! Error types returned by the NewNanManager client.
//!
//! Every failure a request can run into is folded into [`ApiError`]: the
//! HTTP layer translates status codes and error bodies, the transport
//! layer translates reqwest failures, and services surface decoding issues.

use thiserror::Error;

/// Result type using [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the NewNanManager API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration (base URL, token, timeouts).
    #[error("configuration error: {0}")]
    Config(String),

    /// The server rejected the credentials (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication {
        message: String,
        request_id: Option<String>,
    },

    /// The server refused the request with a readable error body.
    ///
    /// Raised for 4xx responses carrying an envelope or a `{detail}` body,
    /// and for 2xx envelopes whose `code` is not a success code.
    #[error("api error [{status}/{code}]: {message}")]
    Business {
        status: u16,
        code: i64,
        message: String,
        detail: Option<String>,
        request_id: Option<String>,
    },

    /// Server failure (5xx) or a 4xx response without a readable body.
    #[error("http error [{status}]: {body}")]
    Http { status: u16, body: String },

    /// The request never got a response (DNS, connection refused, TLS...).
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A response or request payload could not be (de)serialized.
    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status attached to the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { .. } => Some(401),
            ApiError::Business { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-side request id, useful when reporting issues to operators.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ApiError::Authentication { request_id, .. } | ApiError::Business { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }

    /// Whether the server answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the error comes from rejected credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Authentication { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_each_variant() {
        let auth = ApiError::Authentication {
            message: "bad token".to_string(),
            request_id: None,
        };
        assert_eq!(auth.status(), Some(401));
        assert!(auth.is_auth());

        let business = ApiError::Business {
            status: 404,
            code: 40401,
            message: "player not found".to_string(),
            detail: None,
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(business.status(), Some(404));
        assert!(business.is_not_found());
        assert!(!business.is_auth());

        let http = ApiError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(http.status(), Some(502));

        assert_eq!(ApiError::Network("refused".to_string()).status(), None);
        assert_eq!(ApiError::Timeout(30).status(), None);
    }

    #[test]
    fn test_request_id() {
        let business = ApiError::Business {
            status: 400,
            code: 400,
            message: "invalid".to_string(),
            detail: None,
            request_id: Some("abc".to_string()),
        };
        assert_eq!(business.request_id(), Some("abc"));
        assert_eq!(ApiError::Timeout(5).request_id(), None);
    }

    #[test]
    fn test_display() {
        let business = ApiError::Business {
            status: 409,
            code: 40901,
            message: "player already exists".to_string(),
            detail: None,
            request_id: None,
        };
        assert_eq!(
            business.to_string(),
            "api error [409/40901]: player already exists"
        );
        assert_eq!(
            ApiError::Timeout(30).to_string(),
            "request timed out after 30s"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let api_error: ApiError = err.into();
        assert!(matches!(api_error, ApiError::Decode(_)));
    }
}
