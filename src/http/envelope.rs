//! Response envelope and error body parsing.
//!
//! The server wraps every payload as
//! `{ "code": 0, "message": "ok", "data": ..., "request_id": "..." }`.
//! Error responses reuse the envelope, except for framework-level errors
//! which only carry `{ "detail": ... }`.
//!
//! Parsing is kept free of any transport so that every status/body
//! combination can be tested directly.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Success envelope returned by every endpoint.
#[derive(Deserialize, Debug)]
pub struct Envelope<T = Value> {
    /// Business code, 0 or 2xx on success.
    pub code: i64,
    /// Human readable status message.
    #[serde(default)]
    pub message: String,
    /// Payload, `null` for endpoints without a result.
    #[serde(default)]
    pub data: Option<T>,
    /// Server-side request id.
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Any error body the server may send: an envelope, a `{detail}` object,
/// or a mix of both.
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    request_id: Option<String>,
}

impl ErrorBody {
    /// A body is readable only if it explains something.
    fn parse(body: &str) -> Option<ErrorBody> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        if parsed.message.is_none() && parsed.detail.is_none() {
            return None;
        }
        Some(parsed)
    }

    fn detail_text(&self) -> Option<String> {
        self.detail.as_ref().map(|detail| match detail {
            Value::String(text) => text.to_owned(),
            // Validation errors come as a list of objects
            other => other.to_string(),
        })
    }

    fn message_text(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| self.detail_text())
    }
}

/// Whether an envelope `code` means success.
pub fn is_success_code(code: i64) -> bool {
    code == 0 || (200..300).contains(&code)
}

/// Turn an HTTP status and raw body into the envelope payload or a typed error.
///
/// | status | body | result |
/// |---|---|---|
/// | 2xx | empty | `Ok(Value::Null)` |
/// | 2xx | envelope, success code | `Ok(data)` |
/// | 2xx | envelope, other code | [`ApiError::Business`] |
/// | 2xx | anything else | [`ApiError::Decode`] |
/// | 401 | any | [`ApiError::Authentication`] |
/// | 4xx | envelope or `{detail}` | [`ApiError::Business`] |
/// | 4xx | unreadable | [`ApiError::Http`] |
/// | other | any | [`ApiError::Http`] |
pub fn parse_response(status: u16, body: &str) -> Result<Value> {
    match status {
        200..=299 => parse_success(status, body),
        401 => {
            let error_body = ErrorBody::parse(body).unwrap_or_default();
            Err(ApiError::Authentication {
                message: error_body
                    .message_text()
                    .unwrap_or_else(|| "unauthorized".to_string()),
                request_id: error_body.request_id,
            })
        }
        400..=499 => match ErrorBody::parse(body) {
            Some(error_body) => Err(ApiError::Business {
                status,
                code: error_body.code.unwrap_or(i64::from(status)),
                message: error_body.message_text().unwrap_or_default(),
                detail: error_body.detail_text(),
                request_id: error_body.request_id,
            }),
            None => Err(ApiError::Http {
                status,
                body: body.to_string(),
            }),
        },
        _ => Err(ApiError::Http {
            status,
            body: body.to_string(),
        }),
    }
}

fn parse_success(status: u16, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| ApiError::Decode(format!("invalid response envelope: {}", e)))?;

    if !is_success_code(envelope.code) {
        return Err(ApiError::Business {
            status,
            code: envelope.code,
            message: envelope.message,
            detail: None,
            request_id: envelope.request_id,
        });
    }

    Ok(envelope.data.unwrap_or(Value::Null))
}
