//! Transport-independent description of an API call.

use std::fmt;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Path segments every endpoint lives under.
pub const API_PREFIX: [&str; 2] = ["api", "v1"];

/// One REST call: verb, path segments under `/api/v1`, query and JSON body.
///
/// Segments are kept unencoded; the requester percent-encodes them when
/// joining them onto the base URL, so player names and IPv6 addresses can
/// be passed as-is.
///
/// # Examples
///
/// ```
/// use newnan_manager::http::ApiRequest;
///
/// let request = ApiRequest::get(["players", "42"]).query("page", 2);
/// assert_eq!(request.path(), "/api/v1/players/42");
/// assert_eq!(request.query, vec![("page".to_string(), "2".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path segments after the `/api/v1` prefix.
    pub segments: Vec<String>,
    /// Query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query or body.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        ApiRequest {
            method,
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I: IntoIterator<Item = S>, S: ToString>(segments: I) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post<I: IntoIterator<Item = S>, S: ToString>(segments: I) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put<I: IntoIterator<Item = S>, S: ToString>(segments: I) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I: IntoIterator<Item = S>, S: ToString>(segments: I) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Append one path segment, typically a resource id.
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn optional_query<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Decode`] if the payload cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Rendered path, including the `/api/v1` prefix, without encoding.
    pub fn path(&self) -> String {
        API_PREFIX
            .iter()
            .map(|s| s.to_string())
            .chain(self.segments.iter().cloned())
            .fold(String::new(), |path, segment| path + "/" + &segment)
    }

    /// Look up the first value of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}
