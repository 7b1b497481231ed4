//! HTTP client for the NewNanManager REST API.
//!
//! This module provides the [`Requester`] trait every service goes through,
//! and [`HttpRequester`], its `reqwest` implementation.

use log::{debug, info};
use mockall::automock;
use reqwest::{
    Client, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;

use crate::{
    config::ClientConfig,
    error::{ApiError, Result},
    http::{
        envelope::parse_response,
        request::{API_PREFIX, ApiRequest},
    },
};

/// Header duplicating the bearer token, expected by older server routes.
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Trait for sending requests to the NewNanManager server.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Sends the request and returns the envelope `data`
    /// (`Value::Null` when the server sent none).
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// HTTP client sending [`ApiRequest`]s to the NewNanManager server.
///
/// Authentication headers, timeouts and the user agent are fixed at
/// construction from the [`ClientConfig`].
///
/// # Examples
///
/// ```no_run
/// use newnan_manager::ClientConfig;
/// use newnan_manager::http::{ApiRequest, HttpRequester, Requester};
///
/// # async fn example() -> newnan_manager::Result<()> {
/// let config = ClientConfig::new("https://manager.newnan.city").with_token("secret");
/// let requester = HttpRequester::new(&config)?;
/// let data = requester.execute(ApiRequest::get(["monitor", "health"])).await?;
/// println!("health: {}", data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequester {
    /// Service base URL
    base_url: Url,
    /// Request timeout, reported in timeout errors
    timeout_secs: u64,
    /// Connect timeout, reported when the connection could not be opened in time
    connect_timeout_secs: u64,
    /// HTTP client
    client: Client,
}

impl HttpRequester {
    /// Create a new [HttpRequester].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is invalid or the
    /// underlying client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .default_headers(Self::default_headers(config.token.as_deref())?)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ApiError::Config(format!("unable to build http client: {}", e)))?;

        Ok(HttpRequester {
            base_url: config.parsed_base_url()?,
            timeout_secs: config.timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
            client,
        })
    }

    fn default_headers(token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(mime::APPLICATION_JSON.as_ref())
            .map_err(|e| ApiError::Config(e.to_string()))?;
        headers.insert(ACCEPT, accept);

        let Some(token) = token else {
            return Ok(headers);
        };

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::Config(format!("invalid token: {}", e)))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let mut api_token = HeaderValue::from_str(token)
            .map_err(|e| ApiError::Config(format!("invalid token: {}", e)))?;
        api_token.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_TOKEN_HEADER), api_token);

        Ok(headers)
    }

    /// Full URL of a request: base URL, `/api/v1`, then the encoded segments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL cannot carry a path.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(&request.segments);

        Ok(url)
    }

    /// Map a reqwest failure that happened before a status was read.
    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.elapsed_timeout_secs(err.is_connect()))
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// The timeout that fired: the connect one while connecting, the
    /// whole-request one otherwise.
    fn elapsed_timeout_secs(&self, while_connecting: bool) -> u64 {
        if while_connecting {
            self.connect_timeout_secs
        } else {
            self.timeout_secs
        }
    }
}

impl Requester for HttpRequester {
    /// Send the request and parse the response envelope.
    ///
    /// Query parameters are url-encoded, the body is sent as JSON. The
    /// status and raw body are handed to
    /// [`parse_response`](crate::http::parse_response) for error translation.
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request)?;
        info!("request {}", request);
        debug!("request {} {} query={:?}", request.method, url, request.query);

        let mut builder = self.client.request(request.method.clone(), url.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            debug!("request body {}", body);
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        debug!("{}", describe_response(&url, status, &text));

        parse_response(status, &text)
    }
}

/// Log line of a response. The body is left out, since some responses
/// carry secrets such as a newly created API token.
fn describe_response(url: &Url, status: u16, body: &str) -> String {
    format!("response from {} -> {} ({} bytes)", url, status, body.len())
}
