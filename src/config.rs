//! Client configuration for the NewNanManager API.
//!
//! The configuration can be built in code with the builder methods of
//! [`ClientConfig`], or loaded from a YAML file merged with environment
//! variables.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Base URL of the NewNanManager service
//! base_url: "https://manager.newnan.city"
//!
//! # API token sent as bearer token
//! token: "nn_xxxxxxxxxxxx"
//!
//! # Request timeout in seconds
//! timeout_secs: 30
//!
//! # Connect timeout in seconds
//! connect_timeout_secs: 10
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with the `NEWNAN_` prefix:
//!
//! ```bash
//! export NEWNAN_BASE_URL="https://manager.newnan.city"
//! export NEWNAN_TOKEN="nn_xxxxxxxxxxxx"
//! ```

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use reqwest::{Url, header::HeaderValue};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Prefix of the environment variables overriding the configuration file.
pub const ENV_PREFIX: &str = "NEWNAN_";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Whole seconds, rounding any sub-second part up.
fn secs_rounded_up(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

fn default_user_agent() -> String {
    format!("newnan-manager/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings used to reach the NewNanManager service.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use newnan_manager::ClientConfig;
///
/// let config = ClientConfig::new("https://manager.newnan.city")
///     .with_token("nn_secret")
///     .with_timeout(Duration::from_secs(10));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service, with protocol and without the `/api/v1` prefix.
    ///
    /// A trailing slash is accepted.
    pub base_url: String,

    /// API token, sent both as `Authorization: Bearer` and `X-API-Token`.
    ///
    /// Only the health endpoint can be called without a token.
    #[serde(default)]
    pub token: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with default timeouts and no token.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Load the configuration from a YAML file, then apply `NEWNAN_*`
    /// environment overrides.
    ///
    /// A missing file is not an error: the configuration may come from
    /// the environment alone. Nested keys use `__` as separator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the merged values cannot be
    /// extracted (missing `base_url`, wrong types) or fail [`Self::validate`].
    pub fn load(path: &str) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    /// Providers read by [`Self::load`], to merge further overrides into.
    pub fn figment(path: &str) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: ClientConfig = figment
            .extract()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Set the API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the whole-request timeout, rounded up to whole seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = secs_rounded_up(timeout);
        self
    }

    /// Set the connect timeout, rounded up to whole seconds.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_secs = secs_rounded_up(timeout);
        self
    }

    /// Set the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the URL is not an absolute
    /// `http`/`https` URL.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| ApiError::Config(format!("invalid base_url {}: {}", self.base_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::Config(format!(
                "unsupported scheme {} in base_url",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base_url {} cannot be used as a base",
                self.base_url
            )));
        }

        Ok(url)
    }

    /// Check the configuration before building a client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if:
    /// - the base URL is empty, not absolute, or not `http`/`https`
    /// - a timeout is zero
    /// - the token is empty or cannot be sent as a header value
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }
        self.parsed_base_url()?;

        if self.timeout_secs == 0 {
            return Err(ApiError::Config("timeout_secs must be positive".to_string()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ApiError::Config(
                "connect_timeout_secs must be positive".to_string(),
            ));
        }

        if let Some(token) = &self.token {
            if token.is_empty() {
                return Err(ApiError::Config("token must not be empty".to_string()));
            }
            if HeaderValue::from_str(token).is_err() {
                return Err(ApiError::Config(
                    "token contains characters not allowed in headers".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::remove_var("NEWNAN_BASE_URL");
            std::env::remove_var("NEWNAN_TOKEN");
            std::env::remove_var("NEWNAN_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.token.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("newnan-manager/"));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("https://manager.example.com/")
            .with_token("secret")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_user_agent("plugin/1.0");

        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 2);
        assert_eq!(config.user_agent, "plugin/1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sub_second_timeouts_round_up() {
        let config = ClientConfig::new("http://localhost")
            .with_timeout(Duration::from_millis(1500))
            .with_connect_timeout(Duration::from_millis(500));

        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.connect_timeout_secs, 1);
        assert!(config.validate().is_ok());

        let config = ClientConfig::new("http://localhost").with_timeout(Duration::from_secs(7));
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://manager.example.com").validate().is_err());
        assert!(ClientConfig::new("mailto:admin@example.com").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let config = ClientConfig::new("http://localhost").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());

        let config = ClientConfig::new("http://localhost").with_connect_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_tokens() {
        let config = ClientConfig::new("http://localhost").with_token("");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("http://localhost").with_token("bad\ntoken");
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let file = write_config(
            r#"
base_url: "https://manager.example.com"
token: "file-token"
timeout_secs: 12
"#,
        );

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "https://manager.example.com");
        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_load_env_overrides_file() {
        clear_env();
        let file = write_config(
            r#"
base_url: "https://manager.example.com"
token: "file-token"
"#,
        );

        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::set_var("NEWNAN_TOKEN", "env-token");
        }
        let config = ClientConfig::load(file.path().to_str().unwrap());
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.base_url, "https://manager.example.com");
        assert_eq!(config.token.as_deref(), Some("env-token"));
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_env() {
        clear_env();
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::set_var("NEWNAN_BASE_URL", "http://127.0.0.1:8000");
        }
        let config = ClientConfig::load("/nonexistent/newnan.yaml");
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.token.is_none());
    }

    #[test]
    #[serial]
    fn test_load_missing_base_url_fails() {
        clear_env();
        let file = write_config("token: \"abc\"\n");

        let result = ClientConfig::load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_figment_with_overrides() {
        clear_env();
        let figment = ClientConfig::figment("/nonexistent/newnan.yaml")
            .merge(figment::providers::Serialized::default(
                "base_url",
                "https://manager.example.com",
            ))
            .merge(figment::providers::Serialized::default("token", "cli-token"));

        let config = ClientConfig::from_figment(figment).unwrap();
        assert_eq!(config.base_url, "https://manager.example.com");
        assert_eq!(config.token.as_deref(), Some("cli-token"));
        assert_eq!(config.timeout_secs, 30);
    }
}
