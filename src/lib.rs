//! NewNanManager - Rust client for the NewNan game-server management service.
//!
//! The manager keeps track of the players, towns and game servers of the
//! NewNan Minecraft network, hands out API tokens to server plugins, scores
//! the IP addresses players connect from, and monitors servers through
//! heartbeats. This crate wraps its JSON-over-HTTP API.
//!
//! # Overview
//!
//! - [`NewNanClient`] - facade exposing one service per resource
//! - [`services`] - one method per REST endpoint
//! - [`models`] - request and response payloads
//! - [`http`] - request description, envelope parsing and the `reqwest` transport
//! - [`ClientConfig`] - base URL, token and timeouts, from code or YAML/environment
//! - [`ApiError`] - every failure a call can end with
//!
//! # Examples
//!
//! ```no_run
//! use newnan_manager::{ClientConfig, NewNanClient};
//! use newnan_manager::models::{HeartbeatRequest, PlayerSessionRequest};
//!
//! # async fn example() -> newnan_manager::Result<()> {
//! let config = ClientConfig::new("https://manager.newnan.city").with_token("nn_secret");
//! let client = NewNanClient::new(config)?;
//!
//! // What a lobby plugin does
//! client
//!     .servers()
//!     .player_online("lobby", &PlayerSessionRequest::new("Steve"))
//!     .await?;
//! client
//!     .monitor()
//!     .heartbeat("lobby", &HeartbeatRequest::new(1, 100).with_tps(20.0))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! The server answers with a `{code, message, data, request_id}` envelope.
//! HTTP 401 becomes [`ApiError::Authentication`], other 4xx responses with a
//! readable body become [`ApiError::Business`], 5xx responses
//! [`ApiError::Http`], and transport failures [`ApiError::Network`] or
//! [`ApiError::Timeout`]. Nothing is retried.

mod client;
mod config;
mod error;
pub mod http;
pub mod models;
pub mod services;

pub use crate::client::NewNanClient;
pub use crate::config::{ClientConfig, ENV_PREFIX};
pub use crate::error::{ApiError, Result};
