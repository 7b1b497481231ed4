//! HTTP plumbing shared by every service.
//!
//! # Modules
//!
//! - `request` - [`ApiRequest`], a transport independent description of a call
//! - `envelope` - response envelope parsing and error translation
//! - `requester` - the [`Requester`] trait and its `reqwest` implementation
//!
//! # Examples
//!
//! ```no_run
//! use newnan_manager::ClientConfig;
//! use newnan_manager::http::{ApiRequest, HttpRequester, Requester};
//!
//! # async fn example() -> newnan_manager::Result<()> {
//! let requester = HttpRequester::new(&ClientConfig::new("http://localhost:8000"))?;
//! let health = requester.execute(ApiRequest::get(["monitor", "health"])).await?;
//! # Ok(())
//! # }
//! ```

mod envelope;
mod request;
mod requester;

pub use crate::http::envelope::{Envelope, is_success_code, parse_response};
pub use crate::http::request::{API_PREFIX, ApiRequest};
pub use crate::http::requester::{API_TOKEN_HEADER, HttpRequester, MockRequester, Requester};
