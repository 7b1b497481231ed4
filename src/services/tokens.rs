//! API token endpoints.

use std::sync::Arc;

use log::info;

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{ApiToken, CreateTokenRequest},
    services::decode,
};

const TOKENS: &str = "tokens";

/// Access to `/api/v1/tokens`.
pub struct TokenService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> TokenService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        TokenService { requester }
    }

    /// `GET /tokens`. Secrets are never included.
    pub async fn list(&self) -> Result<Vec<ApiToken>> {
        info!("list api tokens");
        decode(self.requester.execute(ApiRequest::get([TOKENS])).await?)
    }

    /// `POST /tokens`. The returned token carries its secret, which the
    /// server will not send again.
    pub async fn create(&self, token: &CreateTokenRequest) -> Result<ApiToken> {
        info!("create api token {}", token.name);
        let request = ApiRequest::post([TOKENS]).json(token)?;
        decode(self.requester.execute(request).await?)
    }

    /// `GET /tokens/current`: the token this client authenticates with.
    pub async fn current(&self) -> Result<ApiToken> {
        info!("get current api token");
        decode(
            self.requester
                .execute(ApiRequest::get([TOKENS, "current"]))
                .await?,
        )
    }

    /// `DELETE /tokens/{id}`.
    pub async fn revoke(&self, id: i64) -> Result<()> {
        info!("revoke api token {}", id);
        let request = ApiRequest::delete([TOKENS]).segment(id);
        self.requester.execute(request).await?;
        Ok(())
    }
}
