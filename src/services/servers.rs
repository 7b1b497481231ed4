//! Game server endpoints, including the join/leave notifications of server plugins.

use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{
        CreateServerRequest, Page, PlayerServer, PlayerSessionRequest, ServerInfo, ServerQuery,
        UpdateServerRequest,
    },
    services::decode,
};

const SERVERS: &str = "servers";

/// Access to `/api/v1/servers`.
pub struct ServerService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> ServerService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        ServerService { requester }
    }

    /// `GET /servers`.
    pub async fn list(&self, query: &ServerQuery) -> Result<Page<ServerInfo>> {
        info!("list servers");
        debug!("server query {:?}", query);

        let request = ApiRequest::get([SERVERS])
            .optional_query("page", query.page)
            .optional_query("page_size", query.page_size)
            .optional_query("is_active", query.is_active)
            .optional_query("server_type", query.server_type.map(|t| t.as_str()));

        decode(self.requester.execute(request).await?)
    }

    /// `GET /servers/{id}`.
    pub async fn get(&self, id: &str) -> Result<ServerInfo> {
        info!("get server {}", id);
        let request = ApiRequest::get([SERVERS]).segment(id);
        decode(self.requester.execute(request).await?)
    }

    /// `POST /servers`: register a new server.
    pub async fn create(&self, server: &CreateServerRequest) -> Result<ServerInfo> {
        info!("register server {} at {}", server.id, server.address);
        let request = ApiRequest::post([SERVERS]).json(server)?;
        decode(self.requester.execute(request).await?)
    }

    /// `PUT /servers/{id}`.
    pub async fn update(&self, id: &str, changes: &UpdateServerRequest) -> Result<ServerInfo> {
        info!("update server {}", id);
        let request = ApiRequest::put([SERVERS]).segment(id).json(changes)?;
        decode(self.requester.execute(request).await?)
    }

    /// `DELETE /servers/{id}`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        info!("delete server {}", id);
        let request = ApiRequest::delete([SERVERS]).segment(id);
        self.requester.execute(request).await?;
        Ok(())
    }

    /// `POST /servers/{id}/players/online`: a player joined the server.
    pub async fn player_online(
        &self,
        server_id: &str,
        session: &PlayerSessionRequest,
    ) -> Result<PlayerServer> {
        info!("player {} joined {}", session.player_name, server_id);
        self.send_session(server_id, "online", session).await
    }

    /// `POST /servers/{id}/players/offline`: a player left the server.
    pub async fn player_offline(
        &self,
        server_id: &str,
        session: &PlayerSessionRequest,
    ) -> Result<PlayerServer> {
        info!("player {} left {}", session.player_name, server_id);
        self.send_session(server_id, "offline", session).await
    }

    async fn send_session(
        &self,
        server_id: &str,
        state: &str,
        session: &PlayerSessionRequest,
    ) -> Result<PlayerServer> {
        let request = ApiRequest::post([SERVERS])
            .segment(server_id)
            .segment("players")
            .segment(state)
            .json(session)?;
        decode(self.requester.execute(request).await?)
    }

    /// `GET /servers/{id}/players`: players currently online.
    pub async fn online_players(&self, server_id: &str) -> Result<Vec<PlayerServer>> {
        info!("list players online on {}", server_id);
        let request = ApiRequest::get([SERVERS]).segment(server_id).segment("players");
        decode(self.requester.execute(request).await?)
    }
}
