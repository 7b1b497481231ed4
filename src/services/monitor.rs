//! Monitoring endpoints: health, heartbeats, live status and latency.

use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{HealthStatus, HeartbeatRequest, LatencyStats, ServerStatus},
    services::decode,
};

const MONITOR: &str = "monitor";

/// Access to `/api/v1/monitor`.
///
/// Server plugins call [`Self::heartbeat`] periodically; the manager derives
/// each server's online state and latency from those heartbeats.
pub struct MonitorService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> MonitorService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        MonitorService { requester }
    }

    /// `GET /monitor/health`. Does not require a token.
    pub async fn health(&self) -> Result<HealthStatus> {
        info!("check manager health");
        decode(
            self.requester
                .execute(ApiRequest::get([MONITOR, "health"]))
                .await?,
        )
    }

    /// `POST /monitor/servers/{id}/heartbeat`.
    pub async fn heartbeat(
        &self,
        server_id: &str,
        heartbeat: &HeartbeatRequest,
    ) -> Result<ServerStatus> {
        debug!(
            "heartbeat from {}: {}/{} players",
            server_id, heartbeat.current_players, heartbeat.max_players
        );
        let request = ApiRequest::post([MONITOR, "servers"])
            .segment(server_id)
            .segment("heartbeat")
            .json(heartbeat)?;
        decode(self.requester.execute(request).await?)
    }

    /// `GET /monitor/servers/{id}/status`.
    pub async fn status(&self, server_id: &str) -> Result<ServerStatus> {
        info!("get status of server {}", server_id);
        let request = ApiRequest::get([MONITOR, "servers"])
            .segment(server_id)
            .segment("status");
        decode(self.requester.execute(request).await?)
    }

    /// `GET /monitor/servers/{id}/latency`, over the server's default window
    /// unless `window_minutes` is given.
    pub async fn latency(
        &self,
        server_id: &str,
        window_minutes: Option<u32>,
    ) -> Result<LatencyStats> {
        info!("get latency of server {}", server_id);
        let request = ApiRequest::get([MONITOR, "servers"])
            .segment(server_id)
            .segment("latency")
            .optional_query("window_minutes", window_minutes);
        decode(self.requester.execute(request).await?)
    }
}
