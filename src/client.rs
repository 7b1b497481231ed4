//! Facade aggregating every service behind one client.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::{
    config::ClientConfig,
    error::Result,
    http::{HttpRequester, Requester},
    models::{ServerOverview, ServerQuery},
    services::{
        IpService, MonitorService, PlayerService, ServerService, TokenService, TownService,
    },
};

/// Client of the NewNanManager API.
///
/// All services share one [`Requester`], so one connection pool and one
/// set of credentials.
///
/// # Examples
///
/// ```no_run
/// use newnan_manager::{ClientConfig, NewNanClient};
///
/// # async fn example() -> newnan_manager::Result<()> {
/// let config = ClientConfig::new("https://manager.newnan.city").with_token("nn_secret");
/// let client = NewNanClient::new(config)?;
///
/// let player = client.players().get_by_name("Steve").await?;
/// let servers = client.players().servers(player.id).await?;
/// println!("{} was seen on {} servers", player.name, servers.len());
/// # Ok(())
/// # }
/// ```
pub struct NewNanClient<R: Requester = HttpRequester> {
    players: PlayerService<R>,
    towns: TownService<R>,
    servers: ServerService<R>,
    tokens: TokenService<R>,
    ips: IpService<R>,
    monitor: MonitorService<R>,
}

impl NewNanClient<HttpRequester> {
    /// Create a client talking HTTP to the configured server.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Config`] if the configuration is invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        info!("create newnan client for {}", config.base_url);
        Ok(Self::with_requester(HttpRequester::new(&config)?))
    }
}

impl<R: Requester> NewNanClient<R> {
    /// Create a client over any [`Requester`] implementation.
    pub fn with_requester(requester: R) -> Self {
        let requester = Arc::new(requester);

        NewNanClient {
            players: PlayerService::new(Arc::clone(&requester)),
            towns: TownService::new(Arc::clone(&requester)),
            servers: ServerService::new(Arc::clone(&requester)),
            tokens: TokenService::new(Arc::clone(&requester)),
            ips: IpService::new(Arc::clone(&requester)),
            monitor: MonitorService::new(requester),
        }
    }

    pub fn players(&self) -> &PlayerService<R> {
        &self.players
    }

    pub fn towns(&self) -> &TownService<R> {
        &self.towns
    }

    pub fn servers(&self) -> &ServerService<R> {
        &self.servers
    }

    pub fn tokens(&self) -> &TokenService<R> {
        &self.tokens
    }

    pub fn ips(&self) -> &IpService<R> {
        &self.ips
    }

    pub fn monitor(&self) -> &MonitorService<R> {
        &self.monitor
    }

    /// Lists servers and fetches the live status of each of them.
    ///
    /// Status requests are sent concurrently. A failing status request is
    /// logged and leaves `status` empty for that server, while a failing
    /// server list is returned as an error.
    pub async fn server_overview(&self, query: &ServerQuery) -> Result<Vec<ServerOverview>> {
        let servers = self.servers.list(query).await?.items;
        info!("request status of {} servers", servers.len());

        let statuses = join_all(servers.iter().map(|s| self.monitor.status(&s.id))).await;

        let overview: Vec<ServerOverview> = servers
            .into_iter()
            .zip(statuses)
            .map(|(server, status)| {
                let status = match status {
                    Ok(status) => Some(status),
                    Err(e) => {
                        warn!("unable to get status of server {}: {}", server.id, e);
                        None
                    }
                };
                ServerOverview { server, status }
            })
            .collect();

        debug!("server overview {:?}", overview);

        Ok(overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ApiError, http::MockRequester, services::fixtures};

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(NewNanClient::new(ClientConfig::new("")).is_err());
        assert!(NewNanClient::new(ClientConfig::new("http://localhost:8000")).is_ok());
    }

    #[tokio::test]
    async fn test_services_share_requester() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/players/1")
            .times(1)
            .returning(|_| Ok(fixtures::player(1, "Steve")));
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/towns/1")
            .times(1)
            .returning(|_| Ok(fixtures::town(1, "Newnan")));

        let client = NewNanClient::with_requester(requester);
        assert_eq!(client.players().get(1).await.unwrap().name, "Steve");
        assert_eq!(client.towns().get(1).await.unwrap().name, "Newnan");
    }

    #[tokio::test]
    async fn test_server_overview() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/servers" && r.query_value("is_active") == Some("true"))
            .times(1)
            .returning(|_| {
                Ok(fixtures::page(
                    vec![
                        fixtures::server("lobby"),
                        fixtures::server("survival"),
                        fixtures::server("creative"),
                    ],
                    3,
                ))
            });
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/monitor/servers/lobby/status")
            .times(1)
            .returning(|_| Ok(fixtures::status("lobby", true)));
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/monitor/servers/survival/status")
            .times(1)
            .returning(|_| {
                Err(ApiError::Http {
                    status: 502,
                    body: "bad gateway".to_string(),
                })
            });
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/monitor/servers/creative/status")
            .times(1)
            .returning(|_| Ok(fixtures::status("creative", false)));

        let client = NewNanClient::with_requester(requester);
        let overview = client
            .server_overview(&ServerQuery::new().with_active(true))
            .await
            .unwrap();

        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0].server.id, "lobby");
        assert!(overview[0].status.as_ref().unwrap().online);
        assert_eq!(overview[1].server.id, "survival");
        assert!(overview[1].status.is_none());
        assert_eq!(
            overview[1].to_string(),
            "SURVIVAL (survival: status unavailable)"
        );
        assert!(!overview[2].status.as_ref().unwrap().online);
    }

    #[tokio::test]
    async fn test_server_overview_list_failure() {
        let mut requester = MockRequester::new();
        requester.expect_execute().times(1).returning(|_| {
            Err(ApiError::Authentication {
                message: "unauthorized".to_string(),
                request_id: None,
            })
        });

        let client = NewNanClient::with_requester(requester);
        let err = client
            .server_overview(&ServerQuery::new())
            .await
            .unwrap_err();
        assert!(err.is_auth());
    }
}
