//! `monitor` subcommand.

use clap::Subcommand;
use log::{debug, warn};
use newnan_manager::{NewNanClient, Result, http::Requester, models::HeartbeatRequest};

use crate::commands::output::render;

#[derive(Subcommand, Debug, PartialEq)]
pub enum MonitorCommand {
    /// Check that the manager is up
    Health,
    /// Send a heartbeat on behalf of a server
    Heartbeat {
        server_id: String,
        current_players: u32,
        max_players: u32,
        #[arg(long)]
        tps: Option<f64>,
        /// Game version run by the server
        #[arg(long)]
        version: Option<String>,
        /// Names of the players online
        #[arg(long = "player")]
        players: Vec<String>,
    },
    /// Show the live status of a server
    Status { server_id: String },
    /// Show latency statistics of a server
    Latency {
        server_id: String,
        /// Window in minutes, server default when absent
        #[arg(long)]
        window: Option<u32>,
    },
}

pub async fn handle_monitor<R: Requester>(
    client: &NewNanClient<R>,
    command: MonitorCommand,
    json: bool,
) -> Result<String> {
    debug!("handling monitor command {:?}", command);

    let monitor = client.monitor();
    match command {
        MonitorCommand::Health => {
            let health = monitor.health().await?;
            if !health.is_healthy() {
                warn!("manager reports status {}", health.status);
            }
            render(&health, json)
        }
        MonitorCommand::Heartbeat {
            server_id,
            current_players,
            max_players,
            tps,
            version,
            players,
        } => {
            let heartbeat = HeartbeatRequest {
                current_players,
                max_players,
                tps,
                version,
                players,
            };
            render(&monitor.heartbeat(&server_id, &heartbeat).await?, json)
        }
        MonitorCommand::Status { server_id } => render(&monitor.status(&server_id).await?, json),
        MonitorCommand::Latency { server_id, window } => {
            render(&monitor.latency(&server_id, window).await?, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use newnan_manager::http::MockRequester;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_handle_health() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/monitor/health")
            .times(1)
            .returning(|_| Ok(json!({"status": "degraded", "database": "down"})));

        let client = NewNanClient::with_requester(requester);
        let output = handle_monitor(&client, MonitorCommand::Health, false)
            .await
            .unwrap();
        assert_eq!(output, "status=degraded, database=down");
    }

    #[tokio::test]
    async fn test_handle_heartbeat() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| {
                r.path() == "/api/v1/monitor/servers/lobby/heartbeat"
                    && r.body
                        == Some(json!({
                            "current_players": 2,
                            "max_players": 50,
                            "tps": 19.5,
                            "players": ["Steve", "Alex"]
                        }))
            })
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "server_id": "lobby",
                    "online": true,
                    "current_players": 2,
                    "max_players": 50,
                    "tps": 19.5
                }))
            });

        let client = NewNanClient::with_requester(requester);
        let command = MonitorCommand::Heartbeat {
            server_id: "lobby".to_string(),
            current_players: 2,
            max_players: 50,
            tps: Some(19.5),
            version: None,
            players: vec!["Steve".to_string(), "Alex".to_string()],
        };
        let output = handle_monitor(&client, command, false).await.unwrap();
        assert_eq!(output, "lobby: online, players=2/50, tps=19.5");
    }

    #[tokio::test]
    async fn test_handle_latency() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| {
                r.path() == "/api/v1/monitor/servers/lobby/latency"
                    && r.query_value("window_minutes") == Some("60")
            })
            .times(1)
            .returning(|_| {
                Ok(json!({"server_id": "lobby", "samples": 12, "avg_ms": 40.0, "max_ms": 95.0}))
            });

        let client = NewNanClient::with_requester(requester);
        let command = MonitorCommand::Latency {
            server_id: "lobby".to_string(),
            window: Some(60),
        };
        let output = handle_monitor(&client, command, false).await.unwrap();
        assert_eq!(output, "lobby: samples=12, avg=40.0ms, max=95.0ms");
    }
}
