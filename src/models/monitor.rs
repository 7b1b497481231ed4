//! Monitoring payloads: heartbeats, live status and latency statistics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::server::ServerInfo;

/// Body of `POST /monitor/servers/{id}/heartbeat`, sent periodically by server plugins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeartbeatRequest {
    pub current_players: u32,
    pub max_players: u32,
    /// Ticks per second over the last minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Names of the connected players.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
}

impl HeartbeatRequest {
    pub fn new(current_players: u32, max_players: u32) -> Self {
        HeartbeatRequest {
            current_players,
            max_players,
            tps: None,
            version: None,
            players: Vec::new(),
        }
    }

    pub fn with_tps(mut self, tps: f64) -> Self {
        self.tps = Some(tps);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = players;
        self
    }
}

/// Live status of a server, as computed from its heartbeats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerStatus {
    pub server_id: String,
    /// False once heartbeats stopped arriving.
    pub online: bool,
    #[serde(default)]
    pub current_players: u32,
    #[serde(default)]
    pub max_players: u32,
    #[serde(default)]
    pub tps: Option<f64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub last_heartbeat: Option<DateTime<Utc>>,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.online {
            return write!(f, "{}: offline", self.server_id);
        }
        write!(
            f,
            "{}: online, players={}/{}",
            self.server_id, self.current_players, self.max_players
        )?;
        if let Some(tps) = self.tps {
            write!(f, ", tps={:.1}", tps)?;
        }
        if let Some(latency_ms) = self.latency_ms {
            write!(f, ", latency={:.0}ms", latency_ms)?;
        }
        Ok(())
    }
}

/// Latency statistics of a server over a time window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LatencyStats {
    pub server_id: String,
    /// Window the statistics cover.
    #[serde(default)]
    pub window_minutes: Option<u32>,
    pub samples: u64,
    #[serde(default)]
    pub avg_ms: Option<f64>,
    #[serde(default)]
    pub min_ms: Option<f64>,
    #[serde(default)]
    pub max_ms: Option<f64>,
    #[serde(default)]
    pub p95_ms: Option<f64>,
}

impl fmt::Display for LatencyStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: samples={}", self.server_id, self.samples)?;
        let fields = [
            ("avg", self.avg_ms),
            ("min", self.min_ms),
            ("max", self.max_ms),
            ("p95", self.p95_ms),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                write!(f, ", {}={:.1}ms", label, value)?;
            }
        }
        Ok(())
    }
}

/// Response of `GET /monitor/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok") || self.status.eq_ignore_ascii_case("healthy")
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "status={}", self.status)?;
        if let Some(version) = &self.version {
            write!(f, ", version={}", version)?;
        }
        if let Some(database) = &self.database {
            write!(f, ", database={}", database)?;
        }
        Ok(())
    }
}

/// A server with its live status, assembled client-side.
///
/// `status` is `None` when the status request failed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerOverview {
    pub server: ServerInfo,
    pub status: Option<ServerStatus>,
}

impl fmt::Display for ServerOverview {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.status {
            Some(status) => write!(f, "{} ({})", self.server.name, status),
            None => write!(f, "{} ({}: status unavailable)", self.server.name, self.server.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_skips_empty_fields() {
        let json = serde_json::to_value(HeartbeatRequest::new(3, 50)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"current_players": 3, "max_players": 50})
        );

        let json = serde_json::to_value(
            HeartbeatRequest::new(1, 50)
                .with_tps(19.8)
                .with_version("1.20.4")
                .with_players(vec!["Steve".to_string()]),
        )
        .unwrap();
        assert_eq!(json["tps"], 19.8);
        assert_eq!(json["players"], serde_json::json!(["Steve"]));
    }

    #[test]
    fn test_server_status_display() {
        let status: ServerStatus = serde_json::from_str(
            r#"{"server_id": "lobby", "online": true, "current_players": 12, "max_players": 100, "tps": 19.96, "latency_ms": 42.4}"#,
        )
        .unwrap();
        assert_eq!(
            status.to_string(),
            "lobby: online, players=12/100, tps=20.0, latency=42ms"
        );

        let status: ServerStatus =
            serde_json::from_str(r#"{"server_id": "creative", "online": false}"#).unwrap();
        assert_eq!(status.to_string(), "creative: offline");
    }

    #[test]
    fn test_latency_display() {
        let stats = LatencyStats {
            server_id: "lobby".to_string(),
            window_minutes: Some(60),
            samples: 120,
            avg_ms: Some(35.24),
            min_ms: Some(20.0),
            max_ms: None,
            p95_ms: None,
        };
        assert_eq!(
            stats.to_string(),
            "lobby: samples=120, avg=35.2ms, min=20.0ms"
        );
    }

    #[test]
    fn test_health() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "OK", "version": "2.3.0"}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.to_string(), "status=OK, version=2.3.0");

        let health: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!health.is_healthy());
    }
}
