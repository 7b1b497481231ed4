//! Game servers registered in the manager, and which players are online on them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of game server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServerType {
    #[default]
    MinecraftJava,
    MinecraftBedrock,
    /// BungeeCord / Velocity style proxies.
    Proxy,
    /// Any type this client does not know about.
    #[serde(other)]
    Other,
}

impl ServerType {
    /// Wire name, as used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::MinecraftJava => "minecraft_java",
            ServerType::MinecraftBedrock => "minecraft_bedrock",
            ServerType::Proxy => "proxy",
            ServerType::Other => "other",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered game server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerInfo {
    /// Server identifier, chosen at registration (e.g. `lobby`).
    pub id: String,
    pub name: String,
    /// Address players connect to, `host:port`.
    pub address: String,
    #[serde(default)]
    pub server_type: ServerType,
    #[serde(default)]
    pub description: Option<String>,
    /// Inactive servers are kept for history but not monitored.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl fmt::Display for ServerInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, address={}, type={}",
            self.id, self.name, self.address, self.server_type
        )?;
        if !self.is_active {
            write!(f, ", inactive")?;
        }
        Ok(())
    }
}

/// Filters of `GET /servers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub is_active: Option<bool>,
    pub server_type: Option<ServerType>,
}

impl ServerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_server_type(mut self, server_type: ServerType) -> Self {
        self.server_type = Some(server_type);
        self
    }
}

/// Body of `POST /servers`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateServerRequest {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub server_type: ServerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateServerRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        CreateServerRequest {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            server_type: ServerType::default(),
            description: None,
        }
    }

    pub fn with_server_type(mut self, server_type: ServerType) -> Self {
        self.server_type = server_type;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `PUT /servers/{id}`. Only set fields are changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateServerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<ServerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Online relation between a player and a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerServer {
    pub player_id: i64,
    #[serde(default)]
    pub player_name: Option<String>,
    pub server_id: String,
    pub online: bool,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub left_at: Option<DateTime<Utc>>,
}

impl fmt::Display for PlayerServer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let player = self
            .player_name
            .clone()
            .unwrap_or_else(|| self.player_id.to_string());
        let state = if self.online { "online" } else { "offline" };
        write!(f, "{} {} on {}", player, state, self.server_id)
    }
}

/// Body of the join/leave notifications sent by server plugins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerSessionRequest {
    pub player_name: String,
    /// Address the player connected from, used for IP reputation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl PlayerSessionRequest {
    pub fn new(player_name: impl Into<String>) -> Self {
        PlayerSessionRequest {
            player_name: player_name.into(),
            ip: None,
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}
