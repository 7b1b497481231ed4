//! Per-resource services, one method per REST endpoint.
//!
//! Every service holds a shared [`Requester`](crate::http::Requester), builds
//! one [`ApiRequest`](crate::http::ApiRequest) per call and decodes the
//! envelope `data` into the expected model.
//!
//! # Modules
//!
//! - `players` - [`PlayerService`]
//! - `towns` - [`TownService`]
//! - `servers` - [`ServerService`]
//! - `tokens` - [`TokenService`]
//! - `ips` - [`IpService`]
//! - `monitor` - [`MonitorService`]

mod ips;
mod monitor;
mod players;
mod servers;
mod tokens;
mod towns;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

pub use crate::services::ips::IpService;
pub use crate::services::monitor::MonitorService;
pub use crate::services::players::PlayerService;
pub use crate::services::servers::ServerService;
pub use crate::services::tokens::TokenService;
pub use crate::services::towns::TownService;

/// Decode envelope `data` into a model.
fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Canned wire payloads shared by the service and client tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{Value, json};

    pub fn player(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "qq": null,
            "town_id": null,
            "is_banned": false,
            "created_at": "2024-05-01T12:00:00Z"
        })
    }

    pub fn town(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "tag": null,
            "level": 1,
            "member_count": 0,
            "created_at": "2024-05-01T12:00:00Z"
        })
    }

    pub fn server(id: &str) -> Value {
        json!({
            "id": id,
            "name": id.to_uppercase(),
            "address": format!("{}.newnan.city:25565", id),
            "server_type": "minecraft_java",
            "is_active": true,
            "created_at": "2024-05-01T12:00:00Z"
        })
    }

    pub fn status(server_id: &str, online: bool) -> Value {
        json!({
            "server_id": server_id,
            "online": online,
            "current_players": 4,
            "max_players": 50,
            "tps": 20.0
        })
    }

    pub fn page(items: Vec<Value>, total: u64) -> Value {
        json!({
            "items": items,
            "total": total,
            "page": 1,
            "page_size": 20
        })
    }

    pub fn token(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "permissions": ["players:read"],
            "is_active": true,
            "created_at": "2024-05-01T12:00:00Z"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    #[test]
    fn test_decode_model() {
        let player: Player = decode(fixtures::player(1, "Steve")).unwrap();
        assert_eq!(player.name, "Steve");
    }

    #[test]
    fn test_decode_null_into_model_fails() {
        let result: Result<Player> = decode(Value::Null);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_null_into_option() {
        let result: Option<Player> = decode(Value::Null).unwrap();
        assert!(result.is_none());
    }
}
