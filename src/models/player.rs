//! Player records and the payloads of the player endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player known by the manager.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    /// Unique identifier.
    pub id: i64,
    /// In-game name.
    pub name: String,
    /// QQ number bound to the player.
    #[serde(default)]
    pub qq: Option<String>,
    /// Town the player belongs to.
    #[serde(default)]
    pub town_id: Option<i64>,
    /// Whether the player is currently banned.
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub ban_reason: Option<String>,
    /// End of a temporary ban.
    #[serde(default)]
    pub ban_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id={}, name={}", self.id, self.name)?;
        if let Some(town_id) = self.town_id {
            write!(f, ", town={}", town_id)?;
        }
        if self.is_banned {
            write!(
                f,
                ", banned ({})",
                self.ban_reason.as_deref().unwrap_or("no reason")
            )?;
        }
        Ok(())
    }
}

/// Filters of `GET /players`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Case-insensitive name search.
    pub search: Option<String>,
    pub town_id: Option<i64>,
    pub is_banned: Option<bool>,
}

impl PlayerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_town_id(mut self, town_id: i64) -> Self {
        self.town_id = Some(town_id);
        self
    }

    pub fn with_banned(mut self, is_banned: bool) -> Self {
        self.is_banned = Some(is_banned);
        self
    }
}

/// Body of `POST /players`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatePlayerRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town_id: Option<i64>,
}

impl CreatePlayerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CreatePlayerRequest {
            name: name.into(),
            qq: None,
            town_id: None,
        }
    }

    pub fn with_qq(mut self, qq: impl Into<String>) -> Self {
        self.qq = Some(qq.into());
        self
    }

    pub fn with_town_id(mut self, town_id: i64) -> Self {
        self.town_id = Some(town_id);
        self
    }
}

/// Body of `PUT /players/{id}`. Only set fields are changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town_id: Option<i64>,
}

/// One login attempt to check in a batch validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerLogin {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl PlayerLogin {
    pub fn new(name: impl Into<String>) -> Self {
        PlayerLogin {
            name: name.into(),
            ip: None,
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}

/// Body of `POST /players/validate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidatePlayersRequest {
    pub players: Vec<PlayerLogin>,
    /// Server the players are joining, used for per-server rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}

/// Verdict for one login of a batch validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerValidation {
    pub name: String,
    /// Whether the player may join.
    pub allowed: bool,
    /// Why the player was refused.
    #[serde(default)]
    pub reason: Option<String>,
    /// Matching player record, if the name is registered.
    #[serde(default)]
    pub player_id: Option<i64>,
}

impl fmt::Display for PlayerValidation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.allowed {
            write!(f, "{}: allowed", self.name)
        } else {
            write!(
                f,
                "{}: refused ({})",
                self.name,
                self.reason.as_deref().unwrap_or("no reason")
            )
        }
    }
}

/// Response of `POST /players/validate`, one result per requested login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationReport {
    #[serde(default)]
    pub results: Vec<PlayerValidation>,
}

impl ValidationReport {
    /// Results of refused players.
    pub fn refused(&self) -> impl Iterator<Item = &PlayerValidation> {
        self.results.iter().filter(|r| !r.allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_from_wire() {
        let json = r#"{
            "id": 12,
            "name": "Steve",
            "qq": "10001",
            "town_id": 3,
            "is_banned": true,
            "ban_reason": "griefing",
            "ban_expires_at": "2025-01-02T03:04:05Z",
            "created_at": "2024-06-01T00:00:00Z"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, 12);
        assert_eq!(player.qq.as_deref(), Some("10001"));
        assert_eq!(player.town_id, Some(3));
        assert!(player.is_banned);
        assert!(player.ban_expires_at.is_some());
        assert!(player.updated_at.is_none());
        assert_eq!(
            player.to_string(),
            "id=12, name=Steve, town=3, banned (griefing)"
        );
    }

    #[test]
    fn test_minimal_player() {
        let json = r#"{"id": 1, "name": "Alex", "created_at": "2024-06-01T00:00:00+08:00"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert!(!player.is_banned);
        assert_eq!(player.to_string(), "id=1, name=Alex");
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let json = serde_json::to_value(CreatePlayerRequest::new("Alex").with_town_id(2)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Alex", "town_id": 2}));
    }

    #[test]
    fn test_update_request_empty() {
        let json = serde_json::to_value(UpdatePlayerRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_validation_report() {
        let json = r#"{"results": [
            {"name": "Steve", "allowed": true, "player_id": 12},
            {"name": "Herobrine", "allowed": false, "reason": "banned"}
        ]}"#;

        let report: ValidationReport = serde_json::from_str(json).unwrap();
        let refused: Vec<_> = report.refused().collect();
        assert_eq!(refused.len(), 1);
        assert_eq!(refused[0].to_string(), "Herobrine: refused (banned)");
        assert_eq!(report.results[0].to_string(), "Steve: allowed");
    }
}
