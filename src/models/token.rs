//! API tokens used by plugins and operators to call the manager.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    /// Plaintext token, only returned once by `POST /tokens`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Granted permissions, such as `players:read` or `servers:write`.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Server the token is restricted to.
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl ApiToken {
    /// Whether the token has a permission, honouring `*` and `resource:*` wildcards.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|granted| {
            granted == "*"
                || granted == permission
                || granted
                    .strip_suffix(":*")
                    .is_some_and(|resource| permission.split(':').next() == Some(resource))
        })
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, permissions=[{}]",
            self.id,
            self.name,
            self.permissions.join(",")
        )?;
        if let Some(server_id) = &self.server_id {
            write!(f, ", server={}", server_id)?;
        }
        if !self.is_active {
            write!(f, ", revoked")?;
        }
        Ok(())
    }
}

/// Body of `POST /tokens`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateTokenRequest {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    /// Lifetime of the token, never expires when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<u32>,
}

impl CreateTokenRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CreateTokenRequest {
            name: name.into(),
            permissions: Vec::new(),
            server_id: None,
            expires_in_days: None,
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn with_server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = Some(server_id.into());
        self
    }

    pub fn with_expires_in_days(mut self, days: u32) -> Self {
        self.expires_in_days = Some(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(permissions: &[&str]) -> ApiToken {
        ApiToken {
            id: 1,
            name: "lobby-plugin".to_string(),
            token: None,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            server_id: Some("lobby".to_string()),
            is_active: true,
            expires_at: None,
            last_used_at: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_has_permission() {
        let t = token(&["players:read", "servers:*"]);
        assert!(t.has_permission("players:read"));
        assert!(!t.has_permission("players:write"));
        assert!(t.has_permission("servers:write"));
        assert!(!t.has_permission("serversx:write"));

        assert!(token(&["*"]).has_permission("tokens:write"));
        assert!(!token(&[]).has_permission("players:read"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            token(&["players:read", "servers:*"]).to_string(),
            "id=1, name=lobby-plugin, permissions=[players:read,servers:*], server=lobby"
        );
    }

    #[test]
    fn test_created_token_carries_secret() {
        let json = r#"{"id": 5, "name": "ops", "token": "nn_abc", "permissions": ["*"], "created_at": "2024-01-01T00:00:00Z"}"#;
        let token: ApiToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.token.as_deref(), Some("nn_abc"));
        assert!(token.is_active);
    }

    #[test]
    fn test_create_request() {
        let json = serde_json::to_value(
            CreateTokenRequest::new("survival-plugin")
                .with_permission("players:read")
                .with_server_id("survival")
                .with_expires_in_days(30),
        )
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "survival-plugin",
                "permissions": ["players:read"],
                "server_id": "survival",
                "expires_in_days": 30
            })
        );
    }
}
