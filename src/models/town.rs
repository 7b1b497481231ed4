//! Towns, the player groups of the NewNan world.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Town {
    pub id: i64,
    pub name: String,
    /// Short tag displayed before member names.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: i32,
    /// Player id of the mayor.
    #[serde(default)]
    pub leader_id: Option<i64>,
    #[serde(default)]
    pub member_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id={}, name={}", self.id, self.name)?;
        if let Some(tag) = &self.tag {
            write!(f, " [{}]", tag)?;
        }
        write!(f, ", level={}, members={}", self.level, self.member_count)
    }
}

/// Filters of `GET /towns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TownQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
}

impl TownQuery {
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
}

/// Body of `POST /towns`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateTownRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
}

impl CreateTownRequest {
    pub fn new(name: impl Into<String>) -> Self {
        CreateTownRequest {
            name: name.into(),
            tag: None,
            description: None,
            leader_id: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_leader_id(mut self, leader_id: i64) -> Self {
        self.leader_id = Some(leader_id);
        self
    }
}

/// Body of `PUT /towns/{id}`. Only set fields are changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateTownRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
}
