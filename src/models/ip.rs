//! IP reputation records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the manager knows about an address players connected from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IpInfo {
    pub ip: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    #[serde(default)]
    pub is_proxy: bool,
    #[serde(default)]
    pub is_vpn: bool,
    /// Reputation score from 0 (clean) to 100.
    #[serde(default)]
    pub risk_score: u8,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub ban_reason: Option<String>,
    #[serde(default)]
    pub ban_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl IpInfo {
    /// Human readable location, most specific first.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl fmt::Display for IpInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ip={}, risk={}", self.ip, self.risk_score)?;
        if let Some(location) = self.location() {
            write!(f, ", location={}", location)?;
        }
        if self.is_proxy || self.is_vpn {
            write!(f, ", proxy/vpn")?;
        }
        if self.is_banned {
            write!(f, ", banned")?;
        }
        Ok(())
    }
}

/// Filters of `GET /ips`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub is_banned: Option<bool>,
    /// Only addresses with a risk score at least this high.
    pub min_risk: Option<u8>,
}

impl IpQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_banned(mut self, is_banned: bool) -> Self {
        self.is_banned = Some(is_banned);
        self
    }

    pub fn with_min_risk(mut self, min_risk: u8) -> Self {
        self.min_risk = Some(min_risk);
        self
    }
}
