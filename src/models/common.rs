//! Structures shared by every resource: pagination and bans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items of the current page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page, starting at 1.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Number of pages, 0 when the page size is 0.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

impl<T> fmt::Display for Page<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "page={}/{}, total={}",
            self.page,
            self.total_pages(),
            self.total
        )
    }
}

/// Ban payload shared by players and IP addresses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BanRequest {
    /// Reason shown to the banned player.
    pub reason: String,
    /// Ban duration, permanent when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

impl BanRequest {
    /// Permanent ban.
    pub fn permanent(reason: impl Into<String>) -> Self {
        BanRequest {
            reason: reason.into(),
            duration_seconds: None,
        }
    }

    /// Ban lifted automatically after `duration_seconds`.
    pub fn temporary(reason: impl Into<String>, duration_seconds: u64) -> Self {
        BanRequest {
            reason: reason.into(),
            duration_seconds: Some(duration_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u64, page: u32, page_size: u32) -> Page<u32> {
        Page {
            items: vec![],
            total,
            page,
            page_size,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(page(0, 1, 20).total_pages(), 0);
        assert_eq!(page(20, 1, 20).total_pages(), 1);
        assert_eq!(page(21, 1, 20).total_pages(), 2);
        assert_eq!(page(21, 1, 0).total_pages(), 0);
    }

    #[test]
    fn test_has_next() {
        assert!(page(45, 1, 20).has_next());
        assert!(page(45, 2, 20).has_next());
        assert!(!page(45, 3, 20).has_next());
        assert!(!page(0, 1, 20).has_next());
    }

    #[test]
    fn test_page_display() {
        assert_eq!(page(45, 2, 20).to_string(), "page=2/3, total=45");
    }

    #[test]
    fn test_page_without_items() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"total": 0, "page": 1, "page_size": 20}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_of_records_without_items() {
        let page: Page<crate::models::Player> =
            serde_json::from_str(r#"{"total": 0, "page": 1, "page_size": 20}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_ban_request_skips_missing_duration() {
        let json = serde_json::to_value(BanRequest::permanent("cheating")).unwrap();
        assert_eq!(json, serde_json::json!({"reason": "cheating"}));

        let json = serde_json::to_value(BanRequest::temporary("spam", 600)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"reason": "spam", "duration_seconds": 600})
        );
    }
}
