//! Rendering of command results.
//!
//! Results are printed with their `Display` implementation, one line per
//! item, or as pretty JSON when `--json` is given.

use std::fmt::Display;

use newnan_manager::{Result, models::Page};
use serde::Serialize;
use serde_json::json;

/// Shown instead of an empty list.
pub const NO_RESULTS: &str = "No results.";

pub fn render<T: Serialize + Display>(value: &T, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(value)?);
    }
    Ok(value.to_string())
}

pub fn render_list<T: Serialize + Display>(items: &[T], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(items)?);
    }
    if items.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }
    Ok(lines(items))
}

/// Items followed by a `page=x/y, total=z` footer.
pub fn render_page<T: Serialize + Display>(page: &Page<T>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(page)?);
    }
    if page.items.is_empty() {
        return Ok(format!("{}\n{}", NO_RESULTS, page));
    }
    Ok(format!("{}\n{}", lines(&page.items), page))
}

/// Acknowledgement of an endpoint returning no data.
pub fn render_done(message: &str, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(
            &json!({"ok": true, "message": message}),
        )?);
    }
    Ok(message.to_string())
}

fn lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
