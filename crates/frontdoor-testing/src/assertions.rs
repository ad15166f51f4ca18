//! Custom assertions over `--format json` output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Visible entry count and ids
//! - Page counter validation

use anyhow::{Context, Result};
use serde_json::Value;

fn entries(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")
}

/// Ids of the visible page, in order.
pub fn entry_ids(json: &Value) -> Result<Vec<String>> {
    entries(json)?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Entry {} missing id", i))
        })
        .collect()
}

/// Assert the visible page has `expected` entries.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let count = entries(json)?.len();
    if count != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, count);
    }
    Ok(())
}

/// Assert the visible page shows exactly `expected`, in order.
pub fn assert_entry_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = entry_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected entries {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert `current_page`, `total_pages` and `filtered_count`.
pub fn assert_page(json: &Value, current: u64, total: u64, filtered: u64) -> Result<()> {
    let page = &json["content"]["page"];
    let actual = (
        page["current_page"].as_u64().context("missing current_page")?,
        page["total_pages"].as_u64().context("missing total_pages")?,
        page["filtered_count"].as_u64().context("missing filtered_count")?,
    );
    if actual != (current, total, filtered) {
        anyhow::bail!(
            "Expected page {}/{} of {} matches, got {}/{} of {}",
            current,
            total,
            filtered,
            actual.0,
            actual.1,
            actual.2
        );
    }
    Ok(())
}
