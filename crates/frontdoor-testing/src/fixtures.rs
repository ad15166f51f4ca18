//! Catalog documents for integration tests.

use anyhow::Result;
use serde_json::{Value, json};
use std::path::Path;

/// Write a catalog document as pretty JSON, creating parent dirs.
pub fn write_catalog(path: &Path, document: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(document)?)?;
    Ok(())
}

/// Minimal dashboard entry.
pub fn entry(id: &str, name: &str, domain: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": "Dashboard",
        "name": name,
        "domain": domain,
        "description": "",
        "status": status,
        "owner": "Test Team",
    })
}

/// `count` entries named "Report 1".."Report N" in one domain.
pub fn numbered_catalog(title: &str, count: usize) -> Value {
    let entries: Vec<Value> = (1..=count)
        .map(|i| entry(&i.to_string(), &format!("Report {}", i), "Finance", "Live"))
        .collect();
    json!({ "title": title, "entries": entries })
}

/// Two Finance entries and one Merchandising entry with mixed health.
pub fn health_catalog() -> Value {
    json!({
        "title": "Health",
        "dimensions": ["domain", "status"],
        "entries": [
            {
                "id": "a",
                "type": "Dashboard",
                "name": "Sales Performance Dashboard",
                "domain": "Finance",
                "description": "Weekly sales",
                "status": "Warning",
                "owner": "Finance Team",
                "views": 120,
            },
            {
                "id": "b",
                "type": "Explore",
                "name": "Margin Explorer",
                "domain": "Finance",
                "description": "SALES report by margin",
                "status": "Operational",
                "owner": "Finance Team",
                "views": 300,
                "is_favorite": true,
            },
            {
                "id": "c",
                "type": "Dashboard",
                "name": "Assortment Review",
                "domain": "Merchandising",
                "subdomain": "Assortment",
                "description": "",
                "status": "Critical",
                "owner": "Merch Team",
            },
        ]
    })
}
