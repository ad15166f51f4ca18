use crate::{Error, Result};
use frontdoor_engine::SortKey;
use frontdoor_types::{CatalogEntry, Dimension};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Presentation parameters that travel with a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProfile {
    pub title: String,

    /// Dimensions offered as filters, in display order.
    #[serde(default = "all_dimensions")]
    pub dimensions: Vec<Dimension>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortKey>,

    /// Cap for strip-style listings that ignore pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_limit: Option<usize>,
}

fn all_dimensions() -> Vec<Dimension> {
    Dimension::ALL.to_vec()
}

impl CatalogProfile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            dimensions: all_dimensions(),
            default_sort: None,
            preview_limit: None,
        }
    }

    pub fn offers(&self, dimension: Dimension) -> bool {
        self.dimensions.contains(&dimension)
    }
}

/// On-disk shape of a catalog: the profile fields inline next to `entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(flatten)]
    pub profile: CatalogProfile,
    pub entries: Vec<CatalogEntry>,
}

/// A loaded, validated catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: String,
    pub profile: CatalogProfile,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn parse(name: &str, json: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|error| Error::Json {
                source_name: name.to_string(),
                error,
            })?;
        Self::from_document(name, document)
    }

    pub fn from_document(name: &str, document: CatalogDocument) -> Result<Self> {
        validate_entries(name, &document.entries)?;
        Ok(Self {
            name: name.to_string(),
            profile: document.profile,
            entries: document.entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entries(name: &str, entries: &[CatalogEntry]) -> Result<()> {
    let invalid = |reason: String| Error::InvalidCatalog {
        source_name: name.to_string(),
        reason,
    };

    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(invalid(format!("entry '{}' has an empty name", entry.id)));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(invalid(format!("duplicate entry id '{}'", entry.id)));
        }
    }
    Ok(())
}
