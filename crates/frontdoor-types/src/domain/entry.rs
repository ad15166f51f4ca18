use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::{Access, Dimension, EntryKind, Environment, Status};

/// Opaque identifier of a catalog entry, unique within one collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One dashboard or explore listing.
///
/// Entries are read-only for the lifetime of a view; the engine filters and
/// orders them but never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    pub owner: String,

    /// View count, when the catalog tracks usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Number of users who starred this listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<u64>,
    /// Human-readable relative time, e.g. "2 days ago"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Seeds the session favorite set when a view is mounted
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_favorite: bool,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<EntryId>,
        kind: EntryKind,
        name: impl Into<String>,
        domain: impl Into<String>,
        status: impl Into<Status>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            domain: domain.into(),
            subdomain: None,
            description: String::new(),
            status: status.into(),
            environment: None,
            access: None,
            owner: owner.into(),
            views: None,
            favorite_count: None,
            last_updated: None,
            is_favorite: false,
        }
    }

    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    pub fn with_usage(mut self, views: u64, favorite_count: u64) -> Self {
        self.views = Some(views);
        self.favorite_count = Some(favorite_count);
        self
    }

    pub fn with_last_updated(mut self, label: impl Into<String>) -> Self {
        self.last_updated = Some(label.into());
        self
    }

    pub fn favorited(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Label this entry carries for a dimension, if any.
    pub fn facet(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Domain => Some(&self.domain),
            Dimension::Subdomain => self.subdomain.as_deref(),
            Dimension::Kind => Some(self.kind.label()),
            Dimension::Status => Some(self.status.label()),
            Dimension::Environment => self.environment.map(|e| e.label()),
            Dimension::Access => self.access.map(|a| a.label()),
            Dimension::Owner => Some(&self.owner),
        }
    }
}
