use frontdoor_types::{CatalogEntry, Dimension};

/// Shape the engine needs from a catalog entry.
///
/// Implemented for [`CatalogEntry`]; other listing shapes can plug into
/// [`crate::CatalogView`] by implementing it too.
pub trait CatalogItem {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Label for a filter dimension, `None` when the entry does not carry it
    fn facet(&self, dimension: Dimension) -> Option<&str>;

    fn views(&self) -> Option<u64> {
        None
    }

    fn favorite_count(&self) -> Option<u64> {
        None
    }

    fn last_updated(&self) -> Option<&str> {
        None
    }

    /// Whether the entry starts out favorited when a view is mounted
    fn seeded_favorite(&self) -> bool {
        false
    }
}

impl CatalogItem for CatalogEntry {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn facet(&self, dimension: Dimension) -> Option<&str> {
        CatalogEntry::facet(self, dimension)
    }

    fn views(&self) -> Option<u64> {
        self.views
    }

    fn favorite_count(&self) -> Option<u64> {
        self.favorite_count
    }

    fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    fn seeded_favorite(&self) -> bool {
        self.is_favorite
    }
}
