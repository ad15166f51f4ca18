use frontdoor_types::{Dimension, FilterValue, contains_ignore_case};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::CatalogItem;

/// Active dimension filters. Dimensions not present are at the `all` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    active: BTreeMap<Dimension, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSelection::set`]
    pub fn with(mut self, dimension: Dimension, value: impl Into<FilterValue>) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn set(&mut self, dimension: Dimension, value: impl Into<FilterValue>) {
        match value.into() {
            FilterValue::All => {
                self.active.remove(&dimension);
            }
            FilterValue::Is(v) => {
                self.active.insert(dimension, v);
            }
        }
    }

    pub fn get(&self, dimension: Dimension) -> FilterValue {
        self.active
            .get(&dimension)
            .map(|v| FilterValue::Is(v.clone()))
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active (non-`all`) selections in dimension order
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &str)> {
        self.active.iter().map(|(d, v)| (*d, v.as_str()))
    }

    /// True iff the item matches every active dimension.
    ///
    /// An item that does not carry a dimension at all never matches an active
    /// filter on it.
    pub fn matches<T: CatalogItem + ?Sized>(&self, item: &T) -> bool {
        self.active
            .iter()
            .all(|(dimension, value)| item.facet(*dimension) == Some(value.as_str()))
    }
}

/// Free-text query matched as a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Also search the domain label
    #[serde(default)]
    pub include_domain: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            include_domain: false,
        }
    }

    pub fn including_domain(mut self) -> Self {
        self.include_domain = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches<T: CatalogItem + ?Sized>(&self, item: &T) -> bool {
        if self.text.is_empty() {
            return true;
        }
        contains_ignore_case(item.name(), &self.text)
            || contains_ignore_case(item.description(), &self.text)
            || (self.include_domain
                && item
                    .facet(Dimension::Domain)
                    .is_some_and(|d| contains_ignore_case(d, &self.text)))
    }
}
