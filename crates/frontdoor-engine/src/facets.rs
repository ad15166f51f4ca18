//! Filter choices derived from the data.
//!
//! Dimension choices are the distinct labels observed in the source
//! collection, sorted, so a selection offered to the user always matches at
//! least one entry of the unfiltered collection.

use frontdoor_types::Dimension;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub dimension: Dimension,
    pub values: Vec<String>,
}

/// Sorted distinct labels of `dimension` across `items`.
pub fn distinct_values<'a, T, I>(items: I, dimension: Dimension) -> Vec<String>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter_map(|item| item.facet(dimension))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Choices for each requested dimension, in the requested order.
pub fn facet_options<T: CatalogItem>(items: &[T], dimensions: &[Dimension]) -> Vec<FacetOptions> {
    dimensions
        .iter()
        .map(|&dimension| FacetOptions {
            dimension,
            values: distinct_values(items, dimension),
        })
        .collect()
}

/// Domain → subdomains hierarchy. Domains without subdomains map to an empty set.
pub fn domain_tree<T: CatalogItem>(items: &[T]) -> BTreeMap<String, BTreeSet<String>> {
    let mut tree: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for item in items {
        let Some(domain) = item.facet(Dimension::Domain) else {
            continue;
        };
        let subdomains = tree.entry(domain.to_string()).or_default();
        if let Some(sub) = item.facet(Dimension::Subdomain) {
            subdomains.insert(sub.to_string());
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdoor_types::{CatalogEntry, EntryKind, HealthStatus};

    fn asset(id: &str, domain: &str, subdomain: Option<&str>, owner: &str) -> CatalogEntry {
        let entry = CatalogEntry::new(
            id,
            EntryKind::Dashboard,
            format!("Asset {}", id),
            domain,
            HealthStatus::Operational,
            owner,
        );
        match subdomain {
            Some(s) => entry.with_subdomain(s),
            None => entry,
        }
    }

    #[test]
    fn test_distinct_values_sorted_and_deduplicated() {
        let items = vec![
            asset("1", "Finance", None, "Treasury Team"),
            asset("2", "Finance", None, "AP Team"),
            asset("3", "Finance", None, "Treasury Team"),
        ];
        assert_eq!(
            distinct_values(&items, Dimension::Owner),
            vec!["AP Team".to_string(), "Treasury Team".to_string()]
        );
    }

    #[test]
    fn test_absent_facets_are_skipped() {
        let items = vec![asset("1", "Finance", None, "AP Team")];
        assert!(distinct_values(&items, Dimension::Environment).is_empty());
    }

    #[test]
    fn test_domain_tree() {
        let items = vec![
            asset("1", "Merchandising", Some("Pricing & Promotions"), "Merch"),
            asset("2", "Finance", Some("Performance & KPIs"), "FA"),
            asset("3", "Merchandising", Some("Buying & Planning"), "Merch"),
            asset("4", "Technology", None, "IT"),
        ];
        let tree = domain_tree(&items);
        let domains: Vec<_> = tree.keys().map(String::as_str).collect();
        assert_eq!(domains, vec!["Finance", "Merchandising", "Technology"]);
        let merch: Vec<_> = tree["Merchandising"].iter().map(String::as_str).collect();
        assert_eq!(merch, vec!["Buying & Planning", "Pricing & Promotions"]);
        assert!(tree["Technology"].is_empty());
    }

    #[test]
    fn test_facet_options_follow_requested_order() {
        let items = vec![asset("1", "Finance", Some("AP & AR"), "AP Team")];
        let options = facet_options(&items, &[Dimension::Owner, Dimension::Kind]);
        assert_eq!(options[0].dimension, Dimension::Owner);
        assert_eq!(options[1].values, vec!["Dashboard".to_string()]);
    }
}
