use crate::catalog::{Catalog, CatalogProfile};
use frontdoor_engine::{CatalogView, FacetOptions, SortKey, domain_tree};
use frontdoor_types::CatalogEntry;
use std::collections::{BTreeMap, BTreeSet};

/// Overrides applied when a catalog is mounted into a view.
#[derive(Debug, Clone, Default)]
pub struct MountOptions {
    page_size: Option<usize>,
    search_domain: Option<bool>,
    sort: Option<SortKey>,
}

impl MountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn search_domain(mut self, include_domain: bool) -> Self {
        self.search_domain = Some(include_domain);
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// Values set in `other` win over values set in `self`.
    pub fn merge(self, other: MountOptions) -> Self {
        Self {
            page_size: other.page_size.or(self.page_size),
            search_domain: other.search_domain.or(self.search_domain),
            sort: other.sort.or(self.sort),
        }
    }
}

/// A catalog mounted into an engine view, together with its profile.
pub struct CatalogSession {
    name: String,
    profile: CatalogProfile,
    view: CatalogView<CatalogEntry>,
}

impl CatalogSession {
    /// Mount with the profile's default sort unless `options` overrides it.
    pub fn mount(catalog: Catalog, default_page_size: usize, options: &MountOptions) -> Self {
        let Catalog {
            name,
            profile,
            entries,
        } = catalog;

        let page_size = options.page_size.unwrap_or(default_page_size);
        let mut view = CatalogView::new(entries, page_size);
        if let Some(include_domain) = options.search_domain {
            view.set_search_domain(include_domain);
        }
        if let Some(key) = options.sort.or(profile.default_sort) {
            view.set_sort(key);
        }

        tracing::debug!(
            catalog = %name,
            entries = view.total_count(),
            page_size = view.page_size(),
            sort = %view.state().sort,
            "catalog mounted"
        );

        Self {
            name,
            profile,
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &CatalogProfile {
        &self.profile
    }

    pub fn view(&self) -> &CatalogView<CatalogEntry> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CatalogView<CatalogEntry> {
        &mut self.view
    }

    /// Filter choices for the dimensions this catalog offers.
    pub fn facets(&self) -> Vec<FacetOptions> {
        self.view.facet_options(&self.profile.dimensions)
    }

    pub fn domain_tree(&self) -> BTreeMap<String, BTreeSet<String>> {
        domain_tree(self.view.entries())
    }

    /// Strip-style listing capped by the profile's preview limit, if any.
    pub fn preview(&self) -> Option<Vec<&CatalogEntry>> {
        self.profile
            .preview_limit
            .map(|limit| self.view.preview(limit))
    }
}
