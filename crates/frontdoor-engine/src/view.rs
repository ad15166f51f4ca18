//! Catalog view: one engine instance per mounted catalog.
//!
//! Every intent is a synchronous transition of [`ViewState`]. Intents that can
//! change the size or order of the result set (filter, query, sort, source
//! replacement) recompute the ordered result indices and re-clamp the page
//! cursor before anything reads the visible page. Paging and favorite toggles
//! never touch the result set.

use frontdoor_types::{Dimension, FilterValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::facets::{self, FacetOptions};
use crate::{CatalogItem, FavoriteSet, FilterSelection, Pagination, SearchQuery, SortKey};

/// Complete, serializable state of one view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterSelection,
    pub query: SearchQuery,
    pub sort: SortKey,
    pub pagination: Pagination,
    pub favorites: FavoriteSet,
}

pub struct CatalogView<T: CatalogItem> {
    entries: Vec<T>,
    state: ViewState,
    /// Indices into `entries` that pass the filters, in display order
    results: Vec<usize>,
}

impl<T: CatalogItem> CatalogView<T> {
    /// Mount a view over `entries`. The favorite set is seeded from the
    /// entries' own favorite flags.
    pub fn new(entries: Vec<T>, page_size: usize) -> Self {
        let favorites = entries
            .iter()
            .filter(|e| e.seeded_favorite())
            .map(|e| e.id())
            .collect();
        let state = ViewState {
            pagination: Pagination::new(page_size),
            favorites,
            ..ViewState::default()
        };
        Self::with_state(entries, state)
    }

    /// Mount a view with a previously captured state.
    pub fn with_state(entries: Vec<T>, state: ViewState) -> Self {
        let mut view = Self {
            entries,
            state,
            results: Vec::new(),
        };
        view.refresh();
        view
    }

    // --- intents ---

    pub fn set_filter(&mut self, dimension: Dimension, value: impl Into<FilterValue>) {
        self.state.filters.set(dimension, value);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.refresh();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query.text = text.into();
        self.refresh();
    }

    pub fn set_search_domain(&mut self, include_domain: bool) {
        self.state.query.include_domain = include_domain;
        self.refresh();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort = key;
        self.refresh();
    }

    pub fn set_page(&mut self, page: i64) {
        let count = self.results.len();
        self.state.pagination.go_to(page, count);
    }

    pub fn next_page(&mut self) {
        let count = self.results.len();
        self.state.pagination.next(count);
    }

    pub fn previous_page(&mut self) {
        self.state.pagination.previous();
    }

    /// Flip favorite membership of `id`. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.state.favorites.toggle(id)
    }

    /// Swap in a new source collection.
    ///
    /// Favorites the session already holds are kept; entries whose ids were
    /// not in the previous collection contribute their seed flag.
    pub fn replace_entries(&mut self, entries: Vec<T>) {
        let previous: HashSet<&str> = self.entries.iter().map(|e| e.id()).collect();
        let seeds: Vec<String> = entries
            .iter()
            .filter(|e| e.seeded_favorite() && !previous.contains(e.id()))
            .map(|e| e.id().to_string())
            .collect();
        for id in &seeds {
            self.state.favorites.insert(id);
        }
        self.entries = entries;
        self.refresh();
    }

    // --- reads ---

    pub fn visible_page(&self) -> Vec<&T> {
        let range = self.state.pagination.range(self.results.len());
        self.results[range].iter().map(|&i| &self.entries[i]).collect()
    }

    pub fn current_page(&self) -> usize {
        self.state.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.pagination.total_pages(self.results.len())
    }

    pub fn page_size(&self) -> usize {
        self.state.pagination.page_size()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.favorites.contains(id)
    }

    /// Number of entries passing the filters and query
    pub fn filtered_count(&self) -> usize {
        self.results.len()
    }

    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Filtered entries in display order, ignoring pagination
    pub fn filtered(&self) -> impl Iterator<Item = &T> {
        self.results.iter().map(|&i| &self.entries[i])
    }

    /// First `limit` filtered entries regardless of the page cursor
    pub fn preview(&self, limit: usize) -> Vec<&T> {
        self.filtered().take(limit).collect()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Choices for each dimension, derived from the full source collection
    pub fn facet_options(&self, dimensions: &[Dimension]) -> Vec<FacetOptions> {
        facets::facet_options(&self.entries, dimensions)
    }

    fn refresh(&mut self) {
        let entries = &self.entries;
        let ViewState {
            filters,
            query,
            sort,
            ..
        } = &self.state;

        let mut results: Vec<usize> = (0..entries.len())
            .filter(|&i| filters.matches(&entries[i]) && query.matches(&entries[i]))
            .collect();
        if *sort != SortKey::None {
            results.sort_by(|&a, &b| sort.compare(&entries[a], &entries[b]));
        }

        self.results = results;
        self.state.pagination.clamp(self.results.len());
    }
}
