mod context;

pub mod browse;
pub mod catalogs;
pub mod config;
pub mod domains;
pub mod facets;
pub mod list;

pub use context::HandlerContext;

use crate::args::{CatalogArgs, FilterArgs, PageArgs};
use anyhow::Result;
use frontdoor_runtime::{Catalog, CatalogSession, FrontDoor, MountOptions};

fn load_catalog(frontdoor: &FrontDoor, args: &CatalogArgs) -> Result<Catalog> {
    let catalog = match &args.file {
        Some(path) => frontdoor.load_file(path)?,
        None => frontdoor.load_catalog(args.catalog.as_deref())?,
    };
    Ok(catalog)
}

/// Mount the requested catalog and replay the command-line intents on it.
///
/// Order matters only for the page: filters and the query narrow first, then
/// the requested page is clamped against the narrowed result.
fn open_session(
    frontdoor: &FrontDoor,
    catalog: &CatalogArgs,
    filters: &FilterArgs,
    page: &PageArgs,
) -> Result<CatalogSession> {
    let mut options = MountOptions::new();
    if let Some(size) = page.page_size {
        options = options.page_size(size);
    }
    if let Some(sort) = page.sort {
        options = options.sort(sort.into());
    }
    if filters.search_domain {
        options = options.search_domain(true);
    }

    let mut session = frontdoor.mount(load_catalog(frontdoor, catalog)?, options);
    let view = session.view_mut();
    for (dimension, value) in filters.selections() {
        view.set_filter(dimension, value);
    }
    if let Some(query) = &filters.query {
        view.set_query(query.as_str());
    }
    if let Some(n) = page.page {
        view.set_page(n);
    }

    tracing::debug!(
        catalog = session.name(),
        filtered = session.view().filtered_count(),
        page = session.view().current_page(),
        "session opened"
    );
    Ok(session)
}

/// Session with only the catalog selected (facets, domains).
fn open_catalog(frontdoor: &FrontDoor, catalog: &CatalogArgs) -> Result<CatalogSession> {
    Ok(frontdoor.mount(load_catalog(frontdoor, catalog)?, MountOptions::new()))
}
