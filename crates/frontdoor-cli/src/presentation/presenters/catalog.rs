use frontdoor_engine::CatalogView;
use frontdoor_runtime::{Catalog, CatalogProvider, CatalogSession};
use frontdoor_types::CatalogEntry;

use crate::presentation::view_models::{
    CatalogListViewModel, CatalogPageViewModel, CatalogSummaryViewModel, CommandResultViewModel,
    DomainNodeViewModel, DomainTreeViewModel, EntryRowViewModel, FacetListViewModel,
    FacetViewModel, FilterControlViewModel, Guidance, PageInfoViewModel, StatusBadge,
};

fn present_entry(entry: &CatalogEntry, view: &CatalogView<CatalogEntry>) -> EntryRowViewModel {
    EntryRowViewModel {
        id: entry.id.to_string(),
        kind: entry.kind.label().to_string(),
        name: entry.name.clone(),
        domain: entry.domain.clone(),
        subdomain: entry.subdomain.clone(),
        description: entry.description.clone(),
        status: entry.status.label().to_string(),
        tone: entry.status.tone().into(),
        environment: entry.environment.map(|e| e.label().to_string()),
        access: entry.access.map(|a| a.label().to_string()),
        owner: entry.owner.clone(),
        views: entry.views,
        favorite_count: entry.favorite_count,
        last_updated: entry.last_updated.clone(),
        is_favorite: view.is_favorite(entry.id.as_str()),
    }
}

/// Snapshot of the visible page. Shared by `list` and the browser.
pub fn catalog_page(session: &CatalogSession) -> CatalogPageViewModel {
    let view = session.view();
    let state = view.state();

    let filters = session
        .facets()
        .into_iter()
        .map(|facet| FilterControlViewModel {
            dimension: facet.dimension.to_string(),
            selected: state
                .filters
                .get(facet.dimension)
                .as_value()
                .map(str::to_string),
            options: facet.values,
        })
        .collect();

    let entries = view
        .visible_page()
        .into_iter()
        .map(|entry| present_entry(entry, view))
        .collect();

    let preview = session.preview().map(|entries| {
        entries
            .into_iter()
            .map(|entry| present_entry(entry, view))
            .collect()
    });

    CatalogPageViewModel {
        catalog: session.name().to_string(),
        title: session.profile().title.clone(),
        query: state.query.text.clone(),
        search_domain: state.query.include_domain,
        sort: state.sort.to_string(),
        page: PageInfoViewModel {
            current_page: view.current_page(),
            total_pages: view.total_pages(),
            page_size: view.page_size(),
            filtered_count: view.filtered_count(),
            total_count: view.total_count(),
        },
        filters,
        entries,
        favorites: state
            .favorites
            .sorted_ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect(),
        preview,
    }
}

pub fn present_catalog_page(session: &CatalogSession) -> CommandResultViewModel<CatalogPageViewModel> {
    let content = catalog_page(session);
    let empty_catalog = content.page.total_count == 0;
    let no_matches = content.page.filtered_count == 0;
    let catalog = content.catalog.clone();

    let result = CommandResultViewModel::new(content);
    if empty_catalog {
        result.with_badge(StatusBadge::info("Catalog has no entries"))
    } else if no_matches {
        result
            .with_badge(StatusBadge::warning("No entries match the current filters"))
            .with_suggestion(
                Guidance::new("List without filters")
                    .with_command(format!("frontdoor list --catalog {}", catalog)),
            )
            .with_suggestion(
                Guidance::new("See which values exist")
                    .with_command(format!("frontdoor facets --catalog {}", catalog)),
            )
    } else {
        result
    }
}

pub fn present_facets(session: &CatalogSession) -> CommandResultViewModel<FacetListViewModel> {
    let facets = session
        .facets()
        .into_iter()
        .map(|facet| FacetViewModel {
            dimension: facet.dimension.to_string(),
            values: facet.values,
        })
        .collect();

    CommandResultViewModel::new(FacetListViewModel {
        catalog: session.name().to_string(),
        title: session.profile().title.clone(),
        facets,
    })
}

pub fn present_domains(session: &CatalogSession) -> CommandResultViewModel<DomainTreeViewModel> {
    let domains = session
        .domain_tree()
        .into_iter()
        .map(|(name, subdomains)| DomainNodeViewModel {
            name,
            subdomains: subdomains.into_iter().collect(),
        })
        .collect();

    CommandResultViewModel::new(DomainTreeViewModel {
        catalog: session.name().to_string(),
        title: session.profile().title.clone(),
        domains,
    })
}

/// `loaded` pairs each registered provider with its load outcome.
pub fn present_catalog_list(
    default_catalog: &str,
    loaded: Vec<(&dyn CatalogProvider, frontdoor_runtime::Result<Catalog>)>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let mut failures = 0;
    let catalogs = loaded
        .into_iter()
        .map(|(provider, outcome)| {
            let mut summary = CatalogSummaryViewModel {
                name: provider.name().to_string(),
                origin: provider.origin(),
                is_default: provider.name() == default_catalog,
                title: None,
                entry_count: None,
                error: None,
            };
            match outcome {
                Ok(catalog) => {
                    summary.title = Some(catalog.profile.title);
                    summary.entry_count = Some(catalog.entries.len());
                }
                Err(e) => {
                    failures += 1;
                    summary.error = Some(e.to_string());
                }
            }
            summary
        })
        .collect();

    let result = CommandResultViewModel::new(CatalogListViewModel { catalogs });
    if failures > 0 {
        result.with_badge(StatusBadge::warning(format!(
            "{} catalog(s) failed to load",
            failures
        )))
    } else {
        result
    }
}
