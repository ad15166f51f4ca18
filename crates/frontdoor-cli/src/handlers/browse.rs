use crate::args::{CatalogArgs, FilterArgs, PageArgs};
use crate::presentation::presenters;
use crate::presentation::renderers::TuiRenderer;
use crate::presentation::views::tui::components::BrowserAction;
use anyhow::{Result, bail};
use frontdoor_engine::CatalogView;
use frontdoor_runtime::FrontDoor;
use frontdoor_types::CatalogEntry;
use is_terminal::IsTerminal;

pub fn handle(
    frontdoor: &FrontDoor,
    catalog: &CatalogArgs,
    filters: &FilterArgs,
    page: &PageArgs,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `frontdoor list` for piped output");
    }

    let mut session = super::open_session(frontdoor, catalog, filters, page)?;
    let initial = presenters::catalog_page(&session);

    TuiRenderer::new().run(initial, move |action| {
        apply(session.view_mut(), action);
        Ok(presenters::catalog_page(&session))
    })
}

/// Apply one browser intent to the view.
pub(crate) fn apply(view: &mut CatalogView<CatalogEntry>, action: BrowserAction) {
    tracing::debug!(?action, "browser intent");
    match action {
        BrowserAction::Quit => {}
        BrowserAction::NextPage => view.next_page(),
        BrowserAction::PreviousPage => view.previous_page(),
        BrowserAction::SetPage(n) => view.set_page(n),
        BrowserAction::SetQuery(text) => view.set_query(text),
        BrowserAction::SetFilter(dimension, value) => view.set_filter(dimension, value),
        BrowserAction::ClearFilters => view.clear_filters(),
        BrowserAction::SetSort(key) => view.set_sort(key),
        BrowserAction::SetSearchDomain(on) => view.set_search_domain(on),
        BrowserAction::ToggleFavorite(id) => {
            view.toggle_favorite(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdoor_engine::SortKey;
    use frontdoor_runtime::{CatalogProvider, CatalogSession, MountOptions, get_bundled};
    use frontdoor_types::{Dimension, FilterValue};

    fn finance() -> CatalogSession {
        let catalog = get_bundled("finance").unwrap().load().unwrap();
        CatalogSession::mount(catalog, 5, &MountOptions::new())
    }

    #[test]
    fn test_paging_intents_clamp() {
        let mut session = finance();
        let view = session.view_mut();
        let last = view.total_pages();

        apply(view, BrowserAction::SetPage(i64::MAX));
        assert_eq!(view.current_page(), last);
        apply(view, BrowserAction::NextPage);
        assert_eq!(view.current_page(), last);

        apply(view, BrowserAction::SetPage(1));
        apply(view, BrowserAction::PreviousPage);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_filter_intent_reclamps_page() {
        let mut session = finance();
        let view = session.view_mut();
        apply(view, BrowserAction::SetPage(i64::MAX));
        apply(
            view,
            BrowserAction::SetFilter(Dimension::Kind, FilterValue::is("Explore")),
        );
        assert!(view.filtered_count() <= 5);
        assert_eq!(view.current_page(), 1);

        apply(view, BrowserAction::ClearFilters);
        assert_eq!(view.filtered_count(), view.total_count());
    }

    #[test]
    fn test_favorite_intent_leaves_paging_alone() {
        let mut session = finance();
        let view = session.view_mut();
        apply(view, BrowserAction::NextPage);
        let before = view.is_favorite("3");

        apply(view, BrowserAction::ToggleFavorite("3".to_string()));
        assert_eq!(view.is_favorite("3"), !before);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_query_and_sort_intents() {
        let mut session = finance();
        let view = session.view_mut();
        apply(view, BrowserAction::SetQuery("BUDGET".to_string()));
        assert!(view.filtered_count() > 0);
        assert!(view.filtered_count() < view.total_count());

        apply(view, BrowserAction::SetSort(SortKey::Views));
        assert_eq!(view.state().sort, SortKey::Views);

        apply(view, BrowserAction::Quit);
        assert_eq!(view.state().query.text, "BUDGET");
    }
}
