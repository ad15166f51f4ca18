use frontdoor_engine::{CatalogView, SortKey};
use frontdoor_types::{
    Access, CatalogEntry, Dimension, EntryKind, Environment, HealthStatus, LifecycleStatus,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize)]
struct CatalogFixture {
    entries: Vec<CatalogEntry>,
}

// Helper to load the bundled sample catalogs shipped with frontdoor-runtime
fn load_catalog(file_name: &str) -> Vec<CatalogEntry> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("frontdoor-runtime/catalogs")
        .join(file_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read catalog: {}", path.display()));
    let fixture: CatalogFixture = serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse catalog: {}", path.display()));
    fixture.entries
}

fn numbered(count: usize, kind: EntryKind) -> Vec<CatalogEntry> {
    (1..=count)
        .map(|i| {
            CatalogEntry::new(
                i.to_string(),
                kind,
                format!("Listing {:02}", i),
                "Finance",
                LifecycleStatus::Live,
                "Finance Analytics Team",
            )
        })
        .collect()
}

fn ids(page: &[&CatalogEntry]) -> Vec<String> {
    page.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_filter_conjunction_example() {
    let entries = vec![
        CatalogEntry::new(
            "a",
            EntryKind::Dashboard,
            "Budget Watch",
            "Finance",
            HealthStatus::Warning,
            "FA",
        ),
        CatalogEntry::new(
            "b",
            EntryKind::Dashboard,
            "Actuals",
            "Finance",
            HealthStatus::Operational,
            "FA",
        ),
    ];
    let mut view = CatalogView::new(entries, 10);
    view.set_filter(Dimension::Domain, "Finance");
    view.set_filter(Dimension::Status, "Warning");

    assert_eq!(view.filtered_count(), 1);
    assert_eq!(ids(&view.visible_page()), vec!["a"]);
}

#[test]
fn test_empty_query_matches_regardless_of_other_state() {
    let mut view = CatalogView::new(load_catalog("finance.json"), 10);
    view.set_query("");
    assert_eq!(view.filtered_count(), 15);

    view.set_query("explore");
    assert_eq!(view.filtered_count(), 5);
}

#[test]
fn test_pagination_clamp() {
    let mut view = CatalogView::new(numbered(24, EntryKind::Dashboard), 10);
    assert_eq!(view.total_pages(), 3);

    view.set_page(5);
    assert_eq!(view.current_page(), 3);
    assert_eq!(view.visible_page().len(), 4);

    view.set_page(0);
    assert_eq!(view.current_page(), 1);
    view.set_page(-1);
    assert_eq!(view.current_page(), 1);
}

#[test]
fn test_narrowing_filter_reclamps_page() {
    let mut entries = numbered(24, EntryKind::Dashboard);
    for entry in entries.iter_mut().take(5) {
        entry.kind = EntryKind::Explore;
    }
    let mut view = CatalogView::new(entries, 10);
    view.set_page(3);
    assert_eq!(view.current_page(), 3);

    view.set_filter(Dimension::Kind, "Explore");
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.visible_page().len(), 5);
}

#[test]
fn test_query_narrowing_reclamps_page() {
    let mut view = CatalogView::new(numbered(24, EntryKind::Dashboard), 10);
    view.set_page(3);
    view.set_query("Listing 1");
    // "Listing 1" matches 10..=19
    assert_eq!(view.filtered_count(), 10);
    assert_eq!(view.current_page(), 1);
    assert!(!view.visible_page().is_empty());
}

#[test]
fn test_favorite_toggle_does_not_touch_view() {
    let mut view = CatalogView::new(numbered(24, EntryKind::Dashboard), 10);
    view.set_filter(Dimension::Kind, "Dashboard");
    view.set_page(2);
    let before_page = ids(&view.visible_page());
    let before_state = (view.current_page(), view.total_pages(), view.filtered_count());

    assert!(view.toggle_favorite("not-in-catalog"));
    assert!(view.is_favorite("not-in-catalog"));
    assert!(!view.toggle_favorite("not-in-catalog"));
    assert!(!view.is_favorite("not-in-catalog"));

    view.toggle_favorite("12");
    assert_eq!(ids(&view.visible_page()), before_page);
    assert_eq!(
        (view.current_page(), view.total_pages(), view.filtered_count()),
        before_state
    );
}

#[test]
fn test_filtering_is_stable() {
    let mut view = CatalogView::new(load_catalog("finance.json"), 20);
    view.set_filter(Dimension::Subdomain, "Budgeting & Forecasting");
    assert_eq!(
        ids(&view.visible_page()),
        vec!["1", "2", "3", "4", "5", "7", "8", "13"]
    );
}

#[test]
fn test_finance_directory_dashboards() {
    let mut view = CatalogView::new(load_catalog("finance.json"), 10);
    view.set_filter(Dimension::Kind, "Dashboard");
    view.set_filter(Dimension::Status, "all");

    // The bundled Finance directory lists ten dashboards and five explores.
    assert_eq!(view.filtered_count(), 10);
    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.visible_page().len(), 10);

    // Seeded favorites come from the directory data.
    for id in ["2", "4", "7", "10"] {
        assert!(view.is_favorite(id), "{} should start favorited", id);
    }
}

#[test]
fn test_eleven_dashboards_span_two_pages() {
    let mut entries = load_catalog("finance.json");
    entries.push(
        CatalogEntry::new(
            "16",
            EntryKind::Dashboard,
            "Treasury Liquidity Monitor",
            "Finance",
            LifecycleStatus::Live,
            "Treasury Team",
        )
        .with_subdomain("Performance & KPIs"),
    );
    let mut view = CatalogView::new(entries, 10);
    view.set_filter(Dimension::Kind, "Dashboard");
    assert_eq!(view.filtered_count(), 11);
    assert_eq!(view.total_pages(), 2);

    let page_one = ids(&view.visible_page());
    assert_eq!(page_one.len(), 10);

    view.set_page(2);
    let page_two = ids(&view.visible_page());
    assert_eq!(page_two, vec!["16"]);

    view.toggle_favorite("16");
    assert!(view.is_favorite("16"));
    assert_eq!(ids(&view.visible_page()), page_two);
    view.set_page(1);
    assert_eq!(ids(&view.visible_page()), page_one);
}

#[test]
fn test_kpi_cards_sorted_by_views() {
    let mut view = CatalogView::new(load_catalog("finance_kpis.json"), 5);
    view.set_sort(SortKey::Views);
    let names: Vec<_> = view.visible_page().iter().map(|e| e.name.as_str()).collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    Budget vs Actuals
    Quarterly Performance Scorecard
    Financial Performance Dashboard
    Finance KPI Overview – Q3
    Variance Analysis Dashboard
    ");
}

#[test]
fn test_sort_applies_before_slicing() {
    let mut view = CatalogView::new(load_catalog("finance_kpis.json"), 5);
    view.set_page(4);
    view.set_sort(SortKey::Views);
    assert_eq!(view.current_page(), 4);
    let last_page: Vec<_> = view.visible_page().iter().map(|e| e.views).collect();
    assert_eq!(
        last_page,
        vec![Some(178), Some(167), Some(156), Some(143), Some(134)]
    );
}

#[test]
fn test_replace_entries_reclamps_and_keeps_favorites() {
    let mut view = CatalogView::new(numbered(24, EntryKind::Dashboard), 10);
    view.set_page(3);
    view.toggle_favorite("3");

    let mut fresh = numbered(6, EntryKind::Dashboard);
    fresh[4].is_favorite = true;
    view.replace_entries(fresh);

    assert_eq!(view.current_page(), 1);
    assert_eq!(view.total_pages(), 1);
    assert!(view.is_favorite("3"));
    // "5" was already present before the swap, so its seed flag is ignored
    assert!(!view.is_favorite("5"));
}

#[test]
fn test_environment_and_access_filters_with_seeded_favorites() {
    let entry = |id: &str, env: Environment, access: Access| {
        CatalogEntry::new(
            id,
            EntryKind::Dashboard,
            format!("Report {}", id),
            "Finance",
            LifecycleStatus::Live,
            "FP&A Team",
        )
        .with_environment(env)
        .with_access(access)
    };
    let entries = vec![
        entry("p-view", Environment::Production, Access::Viewer),
        entry("p-edit", Environment::Production, Access::Editor).favorited(),
        entry("qa-edit", Environment::Qa, Access::Editor),
    ];
    let mut view = CatalogView::new(entries, 10);
    assert!(view.is_favorite("p-edit"));
    assert!(!view.is_favorite("p-view"));

    view.set_filter(Dimension::Environment, "QA");
    assert_eq!(ids(&view.visible_page()), vec!["qa-edit"]);

    view.set_filter(Dimension::Environment, "all");
    view.set_filter(Dimension::Access, "Editor");
    assert_eq!(ids(&view.visible_page()), vec!["p-edit", "qa-edit"]);
}

#[test]
fn test_empty_collection_is_an_empty_page() {
    let mut view: CatalogView<CatalogEntry> = CatalogView::new(Vec::new(), 10);
    view.set_page(3);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.total_pages(), 1);
    assert!(view.visible_page().is_empty());
}

#[test]
fn test_state_round_trips_through_json() {
    let mut view = CatalogView::new(load_catalog("finance.json"), 10);
    view.set_filter(Dimension::Owner, "Finance Analytics Team");
    view.set_query("budget");
    view.toggle_favorite("8");

    let json = serde_json::to_string(view.state()).unwrap();
    let restored = CatalogView::with_state(
        load_catalog("finance.json"),
        serde_json::from_str(&json).unwrap(),
    );
    assert_eq!(restored.state(), view.state());
    assert_eq!(ids(&restored.visible_page()), ids(&view.visible_page()));
}
