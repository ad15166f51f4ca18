//! Browser Component (page-level)
//!
//! Owns the UI-only state of the catalog browser: row selection, the focused
//! filter and the search buffer. Key presses that change the catalog view
//! come back out as `BrowserAction`s for the handler to apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use frontdoor_engine::SortKey;
use frontdoor_types::{Dimension, FilterValue};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::TableState,
};

use crate::presentation::view_models::{CatalogPageViewModel, EntryRowViewModel};
use crate::presentation::views::tui::{EntryTableView, HeaderView, StatusBarView};

/// Engine intents emitted by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    Quit,
    NextPage,
    PreviousPage,
    SetPage(i64),
    SetQuery(String),
    SetFilter(Dimension, FilterValue),
    ClearFilters,
    SetSort(SortKey),
    SetSearchDomain(bool),
    ToggleFavorite(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Normal,
    /// `original` is restored on Esc
    Search { buffer: String, original: String },
}

pub struct BrowserComponent {
    table: TableState,
    focus: usize,
    mode: InputMode,
}

impl BrowserComponent {
    pub fn new() -> Self {
        Self {
            table: TableState::default().with_selected(Some(0)),
            focus: 0,
            mode: InputMode::Normal,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, InputMode::Search { .. })
    }

    /// Handle keyboard input.
    ///
    /// Returns the intent to apply to the view, if any.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data: &CatalogPageViewModel,
    ) -> Option<BrowserAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(BrowserAction::Quit);
        }

        if self.is_searching() {
            self.handle_search(key)
        } else {
            self.handle_normal(key, data)
        }
    }

    /// Render the page over the whole frame, clamping selection and focus to
    /// the data first.
    pub fn render(&mut self, f: &mut Frame, data: &CatalogPageViewModel) {
        let area = f.area();
        let rows = data.entries.len();
        match self.table.selected() {
            _ if rows == 0 => self.table.select(None),
            Some(i) if i >= rows => self.table.select(Some(rows - 1)),
            None => self.table.select(Some(0)),
            Some(_) => {}
        }
        let focus = self.focus_index(data.filters.len());

        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

        let search_buffer = match &self.mode {
            InputMode::Search { buffer, .. } => Some(buffer.as_str()),
            InputMode::Normal => None,
        };
        f.render_widget(HeaderView::new(data, focus, search_buffer), chunks[0]);

        let table = EntryTableView::new(data);
        if table.is_empty() {
            f.render_widget(table, chunks[1]);
        } else {
            f.render_stateful_widget(table.build_table(), chunks[1], &mut self.table);
        }

        f.render_widget(StatusBarView::new(data, self.is_searching()), chunks[2]);
    }

    fn handle_normal(&mut self, key: KeyEvent, data: &CatalogPageViewModel) -> Option<BrowserAction> {
        let rows = data.entries.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(BrowserAction::Quit),

            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(rows);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::PageDown => {
                self.reset_selection();
                Some(BrowserAction::NextPage)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::PageUp => {
                self.reset_selection();
                Some(BrowserAction::PreviousPage)
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.reset_selection();
                Some(BrowserAction::SetPage(1))
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.reset_selection();
                Some(BrowserAction::SetPage(i64::MAX))
            }

            KeyCode::Char('/') => {
                self.mode = InputMode::Search {
                    buffer: data.query.clone(),
                    original: data.query.clone(),
                };
                None
            }

            KeyCode::Char(' ') | KeyCode::Char('f') => self
                .selected_entry(data)
                .map(|entry| BrowserAction::ToggleFavorite(entry.id.clone())),

            KeyCode::Tab => {
                if !data.filters.is_empty() {
                    self.focus = (self.focus_index(data.filters.len()) + 1) % data.filters.len();
                }
                None
            }
            KeyCode::BackTab => {
                if !data.filters.is_empty() {
                    let len = data.filters.len();
                    self.focus = (self.focus_index(len) + len - 1) % len;
                }
                None
            }
            KeyCode::Char(']') => self.cycle_filter(data, true),
            KeyCode::Char('[') => self.cycle_filter(data, false),
            KeyCode::Char('x') => {
                let control = data.filters.get(self.focus_index(data.filters.len()))?;
                let dimension = control.dimension.parse::<Dimension>().ok()?;
                self.reset_selection();
                Some(BrowserAction::SetFilter(dimension, FilterValue::All))
            }
            KeyCode::Char('c') => {
                self.reset_selection();
                Some(BrowserAction::ClearFilters)
            }

            KeyCode::Char('s') => {
                let current = data.sort.parse::<SortKey>().unwrap_or_default();
                self.reset_selection();
                Some(BrowserAction::SetSort(current.next()))
            }
            KeyCode::Char('d') => Some(BrowserAction::SetSearchDomain(!data.search_domain)),

            _ => None,
        }
    }

    fn handle_search(&mut self, key: KeyEvent) -> Option<BrowserAction> {
        let InputMode::Search { buffer, original } = &mut self.mode else {
            return None;
        };

        match key.code {
            KeyCode::Enter => {
                self.mode = InputMode::Normal;
                None
            }
            KeyCode::Esc => {
                let original = std::mem::take(original);
                self.mode = InputMode::Normal;
                self.reset_selection();
                Some(BrowserAction::SetQuery(original))
            }
            KeyCode::Backspace => {
                buffer.pop();
                let query = buffer.clone();
                self.reset_selection();
                Some(BrowserAction::SetQuery(query))
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                let query = buffer.clone();
                self.reset_selection();
                Some(BrowserAction::SetQuery(query))
            }
            _ => None,
        }
    }

    /// Step the focused filter through `All` and its options, wrapping.
    fn cycle_filter(&mut self, data: &CatalogPageViewModel, forward: bool) -> Option<BrowserAction> {
        let control = data.filters.get(self.focus_index(data.filters.len()))?;
        let dimension = control.dimension.parse::<Dimension>().ok()?;

        // slot 0 is All, slot i + 1 is options[i]
        let slots = control.options.len() + 1;
        let current = control
            .selected
            .as_ref()
            .and_then(|selected| control.options.iter().position(|o| o == selected))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let value = match next {
            0 => FilterValue::All,
            i => FilterValue::is(control.options[i - 1].clone()),
        };
        self.reset_selection();
        Some(BrowserAction::SetFilter(dimension, value))
    }

    fn selected_entry<'a>(&self, data: &'a CatalogPageViewModel) -> Option<&'a EntryRowViewModel> {
        let i = self.table.selected()?;
        data.entries.get(i.min(data.entries.len().checked_sub(1)?))
    }

    fn focus_index(&self, len: usize) -> usize {
        self.focus.min(len.saturating_sub(1))
    }

    fn reset_selection(&mut self) {
        self.table.select(Some(0));
    }

    fn select_next(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        let next = self
            .table
            .selected()
            .map_or(0, |i| (i + 1).min(rows - 1));
        self.table.select(Some(next));
    }

    fn select_previous(&mut self) {
        let prev = self.table.selected().map_or(0, |i| i.saturating_sub(1));
        self.table.select(Some(prev));
    }
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        FilterControlViewModel, PageInfoViewModel, Tone,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(id: &str, name: &str) -> EntryRowViewModel {
        EntryRowViewModel {
            id: id.to_string(),
            kind: "Dashboard".to_string(),
            name: name.to_string(),
            domain: "Finance".to_string(),
            subdomain: None,
            description: String::new(),
            status: "Live".to_string(),
            tone: Tone::Good,
            environment: None,
            access: None,
            owner: "Finance Team".to_string(),
            views: None,
            favorite_count: None,
            last_updated: None,
            is_favorite: false,
        }
    }

    fn screen() -> CatalogPageViewModel {
        CatalogPageViewModel {
            catalog: "finance".to_string(),
            title: "Finance".to_string(),
            query: "bud".to_string(),
            search_domain: false,
            sort: "none".to_string(),
            page: PageInfoViewModel {
                current_page: 1,
                total_pages: 2,
                page_size: 2,
                filtered_count: 3,
                total_count: 3,
            },
            filters: vec![
                FilterControlViewModel {
                    dimension: "type".to_string(),
                    selected: None,
                    options: vec!["Dashboard".to_string(), "Explore".to_string()],
                },
                FilterControlViewModel {
                    dimension: "status".to_string(),
                    selected: Some("Live".to_string()),
                    options: vec!["Live".to_string(), "Updating".to_string()],
                },
            ],
            entries: vec![entry("1", "Budget Overview"), entry("2", "Budget Detail")],
            favorites: vec![],
            preview: None,
        }
    }

    #[test]
    fn test_paging_keys_emit_intents() {
        let data = screen();
        let mut component = BrowserComponent::new();
        assert_eq!(
            component.handle_input(key(KeyCode::Right), &data),
            Some(BrowserAction::NextPage)
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('p')), &data),
            Some(BrowserAction::PreviousPage)
        );
        assert_eq!(
            component.handle_input(key(KeyCode::End), &data),
            Some(BrowserAction::SetPage(i64::MAX))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('q')), &data),
            Some(BrowserAction::Quit)
        );
    }

    #[test]
    fn test_selection_is_local_and_clamped() {
        let data = screen();
        let mut component = BrowserComponent::new();
        assert_eq!(component.handle_input(key(KeyCode::Down), &data), None);
        assert_eq!(component.handle_input(key(KeyCode::Down), &data), None);
        assert_eq!(component.selected(), Some(1));

        assert_eq!(
            component.handle_input(key(KeyCode::Char(' ')), &data),
            Some(BrowserAction::ToggleFavorite("2".to_string()))
        );

        component.handle_input(key(KeyCode::Up), &data);
        component.handle_input(key(KeyCode::Up), &data);
        assert_eq!(component.selected(), Some(0));
    }

    #[test]
    fn test_search_mode_live_query_and_cancel() {
        let data = screen();
        let mut component = BrowserComponent::new();
        assert_eq!(component.handle_input(key(KeyCode::Char('/')), &data), None);
        assert!(component.is_searching());

        assert_eq!(
            component.handle_input(key(KeyCode::Char('g')), &data),
            Some(BrowserAction::SetQuery("budg".to_string()))
        );
        // 'q' is text while searching
        assert_eq!(
            component.handle_input(key(KeyCode::Char('q')), &data),
            Some(BrowserAction::SetQuery("budgq".to_string()))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Backspace), &data),
            Some(BrowserAction::SetQuery("budg".to_string()))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Esc), &data),
            Some(BrowserAction::SetQuery("bud".to_string()))
        );
        assert!(!component.is_searching());
    }

    #[test]
    fn test_filter_cycling_wraps_through_all() {
        let data = screen();
        let mut component = BrowserComponent::new();

        assert_eq!(
            component.handle_input(key(KeyCode::Char(']')), &data),
            Some(BrowserAction::SetFilter(Dimension::Kind, FilterValue::is("Dashboard")))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('[')), &data),
            Some(BrowserAction::SetFilter(Dimension::Kind, FilterValue::is("Explore")))
        );

        component.handle_input(key(KeyCode::Tab), &data);
        // status is on "Live" (slot 1); forward goes to "Updating", then wraps to All
        assert_eq!(
            component.handle_input(key(KeyCode::Char(']')), &data),
            Some(BrowserAction::SetFilter(Dimension::Status, FilterValue::is("Updating")))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('x')), &data),
            Some(BrowserAction::SetFilter(Dimension::Status, FilterValue::All))
        );

        component.handle_input(key(KeyCode::Tab), &data);
        assert_eq!(
            component.handle_input(key(KeyCode::Char(']')), &data),
            Some(BrowserAction::SetFilter(Dimension::Kind, FilterValue::is("Dashboard")))
        );
    }

    #[test]
    fn test_sort_and_scope_toggles() {
        let data = screen();
        let mut component = BrowserComponent::new();
        assert_eq!(
            component.handle_input(key(KeyCode::Char('s')), &data),
            Some(BrowserAction::SetSort(SortKey::None.next()))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('d')), &data),
            Some(BrowserAction::SetSearchDomain(true))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('c')), &data),
            Some(BrowserAction::ClearFilters)
        );
    }

    #[test]
    fn test_favorite_on_empty_page_is_ignored() {
        let mut data = screen();
        data.entries.clear();
        let mut component = BrowserComponent::new();
        assert_eq!(component.handle_input(key(KeyCode::Char('f')), &data), None);
    }

    #[test]
    fn test_render_clamps_selection() {
        let mut data = screen();
        let mut component = BrowserComponent::new();
        component.handle_input(key(KeyCode::Down), &data);
        assert_eq!(component.selected(), Some(1));

        data.entries.truncate(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal
            .draw(|f| component.render(f, &data))
            .unwrap();
        assert_eq!(component.selected(), Some(0));

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Finance (finance)"));
        assert!(text.contains("Budget Overview"));
        assert!(text.contains("Page 1/2"));
    }

    #[test]
    fn test_render_empty_page() {
        let mut data = screen();
        data.entries.clear();
        let mut component = BrowserComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal
            .draw(|f| component.render(f, &data))
            .unwrap();
        assert_eq!(component.selected(), None);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("No entries match"));
    }
}
