//! Ratatui widgets for the catalog browser.
//!
//! Widgets are stateless renderings of `CatalogPageViewModel`; selection and
//! focus come in from `components::BrowserComponent`.

pub mod components;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::formatters::favorite_marker;
use crate::presentation::view_models::{CatalogPageViewModel, Tone};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Attention => Color::Yellow,
        Tone::Bad => Color::Red,
    }
}

// --------------------------------------------------------
// Header: title, query, sort and filter chips
// --------------------------------------------------------

pub struct HeaderView<'a> {
    data: &'a CatalogPageViewModel,
    focus: usize,
    search_buffer: Option<&'a str>,
}

impl<'a> HeaderView<'a> {
    pub fn new(data: &'a CatalogPageViewModel, focus: usize, search_buffer: Option<&'a str>) -> Self {
        Self {
            data,
            focus,
            search_buffer,
        }
    }

    fn search_line(&self) -> Line<'a> {
        let label = Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD));
        let scope = if self.data.search_domain {
            " (name, description, domain)"
        } else {
            " (name, description)"
        };
        match self.search_buffer {
            Some(buffer) => Line::from(vec![
                label,
                Span::styled(
                    format!("{}▏", buffer),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(scope),
            ]),
            None => Line::from(vec![
                label,
                Span::raw(if self.data.query.is_empty() {
                    "-".to_string()
                } else {
                    format!("\"{}\"", self.data.query)
                }),
                Span::raw(scope),
                Span::raw(format!("   Sort: {}", self.data.sort)),
            ]),
        }
    }

    fn filter_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            "Filters: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for (i, control) in self.data.filters.iter().enumerate() {
            let value = control.selected.as_deref().unwrap_or("All");
            let text = format!("{}: {}", control.dimension, value);
            let mut style = Style::default();
            if control.selected.is_some() {
                style = style.fg(Color::Cyan);
            }
            if i == self.focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ({}) ", self.data.title, self.data.catalog);
        let lines = vec![self.search_line(), self.filter_line()];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}

// --------------------------------------------------------
// Entry table
// --------------------------------------------------------

pub struct EntryTableView<'a> {
    data: &'a CatalogPageViewModel,
}

impl<'a> EntryTableView<'a> {
    pub fn new(data: &'a CatalogPageViewModel) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["", "ID", "NAME", "TYPE", "STATUS", "OWNER"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .data
            .entries
            .iter()
            .map(|entry| {
                Row::new(vec![
                    Cell::from(favorite_marker(entry.is_favorite))
                        .style(Style::default().fg(Color::Yellow)),
                    Cell::from(entry.id.clone()),
                    Cell::from(entry.name.clone()),
                    Cell::from(entry.kind.clone()),
                    Cell::from(entry.status.clone())
                        .style(Style::default().fg(tone_color(entry.tone))),
                    Cell::from(entry.owner.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(26),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}

impl Widget for EntryTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_empty() {
            Paragraph::new("No entries match the current filters.  c clears them.")
                .block(Block::default().borders(Borders::ALL))
                .render(area, buf);
        } else {
            Widget::render(self.build_table(), area, buf);
        }
    }
}

// --------------------------------------------------------
// Status bar: page counter and key help
// --------------------------------------------------------

pub struct StatusBarView<'a> {
    data: &'a CatalogPageViewModel,
    searching: bool,
}

impl<'a> StatusBarView<'a> {
    pub fn new(data: &'a CatalogPageViewModel, searching: bool) -> Self {
        Self { data, searching }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = &self.data.page;
        let counter = format!(
            "Page {}/{} · {} of {} · ★ {}",
            page.current_page,
            page.total_pages,
            page.filtered_count,
            page.total_count,
            self.data.favorites.len()
        );
        let help = if self.searching {
            "type to search · enter keep · esc cancel"
        } else {
            "q quit · / search · ←/→ page · space favorite · tab/[ ] filter · x reset · c clear · s sort · d domain"
        };
        let line = Line::from(vec![
            Span::styled(counter, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled(help, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{EntryRowViewModel, PageInfoViewModel};

    fn row(id: &str, name: &str) -> EntryRowViewModel {
        EntryRowViewModel {
            id: id.to_string(),
            kind: "Explore".to_string(),
            name: name.to_string(),
            domain: "Sales".to_string(),
            subdomain: None,
            description: String::new(),
            status: "Live".to_string(),
            tone: Tone::Good,
            environment: None,
            access: None,
            owner: "Sales Ops".to_string(),
            views: None,
            favorite_count: None,
            last_updated: None,
            is_favorite: false,
        }
    }

    fn page(entries: Vec<EntryRowViewModel>) -> CatalogPageViewModel {
        let count = entries.len();
        CatalogPageViewModel {
            catalog: "sales".to_string(),
            title: "Sales".to_string(),
            query: String::new(),
            search_domain: false,
            sort: "none".to_string(),
            page: PageInfoViewModel {
                current_page: 1,
                total_pages: 1,
                page_size: 10,
                filtered_count: count,
                total_count: count,
            },
            filters: vec![],
            entries,
            favorites: vec![],
            preview: None,
        }
    }

    fn draw(data: &CatalogPageViewModel) -> String {
        let area = Rect::new(0, 0, 100, 6);
        let mut buf = Buffer::empty(area);
        EntryTableView::new(data).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_table_draws_rows() {
        let data = page(vec![row("41", "Pipeline Explorer"), row("42", "Quota Attainment")]);
        let text = draw(&data);
        assert!(text.contains("NAME"));
        assert!(text.contains("Pipeline Explorer"));
        assert!(text.contains("Quota Attainment"));
        assert!(!text.contains("No entries match"));
    }

    #[test]
    fn test_table_placeholder_when_empty() {
        let text = draw(&page(vec![]));
        assert!(text.contains("No entries match the current filters."));
        assert!(!text.contains("NAME"));
    }
}
