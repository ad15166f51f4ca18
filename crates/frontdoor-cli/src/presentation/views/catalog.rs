use std::fmt;

use crate::presentation::formatters::{
    cell, count_or_dash, favorite_marker, paint_bold, paint_dim, paint_tone,
};
use crate::presentation::view_models::{
    CatalogListViewModel, CatalogPageViewModel, CreateView, DomainTreeViewModel,
    EntryRowViewModel, FacetListViewModel, Tone, ViewMode,
};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 40;
const TYPE_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 11;

// --------------------------------------------------------
// Catalog Page View
// --------------------------------------------------------

pub struct CatalogPageView<'a> {
    data: &'a CatalogPageViewModel,
    mode: ViewMode,
    color: bool,
}

impl<'a> CatalogPageView<'a> {
    pub fn new(data: &'a CatalogPageViewModel, mode: ViewMode, color: bool) -> Self {
        Self { data, mode, color }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(f, "{}", entry.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(
                f,
                "{} {} {} [{}]",
                favorite_marker(entry.is_favorite),
                entry.id,
                entry.name,
                paint_tone(&entry.status, entry.tone, self.color)
            )?;
        }
        let page = &self.data.page;
        writeln!(
            f,
            "-- page {}/{} ({} matches)",
            page.current_page, page.total_pages, page.filtered_count
        )
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(
            f,
            "{} ({})",
            paint_bold(&data.title, self.color),
            data.catalog
        )?;
        writeln!(
            f,
            "Page {} of {} · {} of {} entries",
            data.page.current_page,
            data.page.total_pages,
            data.page.filtered_count,
            data.page.total_count
        )?;

        let active: Vec<String> = data
            .active_filters()
            .map(|(dimension, value)| format!("{}={}", dimension, value))
            .collect();
        if !active.is_empty() {
            writeln!(f, "Filters: {}", active.join(", "))?;
        }
        if !data.query.is_empty() {
            write!(f, "Query: \"{}\"", data.query)?;
            if data.search_domain {
                write!(f, " (incl. domain)")?;
            }
            writeln!(f)?;
        }
        if data.sort != "none" {
            writeln!(f, "Sort: {}", data.sort)?;
        }
        Ok(())
    }

    fn render_row(&self, f: &mut fmt::Formatter, entry: &EntryRowViewModel) -> fmt::Result {
        let marker = favorite_marker(entry.is_favorite);
        let marker = if self.color && entry.is_favorite {
            paint_tone(marker, Tone::Attention, true)
        } else {
            marker.to_string()
        };
        writeln!(
            f,
            "{} {}  {}  {}  {}  {}",
            marker,
            cell(&entry.id, ID_WIDTH),
            cell(&entry.name, NAME_WIDTH),
            cell(&entry.kind, TYPE_WIDTH),
            paint_tone(&cell(&entry.status, STATUS_WIDTH), entry.tone, self.color),
            entry.owner
        )
    }

    fn render_details(&self, f: &mut fmt::Formatter, entry: &EntryRowViewModel) -> fmt::Result {
        let indent = " ".repeat(ID_WIDTH + 4);
        if !entry.description.is_empty() {
            writeln!(f, "{}{}", indent, paint_dim(&entry.description, self.color))?;
        }

        let mut taxonomy = entry.domain.clone();
        if let Some(sub) = &entry.subdomain {
            taxonomy.push_str(&format!(" / {}", sub));
        }
        if let Some(env) = &entry.environment {
            taxonomy.push_str(&format!(" · env {}", env));
        }
        if let Some(access) = &entry.access {
            taxonomy.push_str(&format!(" · access {}", access));
        }
        writeln!(f, "{}{}", indent, taxonomy)?;

        if entry.views.is_some() || entry.favorite_count.is_some() || entry.last_updated.is_some()
        {
            writeln!(
                f,
                "{}views {} · favorites {} · updated {}",
                indent,
                count_or_dash(entry.views),
                count_or_dash(entry.favorite_count),
                entry.last_updated.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, details: bool) -> fmt::Result {
        self.render_summary(f)?;
        writeln!(f)?;

        if self.data.entries.is_empty() {
            writeln!(f, "No entries match.")?;
        } else {
            writeln!(
                f,
                "  {}  {}  {}  {}  OWNER",
                cell("ID", ID_WIDTH),
                cell("NAME", NAME_WIDTH),
                cell("TYPE", TYPE_WIDTH),
                cell("STATUS", STATUS_WIDTH)
            )?;
            for entry in &self.data.entries {
                self.render_row(f, entry)?;
                if details {
                    self.render_details(f, entry)?;
                }
            }
        }

        if !self.data.favorites.is_empty() {
            writeln!(f)?;
            writeln!(f, "Favorites: {}", self.data.favorites.join(", "))?;
        }

        if details && let Some(preview) = &self.data.preview {
            writeln!(f)?;
            writeln!(f, "Preview (first {}):", preview.len())?;
            for entry in preview {
                writeln!(f, "  {} {}", favorite_marker(entry.is_favorite), entry.name)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CatalogPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

impl CreateView for CatalogPageViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogPageView::new(self, mode, color))
    }
}

// --------------------------------------------------------
// Facet List View
// --------------------------------------------------------

pub struct FacetListView<'a> {
    data: &'a FacetListViewModel,
    color: bool,
}

impl<'a> fmt::Display for FacetListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} ({})",
            paint_bold(&self.data.title, self.color),
            self.data.catalog
        )?;
        for facet in &self.data.facets {
            if facet.values.is_empty() {
                writeln!(f, "  {}: (none)", facet.dimension)?;
            } else {
                writeln!(f, "  {}: {}", facet.dimension, facet.values.join(", "))?;
            }
        }
        Ok(())
    }
}

impl CreateView for FacetListViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(FacetListView { data: self, color })
    }
}

// --------------------------------------------------------
// Domain Tree View
// --------------------------------------------------------

pub struct DomainTreeView<'a> {
    data: &'a DomainTreeViewModel,
    color: bool,
}

impl<'a> fmt::Display for DomainTreeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} ({})",
            paint_bold(&self.data.title, self.color),
            self.data.catalog
        )?;
        for domain in &self.data.domains {
            writeln!(f, "{}", domain.name)?;
            let last = domain.subdomains.len().saturating_sub(1);
            for (i, sub) in domain.subdomains.iter().enumerate() {
                let branch = if i == last { "└─" } else { "├─" };
                writeln!(f, "  {} {}", branch, sub)?;
            }
        }
        Ok(())
    }
}

impl CreateView for DomainTreeViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(DomainTreeView { data: self, color })
    }
}

// --------------------------------------------------------
// Catalog List View
// --------------------------------------------------------

pub struct CatalogListView<'a> {
    data: &'a CatalogListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for CatalogListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for catalog in &self.data.catalogs {
                writeln!(f, "{}", catalog.name)?;
            }
            return Ok(());
        }

        writeln!(f, "  {:<16} {:>7}  TITLE", "NAME", "ENTRIES")?;
        for catalog in &self.data.catalogs {
            let marker = if catalog.is_default { "* " } else { "  " };
            match (&catalog.title, catalog.entry_count, &catalog.error) {
                (Some(title), Some(count), _) => writeln!(
                    f,
                    "{}{:<16} {:>7}  {}  ({})",
                    marker, catalog.name, count, title, catalog.origin
                )?,
                (_, _, Some(error)) => {
                    writeln!(f, "{}{:<16} {:>7}  error: {}", marker, catalog.name, "-", error)?
                }
                _ => writeln!(f, "{}{}", marker, catalog.name)?,
            }
        }
        Ok(())
    }
}

impl CreateView for CatalogListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode, _color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogListView { data: self, mode })
    }
}
