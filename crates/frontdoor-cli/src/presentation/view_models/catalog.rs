use serde::Serialize;

use super::common::Tone;

#[derive(Debug, Clone, Serialize)]
pub struct EntryRowViewModel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    pub description: String,
    pub status: String,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfoViewModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub total_count: usize,
}

/// One filter dropdown: the current selection and the values to choose from.
#[derive(Debug, Clone, Serialize)]
pub struct FilterControlViewModel {
    pub dimension: String,
    /// `None` means the dimension is unfiltered
    pub selected: Option<String>,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageViewModel {
    pub catalog: String,
    pub title: String,
    pub query: String,
    pub search_domain: bool,
    pub sort: String,
    pub page: PageInfoViewModel,
    pub filters: Vec<FilterControlViewModel>,
    pub entries: Vec<EntryRowViewModel>,
    pub favorites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<EntryRowViewModel>>,
}

impl CatalogPageViewModel {
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().filter_map(|f| {
            f.selected
                .as_deref()
                .map(|value| (f.dimension.as_str(), value))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetViewModel {
    pub dimension: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetListViewModel {
    pub catalog: String,
    pub title: String,
    pub facets: Vec<FacetViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainNodeViewModel {
    pub name: String,
    pub subdomains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainTreeViewModel {
    pub catalog: String,
    pub title: String,
    pub domains: Vec<DomainNodeViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummaryViewModel {
    pub name: String,
    pub origin: String,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListViewModel {
    pub catalogs: Vec<CatalogSummaryViewModel>,
}
