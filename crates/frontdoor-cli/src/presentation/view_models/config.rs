use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfiguredCatalogViewModel {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub page_size: usize,
    pub default_catalog: String,
    pub search_domain: bool,
    pub catalogs: Vec<ConfiguredCatalogViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}
