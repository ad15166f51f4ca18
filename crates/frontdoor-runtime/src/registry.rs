use crate::catalog::Catalog;
use crate::config::Config;
use crate::providers::{CatalogProvider, FileCatalog, bundled_catalogs};
use crate::{Error, Result};
use std::path::Path;

/// Name → provider lookup. Configured catalogs shadow bundled ones of the
/// same name.
pub struct CatalogRegistry {
    providers: Vec<Box<dyn CatalogProvider>>,
}

impl CatalogRegistry {
    pub fn bundled() -> Self {
        let providers = bundled_catalogs()
            .iter()
            .cloned()
            .map(|c| Box::new(c) as Box<dyn CatalogProvider>)
            .collect();
        Self { providers }
    }

    /// Bundled catalogs plus `[catalogs.*]` entries; relative paths resolve
    /// against `config_dir`.
    pub fn from_config(config: &Config, config_dir: Option<&Path>) -> Self {
        let mut registry = Self::bundled();
        for (name, path) in config.catalog_paths(config_dir) {
            registry.register(Box::new(FileCatalog::new(name, path)));
        }
        registry
    }

    pub fn register(&mut self, provider: Box<dyn CatalogProvider>) {
        match self.providers.iter().position(|p| p.name() == provider.name()) {
            Some(index) => self.providers[index] = provider,
            None => self.providers.push(provider),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn CatalogProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn get(&self, name: &str) -> Option<&dyn CatalogProvider> {
        self.providers().find(|p| p.name() == name)
    }

    pub fn load(&self, name: &str) -> Result<Catalog> {
        let provider = self
            .get(name)
            .ok_or_else(|| Error::UnknownCatalog(name.to_string()))?;
        provider.load()
    }
}
