use crate::catalog::Catalog;
use crate::config::{Config, resolve_config_path};
use crate::providers::{CatalogProvider, FileCatalog};
use crate::registry::CatalogRegistry;
use crate::session::{CatalogSession, MountOptions};
use crate::Result;
use std::path::{Path, PathBuf};

/// Entry point for the CLI: resolved configuration plus the catalog registry.
pub struct FrontDoor {
    config: Config,
    config_path: PathBuf,
    registry: CatalogRegistry,
}

impl FrontDoor {
    pub fn open(explicit_config: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        let config = Config::load_from(&config_path)?;
        tracing::debug!(path = %config_path.display(), "config resolved");
        Ok(Self::with_config(config, config_path))
    }

    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        let registry = CatalogRegistry::from_config(&config, config_path.parent());
        Self {
            config,
            config_path,
            registry,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }

    /// Load a registered catalog, or the configured default when `name` is None.
    pub fn load_catalog(&self, name: Option<&str>) -> Result<Catalog> {
        let name = name.unwrap_or(&self.config.default_catalog);
        self.registry.load(name)
    }

    pub fn load_file(&self, path: &Path) -> Result<Catalog> {
        FileCatalog::from_path(path).load()
    }

    /// Mount a catalog with config defaults, then `options` on top.
    pub fn mount(&self, catalog: Catalog, options: MountOptions) -> CatalogSession {
        let options = if self.config.search_domain {
            MountOptions::new().search_domain(true).merge(options)
        } else {
            options
        };
        CatalogSession::mount(catalog, self.config.page_size, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        let frontdoor = FrontDoor::open(path.to_str())?;

        assert_eq!(frontdoor.config(), &Config::default());
        assert_eq!(frontdoor.config_path(), path.as_path());
        assert_eq!(frontdoor.load_catalog(None)?.name, "finance");
        Ok(())
    }

    #[test]
    fn test_config_page_size_and_default_catalog() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "page_size = 4\ndefault_catalog = \"all-assets\"\nsearch_domain = true\n",
        )?;

        let frontdoor = FrontDoor::open(path.to_str())?;
        let catalog = frontdoor.load_catalog(None)?;
        assert_eq!(catalog.name, "all-assets");

        let session = frontdoor.mount(catalog, MountOptions::new());
        assert_eq!(session.view().page_size(), 4);
        assert_eq!(session.view().total_pages(), 3);
        assert!(session.view().state().query.include_domain);
        Ok(())
    }

    #[test]
    fn test_explicit_options_beat_config() -> Result<()> {
        let config = Config {
            search_domain: true,
            ..Config::default()
        };
        let frontdoor = FrontDoor::with_config(config, PathBuf::from("/tmp/unused.toml"));
        let catalog = frontdoor.load_catalog(Some("finance"))?;
        let session = frontdoor.mount(catalog, MountOptions::new().search_domain(false).page_size(3));

        assert!(!session.view().state().query.include_domain);
        assert_eq!(session.view().page_size(), 3);
        Ok(())
    }
}
