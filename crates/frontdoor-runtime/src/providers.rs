use crate::catalog::Catalog;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Source of one named catalog
///
/// Responsibilities:
/// - Report the name the catalog is registered under
/// - Produce a validated catalog on demand
pub trait CatalogProvider: Send + Sync {
    /// Registry name (e.g., "finance", "all-assets")
    fn name(&self) -> &str;

    /// Short human-readable origin, shown by `frontdoor catalogs`
    fn origin(&self) -> String;

    /// Load and validate the catalog
    fn load(&self) -> Result<Catalog>;
}

#[derive(Debug, Clone)]
pub struct BundledCatalog {
    pub name: &'static str,
    pub description: &'static str,
    source: &'static str,
}

const BUNDLED: &[BundledCatalog] = &[
    BundledCatalog {
        name: "finance",
        description: "Finance directory with seeded favorites",
        source: include_str!("../catalogs/finance.json"),
    },
    BundledCatalog {
        name: "all-assets",
        description: "Cross-domain dashboards and explores",
        source: include_str!("../catalogs/all_assets.json"),
    },
    BundledCatalog {
        name: "finance-kpis",
        description: "Finance performance and KPI views ranked by usage",
        source: include_str!("../catalogs/finance_kpis.json"),
    },
];

pub fn bundled_catalogs() -> &'static [BundledCatalog] {
    BUNDLED
}

pub fn get_bundled(name: &str) -> Option<&'static BundledCatalog> {
    BUNDLED.iter().find(|c| c.name == name)
}

impl CatalogProvider for BundledCatalog {
    fn name(&self) -> &str {
        self.name
    }

    fn origin(&self) -> String {
        "bundled".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::parse(self.name, self.source)?;
        tracing::debug!(catalog = self.name, entries = catalog.len(), "bundled catalog loaded");
        Ok(catalog)
    }
}

/// Catalog backed by a JSON document on disk
#[derive(Debug, Clone)]
pub struct FileCatalog {
    name: String,
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Name derived from the file stem, used for ad-hoc `--file` catalogs
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for FileCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(Error::MissingCatalogFile(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let catalog = Catalog::parse(&self.name, &content)?;
        tracing::info!(
            catalog = %self.name,
            path = %self.path.display(),
            entries = catalog.len(),
            "catalog file loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_catalogs_load() -> Result<()> {
        for bundled in bundled_catalogs() {
            let catalog = bundled.load()?;
            assert_eq!(catalog.name, bundled.name);
            assert!(!catalog.is_empty(), "{} is empty", bundled.name);
        }
        Ok(())
    }

    #[test]
    fn test_bundled_profiles() -> Result<()> {
        let finance = get_bundled("finance").unwrap().load()?;
        assert_eq!(finance.profile.title, "Finance");
        assert_eq!(finance.len(), 15);

        let assets = get_bundled("all-assets").unwrap().load()?;
        assert_eq!(assets.profile.preview_limit, Some(12));

        let kpis = get_bundled("finance-kpis").unwrap().load()?;
        assert_eq!(kpis.profile.default_sort, Some(frontdoor_engine::SortKey::Views));
        assert_eq!(kpis.len(), 20);
        Ok(())
    }

    #[test]
    fn test_unknown_bundled_name() {
        assert!(get_bundled("marketing").is_none());
    }

    #[test]
    fn test_file_catalog_missing() {
        let provider = FileCatalog::new("gone", "/nonexistent/frontdoor/gone.json");
        let err = provider.load().unwrap_err();
        assert!(matches!(err, Error::MissingCatalogFile(_)));
    }

    #[test]
    fn test_file_catalog_from_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("ops.json");
        std::fs::write(
            &path,
            r#"{"title": "Ops", "entries": [
                {"id": "1", "type": "Explore", "name": "Incidents", "domain": "Ops",
                 "status": "Warning", "owner": "SRE"}
            ]}"#,
        )?;

        let provider = FileCatalog::from_path(&path);
        assert_eq!(provider.name(), "ops");
        let catalog = provider.load()?;
        assert_eq!(catalog.profile.title, "Ops");
        assert_eq!(catalog.entries[0].name, "Incidents");
        Ok(())
    }
}
