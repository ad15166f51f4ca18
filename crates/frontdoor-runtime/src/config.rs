use crate::{Error, Result};
use frontdoor_engine::Pagination;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "FRONTDOOR_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FRONTDOOR_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.frontdoor/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("frontdoor").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".frontdoor").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Extra catalog registered from a JSON document on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_size: usize,
    pub default_catalog: String,
    pub search_domain: bool,
    pub catalogs: BTreeMap<String, CatalogSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: Pagination::DEFAULT_PAGE_SIZE,
            default_catalog: "finance".to_string(),
            search_domain: false,
            catalogs: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), catalogs = config.catalogs.len(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn set_catalog(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.catalogs
            .insert(name.into(), CatalogSource { path: path.into() });
    }

    /// Catalog file paths, relative entries resolved against `base`.
    pub fn catalog_paths(&self, base: Option<&Path>) -> Vec<(&str, PathBuf)> {
        self.catalogs
            .iter()
            .map(|(name, source)| {
                let raw = source.path.to_string_lossy();
                let path = expand_tilde(&raw);
                let path = match base {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path,
                };
                (name.as_str(), path)
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.default_catalog.trim().is_empty() {
            return Err(Error::Config("default_catalog must not be empty".to_string()));
        }
        Ok(())
    }
}
