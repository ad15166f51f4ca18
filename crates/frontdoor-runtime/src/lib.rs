// Runtime layer - loads catalogs and mounts them into engine views
// Config and provider lookup live here so the engine stays free of I/O.

pub mod catalog;
pub mod config;
pub mod error;
pub mod providers;
pub mod registry;
pub mod session;
pub mod workspace;

pub use catalog::{Catalog, CatalogDocument, CatalogProfile};
pub use config::{CONFIG_ENV, CatalogSource, Config, resolve_config_path};
pub use error::{Error, Result};
pub use providers::{BundledCatalog, CatalogProvider, FileCatalog, bundled_catalogs, get_bundled};
pub use registry::CatalogRegistry;
pub use session::{CatalogSession, MountOptions};
pub use workspace::FrontDoor;
