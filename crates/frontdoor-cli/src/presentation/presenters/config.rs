use frontdoor_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, ConfiguredCatalogViewModel,
    Guidance, StatusBadge,
};

pub fn present_config(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        page_size: config.page_size,
        default_catalog: config.default_catalog.clone(),
        search_domain: config.search_domain,
        catalogs: config
            .catalogs
            .iter()
            .map(|(name, source)| ConfiguredCatalogViewModel {
                name: name.clone(),
                path: source.path.display().to_string(),
            })
            .collect(),
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_suggestion(Guidance::new("Write one").with_command("frontdoor config init"))
    }
}

pub fn present_config_init(path: &Path, overwritten: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success("Config written"))
}
