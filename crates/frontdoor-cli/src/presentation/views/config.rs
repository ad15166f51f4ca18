use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, CreateView, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        write!(f, "# {}", data.path)?;
        if !data.exists {
            write!(f, " (not found)")?;
        }
        writeln!(f)?;
        writeln!(f, "page_size = {}", data.page_size)?;
        writeln!(f, "default_catalog = \"{}\"", data.default_catalog)?;
        writeln!(f, "search_domain = {}", data.search_domain)?;
        for catalog in &data.catalogs {
            writeln!(f)?;
            writeln!(f, "[catalogs.{}]", catalog.name)?;
            writeln!(f, "path = \"{}\"", catalog.path)?;
        }
        Ok(())
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode, _color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.overwritten {
            writeln!(f, "Overwrote {}", self.data.path)
        } else {
            writeln!(f, "Created {}", self.data.path)
        }
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode, _color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}
