pub mod catalog;
pub mod common;
pub mod config;
pub mod result;

use std::fmt;

pub use catalog::*;
pub use common::{Guidance, StatusBadge, StatusLevel, Tone, ViewMode};
pub use config::*;
pub use result::CommandResultViewModel;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode, color: bool) -> Box<dyn fmt::Display + 'a>;
}
