// Views own layout and styling for text output; the browser widgets live in `tui`.

pub mod catalog;
pub mod config;
pub mod tui;

pub use catalog::*;
pub use config::*;
