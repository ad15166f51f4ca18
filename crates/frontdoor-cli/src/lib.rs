// NOTE: frontdoor Architecture
//
// Engine vs. runtime vs. CLI
// - frontdoor-engine owns view state and is pure: every intent recomputes the
//   filtered page synchronously, nothing there touches disk or the terminal
// - frontdoor-runtime resolves config and turns catalog documents into views
// - this crate only parses flags into intents and renders view models
//
// Favorites are session state. `list --toggle-favorite` and the browser
// start from the catalog's seeded favorites every time; nothing is written back.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{CatalogArgs, Cli, Commands, ConfigCommand, FilterArgs, PageArgs, ViewModeArgs};
pub use commands::run;
