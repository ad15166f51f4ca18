//! # Presentation Layer
//!
//! An adaptation of **MVVM (Model-View-ViewModel)**, with a component for the
//! interactive browser.
//!
//! ## Data Flow
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive browser
//!
//! ```text
//! [ Handler ] --(update fn)--> [ TuiRenderer (Router) ]
//!      ^                                |
//!      |                                v
//!  BrowserAction <------------ [ BrowserComponent ] <-- key press
//!  (engine intent)               (selection, focus, search buffer)
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! View models carry counts and labels, never pre-padded or colored strings.
//! `--format json` dumps the complete view model and ignores `ViewMode`.
//!
//! ### 2. `ViewMode` is density, not shape
//! * **Minimal:** entry IDs only
//! * **Compact:** one line per entry
//! * **Standard:** table with header and page counter (default)
//! * **Verbose:** table plus description, taxonomy and usage lines
//!
//! ### 3. Component state stays in the component
//! Row selection, focused filter and the search buffer live in
//! `BrowserComponent`. Anything that changes the catalog view (page, filter,
//! query, sort, favorites) leaves the component as a `BrowserAction` and is
//! applied to the engine by the handler. Selection is clamped against the
//! current page before every render.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | **`view_models/`** |
//! | Derive totals or decide when to show guidance | **`presenters/`** |
//! | Change colors or column layout | **`views/`** |
//! | Pad or truncate a cell | **`formatters/`** |
//! | Add a key binding | **`views/tui/components/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
