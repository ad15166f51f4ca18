mod browser;

pub use browser::{BrowserAction, BrowserComponent};
