mod catalog;
mod config;

pub use catalog::*;
pub use config::*;
