//! Testing infrastructure for frontdoor integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Assertions over the JSON view models the CLI emits
//! - `fixtures`: Catalog documents and config files written into the world

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
