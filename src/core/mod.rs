//! Core module for the data model, graph derivation, and rendering

pub mod config;
pub mod graph;
pub mod models;
pub mod render;

/// Returns the current version of the `skillgraph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
