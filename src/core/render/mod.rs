//! Render module for graph output
//!
//! Provides functionality to render a derived graph model in various formats
//! (interactive HTML, JSON) from a single render context.

pub mod formats;

pub use formats::{HtmlRenderer, JsonRenderer, OutputFormat};

use crate::core::graph::GraphModel;
use std::error::Error;
use std::path::Path;

/// Data context for rendering
///
/// Aggregates everything needed to render one visualization, providing a
/// single source of truth for the output formats.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The derived graph model
    pub model: &'a GraphModel,
    /// Page/document title
    pub title: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    #[must_use]
    pub const fn new(model: &'a GraphModel, title: &'a str) -> Self {
        Self { model, title }
    }

    /// Get the number of competency nodes
    #[must_use]
    pub const fn competency_count(&self) -> usize {
        self.model.catalog().competency_count()
    }

    /// Get the number of skill nodes
    #[must_use]
    pub const fn skill_count(&self) -> usize {
        self.model.catalog().skill_count()
    }

    /// Get the number of declared relations
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.model.relation_edges().len()
    }
}

/// Trait for graph renderers
pub trait Renderer {
    /// Render the graph to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Render the graph as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &RenderContext) -> Result<String, Box<dyn Error>>;
}
