//! JSON renderer
//!
//! Dumps the full derived model — nodes, both edge sets, and the precomputed
//! highlight states — for piping into other tooling or snapshotting in tests.

use crate::core::graph::{DisplayState, GraphEdge, GraphNode};
use crate::core::render::{RenderContext, Renderer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Serializable view of a render context
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelExport<'a> {
    title: &'a str,
    nodes: &'a [GraphNode],
    relation_edges: &'a [GraphEdge],
    ring_edges: &'a [GraphEdge],
    states: BTreeMap<String, DisplayState>,
}

/// JSON model renderer
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &RenderContext) -> Result<String, Box<dyn Error>> {
        let export = ModelExport {
            title: ctx.title,
            nodes: ctx.model.nodes(),
            relation_edges: ctx.model.relation_edges(),
            ring_edges: ctx.model.ring_edges(),
            states: ctx.model.highlight_states(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
