//! HTML renderer
//!
//! Generates a self-contained interactive page: the chart library draws the
//! default display state, and a click handler swaps in precomputed highlight
//! states. All graph logic runs here at render time; the page itself only does
//! table lookups.

use crate::core::graph::style::{COMPETENCY_FILL, SKILL_FILL};
use crate::core::render::{RenderContext, Renderer};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Embedded HTML page template
const HTML_TEMPLATE: &str = include_str!("../templates/graph.html");

/// Interactive HTML renderer
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the page using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &RenderContext) -> Result<String, Box<dyn Error>> {
        let default_state = ctx.model.display(None);
        let states = ctx.model.highlight_states();

        let mut output = HTML_TEMPLATE.to_string();
        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{nodes}}", &serde_json::to_string(&default_state.nodes)?);
        output = output.replace("{{edges}}", &serde_json::to_string(&default_state.edges)?);
        output = output.replace("{{states}}", &serde_json::to_string(&states)?);
        output = output.replace("{{competency_fill}}", COMPETENCY_FILL);
        output = output.replace("{{skill_fill}}", SKILL_FILL);

        Ok(output)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &RenderContext) -> Result<String, Box<dyn Error>> {
        self.render_template(ctx)
    }
}
