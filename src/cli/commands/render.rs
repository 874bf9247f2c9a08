//! Render command handler
//!
//! Loads a competency dataset, derives the graph model, and writes the
//! visualization in the requested format (interactive HTML or JSON).

use logger::{error, info};
use skillgraph::config::Config;
use skillgraph::core::{
    graph::GraphModel,
    models::Dataset,
    render::{HtmlRenderer, JsonRenderer, OutputFormat, RenderContext, Renderer},
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// # Arguments
/// * `input_file` - Path to the dataset file
/// * `output_file` - Optional output path
/// * `format_str` - Output format (html, json)
/// * `title` - Optional page title
/// * `config` - Configuration containing the default output directory
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) {
    if let Err(err) = render_graph(input_file, output_file, format_str, title, config) {
        error!("Render failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

/// Load the dataset and derive the full graph model
fn prepare_model(input_file: &Path) -> Result<GraphModel, String> {
    let dataset = Dataset::load(input_file).map_err(|e| {
        error!("Failed to load dataset {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!("Dataset loaded: {}", input_file.display());

    Ok(GraphModel::build(dataset))
}

/// Write the rendered graph to a file in the specified format
fn write_render(
    model: &GraphModel,
    title: &str,
    format: OutputFormat,
    output_path: &Path,
) -> Result<(), String> {
    let ctx = RenderContext::new(model, title);

    match format {
        OutputFormat::Html => {
            let renderer = HtmlRenderer::new();
            renderer
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate HTML visualization: {e}"))?;
        }
        OutputFormat::Json => {
            let renderer = JsonRenderer::new();
            renderer
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate JSON export: {e}"))?;
        }
    }

    Ok(())
}

/// Print a summary of the rendered graph
fn print_summary(model: &GraphModel) {
    println!("\n=== Summary ===");
    println!("Competencies: {}", model.catalog().competency_count());
    println!("Skills: {}", model.catalog().skill_count());
    println!("Relation edges: {}", model.relation_edges().len());
    println!("Ring edges: {}", model.ring_edges().len());
}

fn render_graph(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        OutputFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: html or json"))?;

    // Load the dataset and derive the model
    let model = prepare_model(input_file)?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("skills")
        .to_string();

    let title = title.unwrap_or(&stem);

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let renders_dir = PathBuf::from(&config.paths.renders_dir);
        std::fs::create_dir_all(&renders_dir).map_err(|e| {
            format!(
                "✗ Failed to create renders directory {}: {e}",
                renders_dir.display()
            )
        })?;

        let output_filename = format!("{stem}_graph.{}", format.extension());
        renders_dir.join(output_filename)
    };

    // Write the visualization
    write_render(&model, title, format, &final_output_path)?;

    println!("✓ Graph rendered: {}", final_output_path.display());
    info!("Graph exported to: {}", final_output_path.display());

    print_summary(&model);

    Ok(())
}
