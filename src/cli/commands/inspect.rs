//! Inspect command handler
//!
//! Prints the derived shape of a dataset: ring sizes, the relation map, and
//! (with `--select`) the highlight a click on one node would produce.

use logger::error;
use skillgraph::core::graph::{GraphModel, NodeCategory};
use skillgraph::core::models::Dataset;
use std::path::Path;

/// Run the inspect command.
///
/// # Arguments
/// * `input_file` - Path to the dataset file
/// * `select` - Optional node name to derive the highlight for
pub fn run(input_file: &Path, select: Option<&str>) {
    if let Err(err) = inspect_graph(input_file, select) {
        error!("Inspect failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn inspect_graph(input_file: &Path, select: Option<&str>) -> Result<(), String> {
    let dataset = Dataset::load(input_file).map_err(|e| {
        error!("Failed to load dataset {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    let model = GraphModel::build(dataset);

    println!("=== Graph ===");
    println!(
        "Competencies (inner ring): {}",
        model.catalog().competency_count()
    );
    println!("Skills (outer ring): {}", model.catalog().skill_count());
    println!("Relation edges: {}", model.relation_edges().len());
    println!("Ring edges: {}", model.ring_edges().len());
    println!();
    print!("{}", model.relations());

    if let Some(name) = select {
        let Some(selection) = model.selection_for(name) else {
            return Err(format!("✗ No node named '{name}' in the dataset"));
        };

        println!("\n=== Selection: {name} ({}) ===", selection.category);

        let state = model.display(Some(&selection));
        let ring_edge_count = model.ring_edges().len();
        let highlight_count = state.edges.len() - ring_edge_count;
        println!("Highlighted relations: {highlight_count}");

        for edge in &state.edges[..highlight_count] {
            let source = &state.nodes[edge.source].name;
            let target = &state.nodes[edge.target].name;
            println!("  {source} → {target}");
        }

        match selection.category {
            NodeCategory::Competency => {
                let lit: Vec<&str> = state
                    .nodes
                    .iter()
                    .filter(|n| {
                        n.category == NodeCategory::Skill
                            && n.item_style.color == skillgraph::core::graph::style::SKILL_FILL
                    })
                    .map(|n| n.name.as_str())
                    .collect();
                println!("Solid skills: {}", lit.join(", "));
            }
            NodeCategory::Skill => {
                let related: Vec<&str> = state
                    .nodes
                    .iter()
                    .filter(|n| {
                        n.category == NodeCategory::Competency
                            && n.item_style.color
                                == skillgraph::core::graph::style::COMPETENCY_ACCENT
                    })
                    .map(|n| n.name.as_str())
                    .collect();
                println!("Related competencies: {}", related.join(", "));
            }
        }
    }

    Ok(())
}
