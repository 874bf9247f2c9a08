//! Selection highlight derivation

use super::edge::GraphEdge;
use super::node::{GraphNode, NodeCategory};
use super::style::{
    EdgeStyle, NodeStyle, COMPETENCY_ACCENT, COMPETENCY_FILL, SELECTED_BORDER_WIDTH,
    SKILL_DIMMED_FILL, SKILL_FILL,
};
use super::GraphModel;
use crate::core::models::RelationMap;
use serde::Serialize;

/// A clicked node: its name and which ring it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name of the selected node
    pub name: String,
    /// Ring the selected node belongs to
    pub category: NodeCategory,
}

impl Selection {
    /// Create a selection
    #[must_use]
    pub const fn new(name: String, category: NodeCategory) -> Self {
        Self { name, category }
    }
}

/// Complete node and edge lists for one displayed frame
///
/// A display state is always derived whole from the model and the current
/// selection; nothing is patched in place between frames, so re-deriving with
/// a new selection is also the reset path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// All graph nodes with their frame styles
    pub nodes: Vec<GraphNode>,
    /// The edges shown in this frame
    pub edges: Vec<GraphEdge>,
}

/// Derive the display state for the given selection
///
/// With no selection, nodes keep their default styles and only the ring edges
/// are shown. With a selection, every node is restyled relative to it and the
/// edge set becomes the edges touching the selection plus the permanent ring
/// edges.
#[must_use]
pub fn derive_display(model: &GraphModel, selection: Option<&Selection>) -> DisplayState {
    let Some(selection) = selection else {
        return DisplayState {
            nodes: model.nodes().to_vec(),
            edges: model.ring_edges().to_vec(),
        };
    };

    let nodes = restyle_nodes(model, selection);
    let mut edges = connected_edges(model, selection);
    edges.extend_from_slice(model.ring_edges());

    DisplayState { nodes, edges }
}

/// Restyle every node relative to the selection, starting from defaults
fn restyle_nodes(model: &GraphModel, selection: &Selection) -> Vec<GraphNode> {
    let relations = model.relations();

    model
        .nodes()
        .iter()
        .map(|node| {
            let mut node = node.clone();
            node.item_style = match node.category {
                NodeCategory::Competency => competency_style(relations, &node.name, selection),
                NodeCategory::Skill => skill_style(relations, &node.name, selection),
            };
            node
        })
        .collect()
}

/// Frame style for a competency node
///
/// Competencies declaring the selected skill turn green; the selected
/// competency itself gets a thick accent border.
fn competency_style(relations: &RelationMap, name: &str, selection: &Selection) -> NodeStyle {
    let related =
        selection.category == NodeCategory::Skill && relations.relates(name, &selection.name);
    let selected =
        selection.category == NodeCategory::Competency && name == selection.name;

    NodeStyle {
        color: if related {
            COMPETENCY_ACCENT
        } else {
            COMPETENCY_FILL
        },
        border_width: Some(if selected { SELECTED_BORDER_WIDTH } else { 0.0 }),
        border_color: Some(COMPETENCY_ACCENT),
    }
}

/// Frame style for a skill node
///
/// The selected skill and the skills of a selected competency stay solid;
/// everything else dims.
fn skill_style(relations: &RelationMap, name: &str, selection: &Selection) -> NodeStyle {
    let selected = selection.category == NodeCategory::Skill && name == selection.name;
    let lit_by_competency = selection.category == NodeCategory::Competency
        && relations.relates(&selection.name, name);

    NodeStyle {
        color: if selected || lit_by_competency {
            SKILL_FILL
        } else {
            SKILL_DIMMED_FILL
        },
        border_width: None,
        border_color: None,
    }
}

/// Build the edges touching the selection, by relation
///
/// Ordering follows declaration order: for a selected competency, its main
/// relations before its other relations; for a selected skill, declaring
/// competencies in dataset order. A name missing from the catalog yields an
/// empty set rather than an error.
fn connected_edges(model: &GraphModel, selection: &Selection) -> Vec<GraphEdge> {
    let catalog = model.catalog();
    let relations = model.relations();
    let mut edges = Vec::new();

    match selection.category {
        NodeCategory::Competency => {
            let Some(source) = catalog.competency_position(&selection.name) else {
                return edges;
            };
            if let Some(skills) = relations.skills_of(&selection.name) {
                for (skill, kind) in skills {
                    if let Some(target) = catalog.skill_node_index(skill) {
                        edges.push(GraphEdge::new(source, target, EdgeStyle::highlight(*kind)));
                    }
                }
            }
        }
        NodeCategory::Skill => {
            let Some(target) = catalog.skill_node_index(&selection.name) else {
                return edges;
            };
            if let Some(competencies) = relations.competencies_of(&selection.name) {
                for (competency, kind) in competencies {
                    if let Some(source) = catalog.competency_position(competency) {
                        edges.push(GraphEdge::new(source, target, EdgeStyle::highlight(*kind)));
                    }
                }
            }
        }
    }

    edges
}
