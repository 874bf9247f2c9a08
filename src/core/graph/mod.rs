//! Graph derivation: layout, nodes, edges, and highlight states

pub mod edge;
pub mod highlight;
pub mod layout;
pub mod node;
pub mod style;

pub use edge::GraphEdge;
pub use highlight::{derive_display, DisplayState, Selection};
pub use node::{GraphNode, NodeCategory};
pub use style::{EdgeStyle, NodeStyle};

use crate::core::models::{Dataset, RelationMap, SkillCatalog};
use std::collections::BTreeMap;

/// Everything derived from one dataset, built once per render
///
/// Holds the flattened catalog, the bidirectional relation index, the
/// positioned default-styled node list, and both edge sets. Display states
/// are derived from this model on demand; the model itself never changes
/// after construction.
#[derive(Debug, Clone)]
pub struct GraphModel {
    dataset: Dataset,
    catalog: SkillCatalog,
    relations: RelationMap,
    nodes: Vec<GraphNode>,
    relation_edges: Vec<GraphEdge>,
    ring_edges: Vec<GraphEdge>,
}

impl GraphModel {
    /// Build the full graph model from a dataset
    #[must_use]
    pub fn build(dataset: Dataset) -> Self {
        let catalog = SkillCatalog::from_dataset(&dataset);
        let relations = RelationMap::from_dataset(&dataset);
        let nodes = node::build_nodes(&catalog);
        let relation_edges = edge::relation_edges(&dataset, &catalog);
        let ring_edges = edge::ring_edges(&catalog);

        Self {
            dataset,
            catalog,
            relations,
            nodes,
            relation_edges,
            ring_edges,
        }
    }

    /// Get the source dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Get the flattened catalog
    #[must_use]
    pub const fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Get the relation index
    #[must_use]
    pub const fn relations(&self) -> &RelationMap {
        &self.relations
    }

    /// Get the default-styled node list (competencies first, then skills)
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Get the full relation edge set
    #[must_use]
    pub fn relation_edges(&self) -> &[GraphEdge] {
        &self.relation_edges
    }

    /// Get the cosmetic ring edge set
    #[must_use]
    pub fn ring_edges(&self) -> &[GraphEdge] {
        &self.ring_edges
    }

    /// Resolve a bare node name to a selection
    ///
    /// Competency names take precedence over skill names; with a well-formed
    /// dataset the two never collide.
    #[must_use]
    pub fn selection_for(&self, name: &str) -> Option<Selection> {
        if self.catalog.contains_competency(name) {
            Some(Selection::new(name.to_string(), NodeCategory::Competency))
        } else if self.catalog.contains_skill(name) {
            Some(Selection::new(name.to_string(), NodeCategory::Skill))
        } else {
            None
        }
    }

    /// Derive the display state for a selection (None for the default state)
    #[must_use]
    pub fn display(&self, selection: Option<&Selection>) -> DisplayState {
        derive_display(self, selection)
    }

    /// Precompute the display state for every node name
    ///
    /// Keyed by node name in sorted order, so rendered output is
    /// deterministic for a given dataset.
    #[must_use]
    pub fn highlight_states(&self) -> BTreeMap<String, DisplayState> {
        self.nodes
            .iter()
            .filter_map(|node| {
                self.selection_for(&node.name)
                    .map(|selection| (node.name.clone(), self.display(Some(&selection))))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Competency;

    fn sample_model() -> GraphModel {
        let mut dataset = Dataset::new();

        let mut design = Competency::new("Interface design".to_string());
        design.add_main_skill("Figma".to_string());
        design.add_other_skill("HTML".to_string());
        dataset.add_competency(design);

        let mut frontend = Competency::new("Frontend development".to_string());
        frontend.add_main_skill("HTML".to_string());
        dataset.add_competency(frontend);

        GraphModel::build(dataset)
    }

    #[test]
    fn test_build_derives_everything_once() {
        let model = sample_model();

        assert_eq!(model.catalog().competency_count(), 2);
        assert_eq!(model.catalog().skill_count(), 2);
        assert_eq!(model.nodes().len(), 4);
        assert_eq!(model.relation_edges().len(), 3);
        assert_eq!(model.ring_edges().len(), 4);
    }

    #[test]
    fn test_selection_for_resolves_category() {
        let model = sample_model();

        let competency = model.selection_for("Interface design").unwrap();
        assert_eq!(competency.category, NodeCategory::Competency);

        let skill = model.selection_for("Figma").unwrap();
        assert_eq!(skill.category, NodeCategory::Skill);

        assert!(model.selection_for("Cooking").is_none());
    }

    #[test]
    fn test_highlight_states_cover_every_node() {
        let model = sample_model();
        let states = model.highlight_states();

        assert_eq!(states.len(), model.nodes().len());
        for node in model.nodes() {
            assert!(states.contains_key(&node.name));
        }
    }

    #[test]
    fn test_highlight_states_match_direct_derivation() {
        let model = sample_model();
        let states = model.highlight_states();

        let selection = model.selection_for("HTML").unwrap();
        assert_eq!(states["HTML"], model.display(Some(&selection)));
    }
}
