//! Graph node construction

use super::layout::{
    ring_points, Point, COMPETENCY_RING_RADIUS, COMPETENCY_SYMBOL_SIZE, SKILL_RING_RADIUS,
    SKILL_SYMBOL_SIZE,
};
use super::style::NodeStyle;
use crate::core::models::SkillCatalog;
use serde::Serialize;

/// Which ring a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Inner-ring competency node
    Competency,
    /// Outer-ring skill node
    Skill,
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Competency => write!(f, "competency"),
            Self::Skill => write!(f, "skill"),
        }
    }
}

/// A positioned, styled graph node, serializable straight into the chart's
/// `data` array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Display name, unique across the graph
    pub name: String,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Marker size
    #[serde(rename = "symbolSize")]
    pub symbol_size: f64,
    /// Fill and border styling
    #[serde(rename = "itemStyle")]
    pub item_style: NodeStyle,
    /// Ring membership tag
    pub category: NodeCategory,
}

impl GraphNode {
    /// Create a competency node with the default style
    #[must_use]
    pub const fn competency(name: String, point: Point) -> Self {
        Self {
            name,
            x: point.x,
            y: point.y,
            symbol_size: COMPETENCY_SYMBOL_SIZE,
            item_style: NodeStyle::competency_default(),
            category: NodeCategory::Competency,
        }
    }

    /// Create a skill node with the default style
    #[must_use]
    pub const fn skill(name: String, point: Point) -> Self {
        Self {
            name,
            x: point.x,
            y: point.y,
            symbol_size: SKILL_SYMBOL_SIZE,
            item_style: NodeStyle::skill_default(),
            category: NodeCategory::Skill,
        }
    }
}

/// Build the combined node list for a catalog
///
/// Competency nodes come first (indices `[0, C)`) on the inner ring, skill
/// nodes follow (indices `[C, C+S)`) on the outer ring; both rings start at
/// the 12 o'clock position.
#[must_use]
pub fn build_nodes(catalog: &SkillCatalog) -> Vec<GraphNode> {
    let mut nodes = Vec::with_capacity(catalog.node_count());

    let competency_points = ring_points(catalog.competency_count(), COMPETENCY_RING_RADIUS);
    for (name, point) in catalog.competencies().iter().zip(competency_points) {
        nodes.push(GraphNode::competency(name.clone(), point));
    }

    let skill_points = ring_points(catalog.skill_count(), SKILL_RING_RADIUS);
    for (name, point) in catalog.skills().iter().zip(skill_points) {
        nodes.push(GraphNode::skill(name.clone(), point));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Competency, Dataset};

    fn sample_catalog() -> SkillCatalog {
        let mut dataset = Dataset::new();

        let mut writing = Competency::new("Technical writing".to_string());
        writing.add_main_skill("Markdown".to_string());
        writing.add_other_skill("Diagramming".to_string());
        dataset.add_competency(writing);

        let mut review = Competency::new("Code review".to_string());
        review.add_main_skill("Git".to_string());
        dataset.add_competency(review);

        SkillCatalog::from_dataset(&dataset)
    }

    #[test]
    fn test_node_ordering_and_categories() {
        let nodes = build_nodes(&sample_catalog());

        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0].name, "Technical writing");
        assert_eq!(nodes[0].category, NodeCategory::Competency);
        assert_eq!(nodes[1].name, "Code review");
        assert_eq!(nodes[2].name, "Markdown");
        assert_eq!(nodes[2].category, NodeCategory::Skill);
        assert_eq!(nodes[4].name, "Git");
    }

    #[test]
    fn test_ring_radii_and_sizes() {
        let nodes = build_nodes(&sample_catalog());

        for node in &nodes {
            let radius = node.x.hypot(node.y);
            match node.category {
                NodeCategory::Competency => {
                    assert!((radius - COMPETENCY_RING_RADIUS).abs() < 1e-9);
                    assert!((node.symbol_size - COMPETENCY_SYMBOL_SIZE).abs() < f64::EPSILON);
                }
                NodeCategory::Skill => {
                    assert!((radius - SKILL_RING_RADIUS).abs() < 1e-9);
                    assert!((node.symbol_size - SKILL_SYMBOL_SIZE).abs() < f64::EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_node_serialization_shape() {
        let nodes = build_nodes(&sample_catalog());
        let json = serde_json::to_value(&nodes[0]).expect("Failed to serialize");

        assert_eq!(json["name"], "Technical writing");
        assert_eq!(json["category"], "competency");
        assert!(json["symbolSize"].is_number());
        assert_eq!(json["itemStyle"]["color"], "#ADADAD");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(NodeCategory::Competency.to_string(), "competency");
        assert_eq!(NodeCategory::Skill.to_string(), "skill");
    }
}
