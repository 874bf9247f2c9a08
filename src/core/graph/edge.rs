//! Graph edge construction

use super::style::{
    EdgeStyle, MAIN_RELATION_COLOR, OTHER_RELATION_COLOR, RING_EDGE_COLOR,
};
use crate::core::models::{Dataset, RelationKind, SkillCatalog};
use serde::Serialize;

/// Stroke width of relation edges
pub const RELATION_EDGE_WIDTH: f64 = 2.0;
/// Stroke width of ring edges
pub const RING_EDGE_WIDTH: f64 = 2.35;
/// Curve amount of relation edges in the full edge set
pub const RELATION_CURVENESS: f64 = 0.6;
/// Curve amount of highlight edges
pub const HIGHLIGHT_CURVENESS: f64 = 0.3;
/// Curve amount of ring edges
pub const RING_CURVENESS: f64 = 0.1;
/// Stroke width of highlighted other-relation edges
pub const OTHER_HIGHLIGHT_WIDTH: f64 = 1.0;

/// A styled edge between two node indices, serializable straight into the
/// chart's `edges` array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    /// Source node index in the combined node list
    pub source: usize,
    /// Target node index in the combined node list
    pub target: usize,
    /// Stroke styling
    #[serde(rename = "lineStyle")]
    pub line_style: EdgeStyle,
}

impl GraphEdge {
    /// Create an edge between two node indices
    #[must_use]
    pub const fn new(source: usize, target: usize, line_style: EdgeStyle) -> Self {
        Self {
            source,
            target,
            line_style,
        }
    }

    /// True if either endpoint is the given node index
    #[must_use]
    pub const fn touches(&self, node_index: usize) -> bool {
        self.source == node_index || self.target == node_index
    }
}

impl EdgeStyle {
    /// Style of a relation edge in the full edge set
    #[must_use]
    pub const fn relation(kind: RelationKind) -> Self {
        Self {
            color: match kind {
                RelationKind::Main => MAIN_RELATION_COLOR,
                RelationKind::Other => OTHER_RELATION_COLOR,
            },
            width: RELATION_EDGE_WIDTH,
            curveness: RELATION_CURVENESS,
        }
    }

    /// Style of a relation edge while its endpoint is selected
    ///
    /// Highlight edges flatten the curve and thin the other-relation stroke so
    /// main relations stand out.
    #[must_use]
    pub const fn highlight(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Main => Self {
                color: MAIN_RELATION_COLOR,
                width: RELATION_EDGE_WIDTH,
                curveness: HIGHLIGHT_CURVENESS,
            },
            RelationKind::Other => Self {
                color: OTHER_RELATION_COLOR,
                width: OTHER_HIGHLIGHT_WIDTH,
                curveness: HIGHLIGHT_CURVENESS,
            },
        }
    }

    /// Style of a cosmetic ring edge
    #[must_use]
    pub const fn ring() -> Self {
        Self {
            color: RING_EDGE_COLOR,
            width: RING_EDGE_WIDTH,
            curveness: RING_CURVENESS,
        }
    }
}

/// Build one relation edge per declared (competency, skill) pair
///
/// Competencies are scanned in dataset order, each one's main list before its
/// other list. Pairs referencing a skill missing from the catalog are skipped;
/// with a well-formed dataset that never happens.
#[must_use]
pub fn relation_edges(dataset: &Dataset, catalog: &SkillCatalog) -> Vec<GraphEdge> {
    let mut edges = Vec::with_capacity(dataset.relation_count());

    for (source, competency) in dataset.competencies().iter().enumerate() {
        for skill in &competency.main_skills {
            if let Some(target) = catalog.skill_node_index(skill) {
                edges.push(GraphEdge::new(
                    source,
                    target,
                    EdgeStyle::relation(RelationKind::Main),
                ));
            }
        }
        for skill in &competency.other_skills {
            if let Some(target) = catalog.skill_node_index(skill) {
                edges.push(GraphEdge::new(
                    source,
                    target,
                    EdgeStyle::relation(RelationKind::Other),
                ));
            }
        }
    }

    edges
}

/// Build the cosmetic ring edges for both rings
///
/// Each entry connects to its circularly-next sibling within the same ring, so
/// a ring of size N contributes exactly N edges forming one closed cycle (a
/// ring of size 1 contributes a single self-loop).
#[must_use]
pub fn ring_edges(catalog: &SkillCatalog) -> Vec<GraphEdge> {
    let competency_count = catalog.competency_count();
    let skill_count = catalog.skill_count();
    let mut edges = Vec::with_capacity(competency_count + skill_count);

    for index in 0..competency_count {
        edges.push(GraphEdge::new(
            index,
            (index + 1) % competency_count,
            EdgeStyle::ring(),
        ));
    }

    for index in 0..skill_count {
        edges.push(GraphEdge::new(
            competency_count + index,
            competency_count + (index + 1) % skill_count,
            EdgeStyle::ring(),
        ));
    }

    edges
}
