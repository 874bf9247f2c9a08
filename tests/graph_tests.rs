//! Integration tests for graph derivation
//!
//! Covers the structural properties of the derived graph: skill
//! deduplication, node index partitioning, ring cycles, highlight edge sets,
//! and exact radial coordinates.

use skillgraph::core::graph::{
    layout::{COMPETENCY_RING_RADIUS, SKILL_RING_RADIUS},
    style::{COMPETENCY_ACCENT, SKILL_DIMMED_FILL, SKILL_FILL},
    GraphModel, NodeCategory,
};
use skillgraph::core::models::{Competency, Dataset, RelationKind};
use std::collections::{HashMap, HashSet};

const TOLERANCE: f64 = 1e-9;

/// Two competencies sharing three skills between them
fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new();

    let mut design = Competency::new("Product design".to_string());
    design.add_main_skill("Research".to_string());
    design.add_main_skill("Prototyping".to_string());
    design.add_other_skill("Analytics".to_string());
    dataset.add_competency(design);

    let mut marketing = Competency::new("Growth marketing".to_string());
    marketing.add_main_skill("Analytics".to_string());
    marketing.add_other_skill("Research".to_string());
    dataset.add_competency(marketing);

    dataset
}

#[test]
fn test_every_referenced_skill_appears_exactly_once() {
    let dataset = sample_dataset();
    let model = GraphModel::build(dataset.clone());

    let mut seen = HashSet::new();
    for skill in model.catalog().skills() {
        assert!(seen.insert(skill.clone()), "duplicate skill {skill}");
    }

    for competency in dataset.competencies() {
        for skill in competency.skills() {
            assert!(
                seen.contains(skill),
                "referenced skill {skill} missing from catalog"
            );
        }
    }
}

#[test]
fn test_node_index_ranges_do_not_overlap() {
    let model = GraphModel::build(sample_dataset());
    let competency_count = model.catalog().competency_count();
    let node_count = model.catalog().node_count();

    assert_eq!(competency_count, 2);
    assert_eq!(node_count, 5);

    for (index, node) in model.nodes().iter().enumerate() {
        match node.category {
            NodeCategory::Competency => assert!(index < competency_count),
            NodeCategory::Skill => {
                assert!(index >= competency_count && index < node_count);
            }
        }
    }
}

#[test]
fn test_ring_edges_form_a_single_cycle_per_ring() {
    let model = GraphModel::build(sample_dataset());
    let competency_count = model.catalog().competency_count();

    let successors: HashMap<usize, usize> = model
        .ring_edges()
        .iter()
        .map(|e| (e.source, e.target))
        .collect();

    // No node has two outgoing ring edges
    assert_eq!(successors.len(), model.ring_edges().len());

    for (start, size) in [
        (0, competency_count),
        (competency_count, model.catalog().skill_count()),
    ] {
        let mut visited = HashSet::new();
        let mut current = start;
        loop {
            assert!(visited.insert(current), "ring revisited {current} early");
            current = successors[&current];
            if current == start {
                break;
            }
        }
        assert_eq!(visited.len(), size, "ring starting at {start}");
    }
}

#[test]
fn test_competency_click_highlights_exactly_its_relations() {
    let model = GraphModel::build(sample_dataset());
    let selection = model.selection_for("Product design").unwrap();
    let state = model.display(Some(&selection));

    let ring_edge_count = model.ring_edges().len();
    let highlighted: Vec<(usize, usize)> = state.edges[..state.edges.len() - ring_edge_count]
        .iter()
        .map(|e| (e.source, e.target))
        .collect();

    // Skills ring order: Research(2), Prototyping(3), Analytics(4)
    assert_eq!(highlighted, vec![(0, 2), (0, 3), (0, 4)]);

    // The tail is exactly the permanent ring edges
    assert_eq!(&state.edges[highlighted.len()..], model.ring_edges());
}

#[test]
fn test_skill_click_highlights_exactly_its_competencies() {
    let model = GraphModel::build(sample_dataset());
    let selection = model.selection_for("Research").unwrap();
    let state = model.display(Some(&selection));

    let ring_edge_count = model.ring_edges().len();
    let highlighted = &state.edges[..state.edges.len() - ring_edge_count];

    assert_eq!(highlighted.len(), 2);

    // Product design declares Research as main, Growth marketing as other
    assert_eq!((highlighted[0].source, highlighted[0].target), (0, 2));
    assert_eq!(
        highlighted[0].line_style,
        skillgraph::core::graph::EdgeStyle::highlight(RelationKind::Main)
    );
    assert_eq!((highlighted[1].source, highlighted[1].target), (1, 2));
    assert_eq!(
        highlighted[1].line_style,
        skillgraph::core::graph::EdgeStyle::highlight(RelationKind::Other)
    );
}

#[test]
fn test_skill_click_recolors_rings() {
    let model = GraphModel::build(sample_dataset());
    let selection = model.selection_for("Prototyping").unwrap();
    let state = model.display(Some(&selection));

    // Only Product design declares Prototyping
    assert_eq!(state.nodes[0].item_style.color, COMPETENCY_ACCENT);
    assert_ne!(state.nodes[1].item_style.color, COMPETENCY_ACCENT);

    // Selected skill stays solid, the others dim
    assert_eq!(state.nodes[3].item_style.color, SKILL_FILL);
    assert_eq!(state.nodes[2].item_style.color, SKILL_DIMMED_FILL);
    assert_eq!(state.nodes[4].item_style.color, SKILL_DIMMED_FILL);
}

#[test]
fn test_radial_coordinates_match_trigonometry() {
    let model = GraphModel::build(sample_dataset());
    let nodes = model.nodes();

    let assert_close = |actual: f64, expected: f64| {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    };

    // Two competencies at angles -π/2 and π/2 on the inner ring
    assert_close(nodes[0].x, 0.0);
    assert_close(nodes[0].y, -COMPETENCY_RING_RADIUS);
    assert_close(nodes[1].x, 0.0);
    assert_close(nodes[1].y, COMPETENCY_RING_RADIUS);

    // Three skills at angles -π/2, π/6, 5π/6 on the outer ring
    let sixth = std::f64::consts::FRAC_PI_6;
    assert_close(nodes[2].x, 0.0);
    assert_close(nodes[2].y, -SKILL_RING_RADIUS);
    assert_close(nodes[3].x, SKILL_RING_RADIUS * sixth.cos());
    assert_close(nodes[3].y, SKILL_RING_RADIUS * sixth.sin());
    assert_close(nodes[4].x, -SKILL_RING_RADIUS * sixth.cos());
    assert_close(nodes[4].y, SKILL_RING_RADIUS * sixth.sin());
}
