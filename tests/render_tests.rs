//! Integration tests for the output formats

use skillgraph::core::graph::GraphModel;
use skillgraph::core::models::{Competency, Dataset};
use skillgraph::core::render::{HtmlRenderer, JsonRenderer, OutputFormat, RenderContext, Renderer};
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

fn sample_model() -> GraphModel {
    let mut dataset = Dataset::new();

    let mut support = Competency::new("Customer support".to_string());
    support.add_main_skill("Active listening".to_string());
    support.add_other_skill("Ticketing".to_string());
    dataset.add_competency(support);

    let mut sales = Competency::new("Sales".to_string());
    sales.add_main_skill("Negotiation".to_string());
    sales.add_other_skill("Active listening".to_string());
    dataset.add_competency(sales);

    GraphModel::build(dataset)
}

#[test]
fn test_html_render_is_self_contained_page() {
    let model = sample_model();
    let ctx = RenderContext::new(&model, "Support team");

    let page = HtmlRenderer::new().render(&ctx).expect("Render failed");

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Support team</title>"));
    assert!(page.contains("echarts"));
    assert!(page.contains("Customer support"));
    assert!(page.contains("Negotiation"));

    // Every placeholder must be substituted
    assert!(!page.contains("{{"));
    assert!(!page.contains("}}"));
}

#[test]
fn test_html_generate_writes_file() {
    let model = sample_model();
    let ctx = RenderContext::new(&model, "Support team");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("support_graph.html");

    HtmlRenderer::new()
        .generate(&ctx, &output_path)
        .expect("Generate failed");

    let written = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(written.contains("Support team"));
}

#[test]
fn test_json_export_round_trips_counts() {
    let model = sample_model();
    let ctx = RenderContext::new(&model, "Support team");

    let output = JsonRenderer::new().render(&ctx).expect("Render failed");
    let value: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

    // 2 competencies + 3 skills
    assert_eq!(value["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(value["relationEdges"].as_array().unwrap().len(), 4);
    assert_eq!(value["ringEdges"].as_array().unwrap().len(), 5);
    assert_eq!(value["states"].as_object().unwrap().len(), 5);
}

#[test]
fn test_json_nodes_use_chart_field_names() {
    let model = sample_model();
    let ctx = RenderContext::new(&model, "Support team");

    let output = JsonRenderer::new().render(&ctx).expect("Render failed");
    let value: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

    let first = &value["nodes"][0];
    assert!(first["symbolSize"].is_number());
    assert!(first["itemStyle"]["color"].is_string());
    assert_eq!(first["category"], "competency");

    let edge = &value["ringEdges"][0];
    assert!(edge["lineStyle"]["curveness"].is_number());
}

#[test]
fn test_render_context_counts() {
    let model = sample_model();
    let ctx = RenderContext::new(&model, "Support team");

    assert_eq!(ctx.competency_count(), 2);
    assert_eq!(ctx.skill_count(), 3);
    assert_eq!(ctx.relation_count(), 4);
}

#[test]
fn test_output_format_extensions() {
    assert_eq!(OutputFormat::from_str("html").unwrap().extension(), "html");
    assert_eq!(OutputFormat::from_str("json").unwrap().extension(), "json");
    assert!(OutputFormat::from_str("pdf").is_err());
}
