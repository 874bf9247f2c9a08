//! Node and edge styling

use serde::Serialize;

/// Neutral competency fill
pub const COMPETENCY_FILL: &str = "#ADADAD";
/// Fill for a competency related to the selected skill
pub const COMPETENCY_ACCENT: &str = "#00A372";
/// Solid skill fill (default ring color and highlighted skills)
pub const SKILL_FILL: &str = "#FF7A00";
/// Dimmed fill for skills outside the current selection
pub const SKILL_DIMMED_FILL: &str = "#FFD4AD";
/// Main relation edge color (matches the solid skill fill)
pub const MAIN_RELATION_COLOR: &str = "#FF7A00";
/// Other relation edge color
pub const OTHER_RELATION_COLOR: &str = "#8F59B9";
/// Ring edge color (matches the neutral competency fill)
pub const RING_EDGE_COLOR: &str = "#ADADAD";

/// Border width drawn around the selected competency
pub const SELECTED_BORDER_WIDTH: f64 = 10.0;

/// Visual style of a graph node, shaped like the chart library's `itemStyle`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Fill color
    pub color: &'static str,

    /// Border width; omitted when the node never carries a border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,

    /// Border color; only set while a selection is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
}

impl NodeStyle {
    /// Default competency style: neutral fill, no border
    #[must_use]
    pub const fn competency_default() -> Self {
        Self {
            color: COMPETENCY_FILL,
            border_width: Some(0.0),
            border_color: None,
        }
    }

    /// Default skill style: solid fill
    #[must_use]
    pub const fn skill_default() -> Self {
        Self {
            color: SKILL_FILL,
            border_width: None,
            border_color: None,
        }
    }
}

/// Visual style of a graph edge, shaped like the chart library's `lineStyle`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    /// Stroke color
    pub color: &'static str,
    /// Stroke width
    pub width: f64,
    /// Curve amount, 0.0 for a straight line
    pub curveness: f64,
}
