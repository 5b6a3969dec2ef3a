//! Age-bracket sunburst: how each age bracket splits across enrollment types.

use std::collections::HashMap;

use plotly::Plot;

use super::figure::{new_plot, titled_layout, HierarchyKind, HierarchyTrace, NodeColors};
use super::hierarchy::NodeTable;
use super::palette::{DiscreteColors, MIXED, PASTEL};
use crate::error::{ChartError, ChartResult};
use crate::models::MeltedRecord;

pub const TITLE: &str = "연령대별 국민연금 가입 구조";

/// Build the sunburst with path `[age bracket, enrollment type]`.
///
/// Leaves are coloured by enrollment type using the Pastel palette in
/// first-seen order. An age-bracket node takes its children's colour
/// only when they all share one.
pub fn age_sunburst(melted: &[MeltedRecord]) -> ChartResult<Plot> {
    if melted.is_empty() {
        return Err(ChartError::Empty("age_sunburst"));
    }

    let mut palette = DiscreteColors::new(&PASTEL);
    let mut brackets = NodeTable::default();
    let mut leaves = NodeTable::default();
    let mut leaf_colors: HashMap<String, &str> = HashMap::new();

    for row in melted {
        let label = row.enrollment_type.column();
        let color = palette.color(label);
        let count = row.count as f64;

        brackets.add(&[row.age_bracket.as_str()], count, 0.0);
        leaves.add(&[row.age_bracket.as_str(), label], count, 0.0);
        leaf_colors.insert(format!("{}/{}", row.age_bracket, label), color);
    }

    let mut trace = HierarchyTrace::new(
        HierarchyKind::Sunburst,
        "%{label}<br>가입자수=%{value:,}<extra></extra>",
    );
    let mut colors = Vec::new();

    for bracket in brackets.nodes() {
        let mut child_colors = leaves
            .children(&bracket.id)
            .filter_map(|leaf| leaf_colors.get(&leaf.id).copied());
        let first = child_colors.next();
        let uniform = first.filter(|c| child_colors.all(|other| other == *c));

        trace.push(&bracket.id, &bracket.label, "", bracket.value);
        colors.push(uniform.unwrap_or(MIXED).to_string());
    }

    for leaf in leaves.nodes() {
        trace.push(&leaf.id, &leaf.label, &leaf.parent, leaf.value);
        colors.push(leaf_colors.get(&leaf.id).copied().unwrap_or(MIXED).to_string());
    }

    trace.marker.colors = Some(NodeColors::Css(colors));

    let mut plot = new_plot(titled_layout(TITLE));
    plot.add_trace(Box::new(trace));
    Ok(plot)
}
