//! Nationwide treemap of workplace enrollment by province and sub-region.

use plotly::common::Title;
use plotly::Plot;

use super::figure::{new_plot, titled_layout, ColorBar, HierarchyKind, HierarchyTrace, NodeColors};
use super::hierarchy::NodeTable;
use super::palette::BLUES;
use crate::error::{ChartError, ChartResult};
use crate::models::{EnrollmentRecord, EnrollmentType};

pub const TITLE: &str = "전국 청년 일자리(사업장 가입자) 지도";

/// Label of the single root node.
pub const ROOT_LABEL: &str = "전국";

/// Build the treemap with path `[전국, province, region name]`.
///
/// Size and colour are both the workplace count. Repeated region names
/// (one row per age bracket) merge into one leaf. Every node's colour is
/// the value-weighted mean of what it contains.
pub fn region_treemap(records: &[EnrollmentRecord]) -> ChartResult<Plot> {
    if records.is_empty() {
        return Err(ChartError::Empty("region_treemap"));
    }

    let mut table = NodeTable::default();
    for record in records {
        let workplace = record.counts.workplace as f64;
        table.add(&[ROOT_LABEL], workplace, workplace);
        table.add(&[ROOT_LABEL, record.province.as_str()], workplace, workplace);
        table.add(
            &[ROOT_LABEL, record.province.as_str(), record.region_name.as_str()],
            workplace,
            workplace,
        );
    }

    let column = EnrollmentType::Workplace.column();
    let mut trace = HierarchyTrace::new(
        HierarchyKind::Treemap,
        format!("%{{label}}<br>{column}=%{{value:,}}<extra></extra>"),
    );
    let mut colors = Vec::with_capacity(table.nodes().len());

    for node in table.nodes() {
        trace.push(&node.id, &node.label, &node.parent, node.value);
        colors.push(node.color_value());
    }

    trace.marker.colors = Some(NodeColors::Scale(colors));
    trace.marker.colorscale = Some(&BLUES[..]);
    trace.marker.showscale = Some(true);
    trace.marker.colorbar = Some(ColorBar {
        title: Title::from(column),
    });

    let mut plot = new_plot(titled_layout(TITLE));
    plot.add_trace(Box::new(trace));
    Ok(plot)
}
