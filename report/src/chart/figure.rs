//! Plot pieces shared by the chart builders.
//!
//! Scatter and bar charts use the traces from the `plotly` crate directly.
//! Sunburst and treemap traces are not part of it, so [`HierarchyTrace`]
//! provides them by implementing [`plotly::Trace`].

use plotly::common::Title;
use plotly::layout::{Layout, Margin};
use plotly::{Configuration, Plot, Trace};
use serde::Serialize;

/// Layout with `title` and a margin that keeps the chart flush with its
/// container.
pub fn titled_layout(title: &str) -> Layout {
    Layout::new()
        .title(Title::from(title))
        .margin(Margin::new().top(40).left(0).right(0).bottom(0))
}

/// Empty plot carrying the layout and the responsive config every chart
/// shares.
pub(crate) fn new_plot(layout: Layout) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot.set_configuration(Configuration::new().responsive(true));
    plot
}

/// Which plotly.js hierarchy chart a [`HierarchyTrace`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyKind {
    Sunburst,
    Treemap,
}

/// Sunburst or treemap trace.
///
/// Nodes are flattened: `ids[i]` has parent `parents[i]` (empty for a root).
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyTrace {
    #[serde(rename = "type")]
    kind: HierarchyKind,
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    /// `"total"`: a parent's value is the sum of its children.
    branchvalues: &'static str,
    pub marker: HierarchyMarker,
    hovertemplate: String,
}

impl HierarchyTrace {
    pub fn new(kind: HierarchyKind, hovertemplate: impl Into<String>) -> Self {
        Self {
            kind,
            ids: Vec::new(),
            labels: Vec::new(),
            parents: Vec::new(),
            values: Vec::new(),
            branchvalues: "total",
            marker: HierarchyMarker::default(),
            hovertemplate: hovertemplate.into(),
        }
    }

    /// Append one node.
    pub fn push(&mut self, id: &str, label: &str, parent: &str, value: f64) {
        self.ids.push(id.to_string());
        self.labels.push(label.to_string());
        self.parents.push(parent.to_string());
        self.values.push(value);
    }
}

impl Trace for HierarchyTrace {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Per-node colouring of a hierarchy trace. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HierarchyMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<NodeColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<&'static [(f64, &'static str)]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// Node colours: CSS strings, or numbers mapped through `colorscale`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeColors {
    Css(Vec<String>),
    Scale(Vec<f64>),
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[cfg(test)]
pub(crate) fn plot_json(plot: &Plot) -> serde_json::Value {
    serde_json::from_str(&plot.to_json()).unwrap()
}
