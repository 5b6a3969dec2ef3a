//! plotly.js backend.

use ::plotly::Plot;
use uuid::Uuid;

use super::{ChartRenderer, MarkupFragment, ScriptInclusion};

/// Pinned plotly.js bundle.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders plots with [`Plot::to_inline_html`].
///
/// Each chart gets a fresh uuid as its element id.
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    cdn_url: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self {
            cdn_url: PLOTLY_CDN.to_string(),
        }
    }
}

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load plotly.js from a different URL.
    pub fn with_cdn_url(mut self, url: impl Into<String>) -> Self {
        self.cdn_url = url.into();
        self
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, plot: &Plot, script: ScriptInclusion) -> MarkupFragment {
        let id = Uuid::new_v4().to_string();
        let chart = plot.to_inline_html(Some(id.as_str()));

        match script {
            ScriptInclusion::Cdn => MarkupFragment::new(format!(
                "<script src=\"{}\" charset=\"utf-8\"></script>\n{chart}",
                self.cdn_url
            )),
            ScriptInclusion::Omit => MarkupFragment::new(chart),
        }
    }
}
