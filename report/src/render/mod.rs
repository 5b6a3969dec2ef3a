//! Rendering of chart figures into HTML.
//!
//! Rendering is split in two so the chart backend can change without
//! touching the page:
//!
//! - [`ChartRenderer`] turns one [`Plot`] into a [`MarkupFragment`]
//! - [`template::render_document`] places the fragments into the report page

pub mod plotly;
pub mod template;

pub use self::plotly::PlotlyRenderer;
pub use template::{render_document, ReportMeta, SectionFragments};

use ::plotly::Plot;

/// Whether a fragment carries the charting library `<script>` tag.
///
/// The library must be loaded once per page, before the first chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptInclusion {
    /// Prefix the fragment with the CDN script tag.
    Cdn,
    /// Assume the library is already on the page.
    Omit,
}

/// Self-contained markup for one embedded chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupFragment(String);

impl MarkupFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chart backend.
pub trait ChartRenderer {
    /// Serialize `plot` into embeddable markup.
    fn render(&self, plot: &Plot, script: ScriptInclusion) -> MarkupFragment;
}

/// Escape text for use in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
