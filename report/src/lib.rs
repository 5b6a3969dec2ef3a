//! # Pension Report - youth pension enrollment statistics to HTML
//!
//! Turns the national pension service's per-district youth enrollment CSV
//! into a single-file interactive HTML report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│  Transform  │────▶│   Charts    │────▶│ HTML Report │
//! │  (CP949)    │     │  (typed)    │     │ (melt/group)│     │  (plotly)   │     │  (UTF-8)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pension_report::{run, ReportConfig};
//!
//! fn main() {
//!     let summary = run(&ReportConfig::default()).unwrap();
//!     println!("{} provinces plotted", summary.provinces);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-stage error types
//! - [`models`] - Enrollment records and derived rows
//! - [`parser`] - CSV loading with encoding handling
//! - [`transform`] - Melt, grouping, and pipeline
//! - [`chart`] - Plotly figure builders
//! - [`render`] - Chart backends and page template
//! - [`writer`] - Output file
//! - [`logs`] - Console logging

#![deny(rustdoc::broken_intra_doc_links)]

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Presentation
pub mod chart;
pub mod render;
pub mod writer;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ChartError, LoadError, ReportError, ReportResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    derive_province,
    EnrollmentCounts,
    EnrollmentRecord,
    EnrollmentType,
    MeltedRecord,
    ProvinceAggregate,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    load_records,
    parse_bytes,
    parse_records,
    EncodingChoice,
    ParseResult,
};

// =============================================================================
// Re-exports - Transform & pipeline
// =============================================================================

pub use transform::{
    aggregate_by_province,
    build_report,
    enrollment_totals,
    melt,
    run,
    ReportConfig,
    ReportSummary,
    ReportTables,
    DEFAULT_INPUT,
    DEFAULT_OUTPUT,
};

// =============================================================================
// Re-exports - Charts & rendering
// =============================================================================

pub use chart::{age_sunburst, enrollment_overview, province_bubble, region_treemap};
pub use render::{ChartRenderer, MarkupFragment, PlotlyRenderer, ScriptInclusion};
pub use writer::write_report;
