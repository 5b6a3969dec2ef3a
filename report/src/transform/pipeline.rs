//! End-to-end report generation.
//!
//! ```text
//! CSV (CP949) → load_records → melt / aggregate → chart builders
//!             → ChartRenderer → render_document → write_report
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use pension_report::{run, ReportConfig};
//!
//! let summary = run(&ReportConfig::default())?;
//! println!("Wrote {} bytes to {}", summary.bytes, summary.output.display());
//! ```

use std::path::PathBuf;

use super::grouper::{aggregate_by_province, enrollment_totals};
use super::melt::melt;
use crate::chart::{age_sunburst, enrollment_overview, province_bubble, region_treemap};
use crate::error::{ReportError, ReportResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{EnrollmentRecord, EnrollmentType, MeltedRecord, ProvinceAggregate};
use crate::parser::{load_records, EncodingChoice};
use crate::render::{
    render_document, ChartRenderer, PlotlyRenderer, ReportMeta, ScriptInclusion, SectionFragments,
};
use crate::writer::write_report;

/// Default input file, as published by the pension service.
pub const DEFAULT_INPUT: &str = "국민연금공단_시군구별 청년계층 가입자 현황_20241231.csv";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "national_pension_analysis_report.html";

/// Options for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Input CSV path
    pub input: PathBuf,

    /// Output HTML path, overwritten on every run
    pub output: PathBuf,

    /// Input text encoding
    pub encoding: EncodingChoice,

    /// CSV delimiter (auto-detect if not specified)
    pub delimiter: Option<u8>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            encoding: EncodingChoice::Cp949,
            delimiter: None,
        }
    }
}

impl ReportConfig {
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_encoding(mut self, encoding: EncodingChoice) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// Source rows loaded
    pub records: usize,
    /// Rows in the melted table
    pub melted: usize,
    /// Distinct provinces
    pub provinces: usize,
    /// Where the report was written
    pub output: PathBuf,
    /// Size of the written report
    pub bytes: usize,
}

/// Derived tables feeding the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTables {
    pub melted: Vec<MeltedRecord>,
    pub aggregates: Vec<ProvinceAggregate>,
    pub totals: Vec<(EnrollmentType, i64)>,
}

impl ReportTables {
    pub fn from_records(records: &[EnrollmentRecord]) -> Self {
        Self {
            melted: melt(records),
            aggregates: aggregate_by_province(records),
            totals: enrollment_totals(records),
        }
    }
}

/// Generate the report described by `config`.
///
/// Fails with [`ReportError::InputNotFound`] before touching anything
/// when the input file does not exist.
pub fn run(config: &ReportConfig) -> ReportResult<ReportSummary> {
    if !config.input.exists() {
        return Err(ReportError::InputNotFound(config.input.clone()));
    }

    log_info(format!("📖 Reading {}", config.input.display()));
    let parsed = load_records(&config.input, config.encoding, config.delimiter)?;
    log_success(format!("Encoding: {}", parsed.encoding));
    log_success(format!("Delimiter: '{}'", format_delimiter(parsed.delimiter)));
    log_info_indent(format!("Columns: {}", parsed.headers.join(", ")), 1);
    log_success(format!("Read {} rows", parsed.records.len()));
    let negative = rows_with_negative_counts(&parsed.records);
    if negative > 0 {
        log_warning(format!("{negative} rows have negative counts, plotted as-is"));
    }

    log_info("🔄 Reshaping...");
    let tables = ReportTables::from_records(&parsed.records);
    log_info_indent(format!("{} melted rows", tables.melted.len()), 1);
    log_info_indent(format!("{} provinces", tables.aggregates.len()), 1);

    log_info("📊 Building charts...");
    let html = build_report(&parsed.records, &tables, &PlotlyRenderer::new(), &ReportMeta::default())?;

    let bytes = write_report(&config.output, &html)?;
    log_success(format!("Successfully generated report: {}", config.output.display()));

    Ok(ReportSummary {
        records: parsed.records.len(),
        melted: tables.melted.len(),
        provinces: tables.aggregates.len(),
        output: config.output.clone(),
        bytes,
    })
}

/// Build the four charts and render the HTML document in memory.
///
/// Only the first (overview) fragment loads the charting library.
pub fn build_report(
    records: &[EnrollmentRecord],
    tables: &ReportTables,
    renderer: &dyn ChartRenderer,
    meta: &ReportMeta,
) -> ReportResult<String> {
    let overview = enrollment_overview(&tables.totals)?;
    let age = age_sunburst(&tables.melted)?;
    let region = region_treemap(records)?;
    let comparison = province_bubble(&tables.aggregates)?;

    let sections = SectionFragments {
        overview: renderer.render(&overview, ScriptInclusion::Cdn),
        age: renderer.render(&age, ScriptInclusion::Omit),
        region: renderer.render(&region, ScriptInclusion::Omit),
        comparison: renderer.render(&comparison, ScriptInclusion::Omit),
    };

    Ok(render_document(&sections, meta))
}

/// Rows with at least one negative count.
fn rows_with_negative_counts(records: &[EnrollmentRecord]) -> usize {
    records
        .iter()
        .filter(|r| EnrollmentType::ALL.iter().any(|kind| r.counts.get(*kind) < 0))
        .count()
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use plotly::Plot;
    use crate::render::MarkupFragment;
    use crate::render::plotly::PLOTLY_CDN;
    use std::cell::RefCell;
    use tempfile::tempdir;

    const CSV: &str = "시군구명,연령(구분),사업장가입자,지역가입자,임의가입자,임의계속가입자\n\
                       서울특별시 강남구,20대,1200,300,10,1\n\
                       서울특별시 강남구,30대,900,200,8,0\n\
                       서울특별시 종로구,20대,800,250,5,0\n\
                       부산광역시 해운대구,20대,400,1100,3,2\n\
                       제주특별자치도 제주시,30대,150,90,1,1\n";

    fn write_cp949(path: &std::path::Path, text: &str) {
        let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode(text);
        assert!(!had_errors);
        std::fs::write(path, bytes).unwrap();
    }

    fn meta() -> ReportMeta {
        ReportMeta {
            data_source: "test".into(),
            generated_at: "2024-12-31 00:00".into(),
            generator: "test".into(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.encoding, EncodingChoice::Cp949);
        assert_eq!(config.delimiter, None);
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("report.html");
        write_cp949(&input, CSV);

        let config = ReportConfig::default().with_input(&input).with_output(&output);
        let summary = run(&config).unwrap();

        assert_eq!(summary.records, 5);
        assert_eq!(summary.melted, 20);
        assert_eq!(summary.provinces, 3);

        let html = std::fs::read_to_string(&output).unwrap();
        assert_eq!(summary.bytes, html.len());
        assert_eq!(html.matches(r#"class="chart-container""#).count(), 4);
        assert_eq!(html.matches(PLOTLY_CDN).count(), 1);
        assert_eq!(html.matches("Plotly.newPlot").count(), 4);
        for anchor in crate::render::template::SECTION_ANCHORS {
            assert!(html.contains(&format!(r##"href="#{anchor}""##)));
        }
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("report.html");

        let config = ReportConfig::default().with_input(&input).with_output(&output);
        let err = run(&config).unwrap_err();

        assert!(matches!(err, ReportError::InputNotFound(_)));
        assert!(err.to_string().contains(&input.display().to_string()));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_column_surfaces() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        write_cp949(&input, "시군구명,사업장가입자\n서울특별시 강남구,1\n");

        let config = ReportConfig::default()
            .with_input(&input)
            .with_output(dir.path().join("report.html"));
        let err = run(&config).unwrap_err();

        assert!(matches!(err, ReportError::Load(LoadError::MissingColumn(_))));
    }

    #[test]
    fn test_tables_are_deterministic() {
        let parsed = crate::parser::parse_records(CSV, b',', "utf-8".into()).unwrap();

        let first = ReportTables::from_records(&parsed.records);
        let second = ReportTables::from_records(&parsed.records);
        assert_eq!(first, second);
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    /// Records which inclusion mode each render call received.
    struct RecordingRenderer {
        calls: RefCell<Vec<ScriptInclusion>>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, plot: &Plot, script: ScriptInclusion) -> MarkupFragment {
            self.calls.borrow_mut().push(script);
            let json: serde_json::Value = serde_json::from_str(&plot.to_json()).unwrap();
            MarkupFragment::new(format!("<div>{}</div>", json["layout"]["title"]["text"]))
        }
    }

    #[test]
    fn test_build_report_with_swapped_backend() {
        let parsed = crate::parser::parse_records(CSV, b',', "utf-8".into()).unwrap();
        let tables = ReportTables::from_records(&parsed.records);
        let renderer = RecordingRenderer {
            calls: RefCell::new(Vec::new()),
        };

        let html = build_report(&parsed.records, &tables, &renderer, &meta()).unwrap();

        assert_eq!(
            *renderer.calls.borrow(),
            vec![
                ScriptInclusion::Cdn,
                ScriptInclusion::Omit,
                ScriptInclusion::Omit,
                ScriptInclusion::Omit
            ]
        );
        assert!(html.contains(crate::chart::sunburst::TITLE));
        assert!(html.contains(crate::chart::treemap::TITLE));
        assert!(!html.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_negative_counts_are_kept_and_counted() {
        let csv = "시군구명,연령(구분),사업장가입자,지역가입자,임의가입자,임의계속가입자\n\
                   서울특별시 강남구,20대,10,-3,0,0\n\
                   서울특별시 종로구,20대,5,2,0,-1\n\
                   부산광역시 해운대구,20대,4,1,0,0\n";
        let parsed = crate::parser::parse_records(csv, b',', "utf-8".into()).unwrap();

        assert_eq!(parsed.records[0].counts.regional, -3);
        assert_eq!(rows_with_negative_counts(&parsed.records), 2);
        assert_eq!(rows_with_negative_counts(&parsed.records[2..]), 0);
    }

    #[test]
    fn test_format_delimiter() {
        assert_eq!(format_delimiter('\t'), "\\t");
        assert_eq!(format_delimiter(';'), ";");
    }
}
