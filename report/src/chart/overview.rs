//! National enrollment mix shown in the overview section.

use plotly::common::Marker;
use plotly::{Bar, Plot};

use super::figure::{new_plot, titled_layout};
use super::palette::{DiscreteColors, PASTEL};
use crate::error::{ChartError, ChartResult};
use crate::models::EnrollmentType;

pub const TITLE: &str = "가입 유형별 전체 청년 가입자 수";

/// Bar chart of national totals, one bar per enrollment type.
///
/// Uses the same Pastel assignment as the sunburst so a type keeps its
/// colour across sections.
pub fn enrollment_overview(totals: &[(EnrollmentType, i64)]) -> ChartResult<Plot> {
    if totals.is_empty() {
        return Err(ChartError::Empty("enrollment_overview"));
    }

    let mut palette = DiscreteColors::new(&PASTEL);
    let colors: Vec<String> = totals
        .iter()
        .map(|(kind, _)| palette.color(kind.column()).to_string())
        .collect();
    let labels: Vec<String> = totals.iter().map(|(kind, _)| kind.column().to_string()).collect();
    let values: Vec<i64> = totals.iter().map(|(_, total)| *total).collect();

    let trace = Bar::new(labels, values)
        .marker(Marker::new().color_array(colors))
        .hover_template("%{x}<br>가입자수=%{y:,}<extra></extra>");

    let mut plot = new_plot(titled_layout(TITLE));
    plot.add_trace(trace);
    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::figure::plot_json;

    #[test]
    fn test_bars_follow_type_order() {
        let totals: Vec<_> = EnrollmentType::ALL.iter().map(|k| (*k, 1)).collect();
        let plot = enrollment_overview(&totals).unwrap();
        let bar = plot_json(&plot)["data"][0].clone();

        assert_eq!(bar["type"], "bar");
        assert_eq!(bar["x"][0], "사업장가입자");
        assert_eq!(bar["x"][3], "임의계속가입자");
        assert_eq!(bar["y"], serde_json::json!([1, 1, 1, 1]));
        for (i, color) in PASTEL[..4].iter().enumerate() {
            assert_eq!(bar["marker"]["color"][i], *color);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(enrollment_overview(&[]).is_err());
    }
}
