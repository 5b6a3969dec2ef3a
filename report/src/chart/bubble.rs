//! Province bubble chart: workplace versus regional enrollment.

use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Plot, Scatter};

use super::figure::{new_plot, titled_layout};
use super::palette::{DiscreteColors, PLOTLY};
use crate::error::{ChartError, ChartResult};
use crate::models::{EnrollmentType, ProvinceAggregate};

pub const TITLE: &str = "지역별 고용 안정성 vs 자영업 비율";

/// Largest rendered bubble diameter in pixels.
pub const SIZE_MAX: f64 = 60.0;

/// Build the bubble chart, one trace per province.
///
/// `x` is the regional count on a log axis, `y` is the workplace count
/// and the bubble area is proportional to it.
pub fn province_bubble(aggregates: &[ProvinceAggregate]) -> ChartResult<Plot> {
    if aggregates.is_empty() {
        return Err(ChartError::Empty("province_bubble"));
    }

    let largest = aggregates.iter().map(|a| a.workplace).max().unwrap_or(0);
    let x_title = EnrollmentType::Regional.description();
    let y_title = EnrollmentType::Workplace.description();
    let hovertemplate = format!(
        "<b>%{{hovertext}}</b><br><br>{x_title}=%{{x:,}}<br>{y_title}=%{{y:,}}<extra></extra>"
    );

    let layout = titled_layout(TITLE)
        .x_axis(Axis::new().title(Title::from(x_title)).type_(AxisType::Log))
        .y_axis(Axis::new().title(Title::from(y_title)));
    let mut plot = new_plot(layout);

    let mut palette = DiscreteColors::new(&PLOTLY);
    for aggregate in aggregates {
        let color = palette.color(&aggregate.province).to_string();
        let marker = Marker::new()
            .color(color)
            .size(bubble_diameter(aggregate.workplace, largest));

        let trace = Scatter::new(vec![aggregate.regional], vec![aggregate.workplace])
            .name(aggregate.province.as_str())
            .legend_group(aggregate.province.as_str())
            .mode(Mode::Markers)
            .hover_text_array(vec![aggregate.province.clone()])
            .hover_template(hovertemplate.as_str())
            .marker(marker);
        plot.add_trace(trace);
    }

    Ok(plot)
}

/// Diameter in pixels for a bubble whose area is proportional to `value`,
/// with `largest` drawn at [`SIZE_MAX`].
fn bubble_diameter(value: i64, largest: i64) -> usize {
    if largest <= 0 || value <= 0 {
        return 0;
    }
    (SIZE_MAX * (value as f64 / largest as f64).sqrt()).round() as usize
}
