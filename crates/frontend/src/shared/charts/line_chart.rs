use super::axes::{x_axis, y_axis};
use super::geometry::{line_points, points_attr, PlotArea, ValueRange};
use super::{coord, PALETTE};
use contracts::shared::format::format_money;
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 280.0);

/// Line with markers; used for the cumulative series.
#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    labels: Vec<String>,
    values: Vec<f64>,
    currency: String,
    #[prop(optional)] color: Option<&'static str>,
) -> impl IntoView {
    if values.is_empty() {
        return view! {
            <div class="chart chart--empty">
                <div class="chart__title">{title}</div>
                <div class="chart__placeholder">"No data"</div>
            </div>
        }
        .into_any();
    }

    let color = color.unwrap_or(PALETTE[0]);
    let range = ValueRange::including_zero(values.iter().copied());
    let points = line_points(&values, &AREA, &range);
    let polyline = points_attr(&points);

    let markers = points
        .iter()
        .zip(values.iter().zip(labels.iter()))
        .map(|((x, y), (value, label))| {
            let aria = format!("{}: {}", label, format_money(*value, &currency));
            view! {
                <circle class="chart__marker" cx=coord(*x) cy=coord(*y) r="3.5" fill=color aria-label=aria />
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", AREA.width, AREA.height) preserveAspectRatio="xMidYMid meet">
                {y_axis(AREA, range, &currency)}
                <polyline class="chart__line" points=polyline fill="none" stroke=color stroke-width="2.5" />
                {markers}
                {x_axis(AREA, &labels)}
            </svg>
        </div>
    }
    .into_any()
}
