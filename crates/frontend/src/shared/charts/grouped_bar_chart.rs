use super::axes::{x_axis, y_axis};
use super::coord;
use super::geometry::{grouped_bar_rects, PlotArea, ValueRange};
use contracts::shared::format::format_money;
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 280.0);

/// One named series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Several series side by side per category, with a legend.
#[component]
pub fn GroupedBarChart(
    #[prop(into)] title: String,
    labels: Vec<String>,
    series: Vec<ChartSeries>,
    currency: String,
) -> impl IntoView {
    if labels.is_empty() {
        return view! {
            <div class="chart chart--empty">
                <div class="chart__title">{title}</div>
                <div class="chart__placeholder">"No data"</div>
            </div>
        }
        .into_any();
    }

    let values: Vec<Vec<f64>> = series.iter().map(|s| s.values.clone()).collect();
    let range = ValueRange::including_zero(values.iter().flatten().copied());
    let groups = grouped_bar_rects(&values, &AREA, &range);

    let bars = groups
        .into_iter()
        .zip(series.iter())
        .flat_map(|(bars, s)| {
            let color = s.color;
            let name = s.name.clone();
            let currency = currency.clone();
            bars.into_iter().zip(labels.clone()).map(move |(bar, label)| {
                let aria = format!("{} {}: {}", name, label, format_money(bar.value, &currency));
                view! {
                    <rect
                        class="chart__bar"
                        x=coord(bar.x)
                        y=coord(bar.y)
                        width=coord(bar.width)
                        height=coord(bar.height)
                        fill=color
                        aria-label=aria
                    />
                }
            })
        })
        .collect_view();

    let legend = series
        .iter()
        .map(|s| {
            let swatch = format!("background: {};", s.color);
            view! {
                <span class="chart__legend-item">
                    <span class="chart__swatch" style=swatch></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <div class="chart__legend">{legend}</div>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", AREA.width, AREA.height) preserveAspectRatio="xMidYMid meet">
                {y_axis(AREA, range, &currency)}
                {bars}
                {x_axis(AREA, &labels)}
            </svg>
        </div>
    }
    .into_any()
}
