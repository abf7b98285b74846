use super::axes::{x_axis, y_axis};
use super::geometry::{bar_rects, PlotArea, ValueRange};
use super::{coord, NEGATIVE_COLOR, PALETTE};
use contracts::shared::format::format_money;
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 280.0);

/// Vertical bars, one per category label.
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    labels: Vec<String>,
    values: Vec<f64>,
    currency: String,
    #[prop(optional)] color: Option<&'static str>,
    /// Paint negative values in the warning color
    #[prop(optional)]
    highlight_negative: bool,
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
    let bars = bar_rects(&values, &AREA, &range)
        .into_iter()
        .zip(labels.iter())
        .map(|(bar, label)| {
            let fill = if highlight_negative && bar.negative {
                NEGATIVE_COLOR
            } else {
                color
            };
            let aria = format!("{}: {}", label, format_money(bar.value, &currency));
            view! {
                <rect
                    class="chart__bar"
                    x=coord(bar.x)
                    y=coord(bar.y)
                    width=coord(bar.width)
                    height=coord(bar.height)
                    fill=fill
                    aria-label=aria
                />
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", AREA.width, AREA.height) preserveAspectRatio="xMidYMid meet">
                {y_axis(AREA, range, &currency)}
                {bars}
                {x_axis(AREA, &labels)}
            </svg>
        </div>
    }
    .into_any()
}
