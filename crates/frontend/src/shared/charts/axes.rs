use super::coord;
use super::geometry::{label_step, PlotArea, ValueRange};
use contracts::shared::format::format_money_whole;
use leptos::prelude::*;

const Y_TICKS: usize = 4;
const MAX_X_LABELS: usize = 12;

/// Horizontal grid lines with money labels on the left.
pub fn y_axis(area: PlotArea, range: ValueRange, currency: &str) -> impl IntoView {
    range
        .ticks(Y_TICKS)
        .into_iter()
        .map(|tick| {
            let y = coord(area.y_for(tick, &range));
            let class = if tick.abs() < f64::EPSILON {
                "chart__grid chart__grid--zero"
            } else {
                "chart__grid"
            };
            view! {
                <line class=class x1=coord(area.left()) x2=coord(area.right()) y1=y.clone() y2=y.clone() />
                <text class="chart__tick" x=coord(area.left() - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                    {format_money_whole(tick, currency)}
                </text>
            }
        })
        .collect_view()
}

/// Category labels under the plot, thinned out when there are many.
pub fn x_axis(area: PlotArea, labels: &[String]) -> impl IntoView {
    let count = labels.len();
    let step = label_step(count, MAX_X_LABELS);
    let y = coord(area.bottom() + 18.0);
    labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, label)| {
            view! {
                <text class="chart__tick" x=coord(area.band_center(i, count)) y=y.clone() text-anchor="middle">
                    {label.clone()}
                </text>
            }
        })
        .collect_view()
}
