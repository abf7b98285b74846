use super::geometry::donut_slices;
use super::palette_color;
use contracts::dashboards::d400_financial_overview::CategoryTotal;
use contracts::shared::format::{format_money, format_percent};
use leptos::prelude::*;

const SIZE: f64 = 220.0;
const OUTER: f64 = 100.0;
const INNER: f64 = 58.0;

/// Category shares as a ring, with a legend listing value and percentage.
#[component]
pub fn DonutChart(#[prop(into)] title: String, items: Vec<CategoryTotal>, currency: String) -> impl IntoView {
    let values: Vec<f64> = items.iter().map(|c| c.total).collect();
    let slices = donut_slices(&values, SIZE / 2.0, SIZE / 2.0, OUTER, INNER);

    if slices.is_empty() {
        return view! {
            <div class="chart chart--empty">
                <div class="chart__title">{title}</div>
                <div class="chart__placeholder">"No data"</div>
            </div>
        }
        .into_any();
    }

    let legend = slices
        .iter()
        .map(|slice| {
            let item = &items[slice.index];
            let swatch = format!("background: {};", palette_color(slice.index));
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=swatch></span>
                    <span class="chart__legend-label">{item.category.clone()}</span>
                    <span class="chart__legend-value">{format_money(item.total, &currency)}</span>
                    <span class="chart__legend-share">{format_percent(slice.fraction * 100.0, 1)}</span>
                </li>
            }
        })
        .collect_view();

    let paths = slices
        .into_iter()
        .map(|slice| {
            view! {
                <path class="chart__slice" d=slice.path fill=palette_color(slice.index) fill-rule="evenodd" />
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--donut">
            <div class="chart__title">{title}</div>
            <div class="chart__donut-body">
                <svg class="chart__svg chart__svg--donut" viewBox=format!("0 0 {} {}", SIZE, SIZE)>
                    {paths}
                </svg>
                <ul class="chart__legend chart__legend--vertical">{legend}</ul>
            </div>
        </div>
    }
    .into_any()
}
