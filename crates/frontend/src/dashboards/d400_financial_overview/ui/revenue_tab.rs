use super::dashboard::{indicator_cards, TAB_REVENUE};
use crate::dashboards::d400_financial_overview::series::split_series;
use crate::shared::charts::{palette_color, BarChart, DonutChart, LineChart};
use contracts::dashboards::d400_financial_overview::MetricsBundle;
use contracts::shared::indicators::{IndicatorCatalogResponse, IndicatorValue};
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn RevenueTab(
    metrics: MetricsBundle,
    catalog: Option<IndicatorCatalogResponse>,
    #[prop(into)] values: Signal<HashMap<String, IndicatorValue>>,
    currency: String,
) -> impl IntoView {
    let (month_labels, month_values) = split_series(&metrics.revenue_monthly);
    let (cumulative_labels, cumulative_values) = split_series(&metrics.revenue_cumulative);

    view! {
        <div class="d400-tab">
            {indicator_cards(catalog.as_ref(), TAB_REVENUE, values)}
            <div class="d400-charts">
                <DonutChart
                    title="Sales by category"
                    items=metrics.sales_by_category
                    currency=currency.clone()
                />
                <BarChart
                    title="Monthly revenue"
                    labels=month_labels
                    values=month_values
                    currency=currency.clone()
                    color=palette_color(0)
                />
                <LineChart
                    title="Cumulative revenue"
                    labels=cumulative_labels
                    values=cumulative_values
                    currency=currency
                    color=palette_color(2)
                />
            </div>
        </div>
    }
}
