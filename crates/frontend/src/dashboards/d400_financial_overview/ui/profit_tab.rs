use super::dashboard::{indicator_cards, TAB_PROFIT};
use crate::dashboards::d400_financial_overview::series::{align_series, split_series};
use crate::shared::charts::{palette_color, BarChart, ChartSeries, GroupedBarChart, LineChart};
use contracts::dashboards::d400_financial_overview::MetricsBundle;
use contracts::shared::indicators::{IndicatorCatalogResponse, IndicatorValue};
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn ProfitTab(
    metrics: MetricsBundle,
    catalog: Option<IndicatorCatalogResponse>,
    #[prop(into)] values: Signal<HashMap<String, IndicatorValue>>,
    currency: String,
) -> impl IntoView {
    let (profit_labels, profit_values) = split_series(&metrics.profit_monthly);
    let (cumulative_labels, cumulative_values) = split_series(&metrics.profit_cumulative);

    // Revenue vs expenses spans every month of either source, unlike profit
    let aligned = align_series(&metrics.revenue_monthly, &metrics.expenses_monthly);
    let comparison_labels = aligned.labels();
    let comparison = vec![
        ChartSeries {
            name: "Revenue".into(),
            color: palette_color(0),
            values: aligned.left,
        },
        ChartSeries {
            name: "Expenses".into(),
            color: palette_color(1),
            values: aligned.right,
        },
    ];

    view! {
        <div class="d400-tab">
            {indicator_cards(catalog.as_ref(), TAB_PROFIT, values)}
            <div class="d400-charts">
                <BarChart
                    title="Monthly profit"
                    labels=profit_labels
                    values=profit_values
                    currency=currency.clone()
                    color=palette_color(2)
                    highlight_negative=true
                />
                <GroupedBarChart
                    title="Revenue vs expenses"
                    labels=comparison_labels
                    series=comparison
                    currency=currency.clone()
                />
                <LineChart
                    title="Cumulative profit"
                    labels=cumulative_labels
                    values=cumulative_values
                    currency=currency
                    color=palette_color(4)
                />
            </div>
        </div>
    }
}
