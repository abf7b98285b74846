use super::costs_tab::CostsTab;
use super::profit_tab::ProfitTab;
use super::revenue_tab::RevenueTab;
use crate::dashboards::d400_financial_overview::api;
use crate::shared::components::indicator_set::IndicatorSetView;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_financial_overview::FinancialOverviewResponse;
use contracts::shared::indicators::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

pub(super) const TAB_REVENUE: &str = "revenue";
pub(super) const TAB_COSTS: &str = "costs";
pub(super) const TAB_PROFIT: &str = "profit";

const DEFAULT_CURRENCY: &str = "R$";

/// Financial overview: revenue, costs and profit tabs with a shared refresh button
#[component]
pub fn FinancialOverviewDashboard() -> impl IntoView {
    let catalog = RwSignal::new(None::<IndicatorCatalogResponse>);
    let overview = RwSignal::new(None::<FinancialOverviewResponse>);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let selected_tab = RwSignal::new(TAB_REVENUE.to_string());

    let refresh = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        spawn_local(async move {
            // Catalog is static on the server: fetched once, retried on refresh until it loads
            let catalog_error = if catalog.get_untracked().is_none() {
                match api::get_indicator_catalog().await {
                    Ok(cat) => {
                        catalog.set(Some(cat));
                        None
                    }
                    Err(e) => {
                        log::error!("D400: failed to load indicator catalog: {}", e);
                        Some(e)
                    }
                }
            } else {
                None
            };

            let overview_error = match api::get_financial_overview().await {
                Ok(response) => {
                    log::info!(
                        "D400: {} sales, {} expenses at {}",
                        response.metrics.sale_count,
                        response.metrics.expense_count,
                        response.generated_at
                    );
                    overview.set(Some(response));
                    None
                }
                Err(e) => {
                    log::error!("D400: refresh failed: {}", e);
                    overview.set(None);
                    Some(e)
                }
            };

            error_msg.set(refresh_error(catalog_error, overview_error));
            loading.set(false);
        });
    };

    // Initial load
    refresh();

    let values = Signal::derive(move || {
        overview
            .get()
            .map(|o| indicator_map(o.indicators))
            .unwrap_or_default()
    });

    let currency = Signal::derive(move || {
        catalog
            .get()
            .as_ref()
            .and_then(catalog_currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    });

    view! {
        <PageFrame page_id="d400_financial_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"Financial overview"</h2>
                <div class="page__header-actions">
                    {move || overview.get().map(|o| view! {
                        <span class="page__subtitle">{format!("Updated {}", short_timestamp(&o.generated_at))}</span>
                    })}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| refresh()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Refreshing..." } else { " Refresh data" }}
                    </Button>
                </div>
            </div>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">
                    <strong>"Error: "</strong>
                    {msg}
                </div>
            })}

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value=TAB_REVENUE>"Revenue"</Tab>
                    <Tab value=TAB_COSTS>"Costs"</Tab>
                    <Tab value=TAB_PROFIT>"Profit"</Tab>
                </TabList>

                <div class="d400-tab-content">
                    {move || {
                        let Some(data) = overview.get() else {
                            return if loading.get() {
                                view! { <div class="d400-loading">"Loading data..."</div> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            };
                        };
                        let metrics = data.metrics;
                        let cat = catalog.get();
                        let currency = currency.get();
                        match selected_tab.get().as_str() {
                            TAB_COSTS => view! {
                                <CostsTab metrics=metrics catalog=cat values=values currency=currency />
                            }.into_any(),
                            TAB_PROFIT => view! {
                                <ProfitTab metrics=metrics catalog=cat values=values currency=currency />
                            }.into_any(),
                            _ => view! {
                                <RevenueTab metrics=metrics catalog=cat values=values currency=currency />
                            }.into_any(),
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

/// Banner text after a refresh; the overview error comes first
fn refresh_error(catalog_error: Option<String>, overview_error: Option<String>) -> Option<String> {
    match (catalog_error, overview_error) {
        (None, None) => None,
        (Some(c), None) => Some(format!("Indicator catalog unavailable: {}", c)),
        (None, Some(o)) => Some(o),
        (Some(c), Some(o)) => Some(format!("{} (indicator catalog unavailable: {})", o, c)),
    }
}

/// Summary cards of one tab, if the catalog has a set for it
pub(super) fn indicator_cards(
    catalog: Option<&IndicatorCatalogResponse>,
    set_id: &str,
    values: Signal<HashMap<String, IndicatorValue>>,
) -> Option<AnyView> {
    let catalog = catalog?;
    let set_meta = catalog.set(set_id)?.clone();
    Some(
        view! {
            <IndicatorSetView
                set_meta=set_meta
                indicator_metas=catalog.indicators.clone()
                values=values
            />
        }
        .into_any(),
    )
}

fn indicator_map(values: Vec<IndicatorValue>) -> HashMap<String, IndicatorValue> {
    values.into_iter().map(|v| (v.id.0.clone(), v)).collect()
}

/// Currency of the first money indicator in the catalog
fn catalog_currency(catalog: &IndicatorCatalogResponse) -> Option<String> {
    catalog.indicators.iter().find_map(|m| match &m.format {
        ValueFormat::Money { currency } => Some(currency.clone()),
        _ => None,
    })
}

/// "2024-05-01T13:45:12.123+00:00" -> "2024-05-01 13:45:12"
fn short_timestamp(rfc3339: &str) -> String {
    rfc3339
        .get(..19)
        .map(|s| s.replacen('T', " ", 1))
        .unwrap_or_else(|| rfc3339.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &str, format: ValueFormat) -> IndicatorMeta {
        IndicatorMeta {
            id: IndicatorId::new(id),
            label: id.to_string(),
            icon: String::new(),
            format,
            description: None,
        }
    }

    #[test]
    fn test_catalog_currency_uses_first_money_format() {
        let catalog = IndicatorCatalogResponse {
            indicators: vec![
                meta("nps", ValueFormat::Number { decimals: 1 }),
                meta(
                    "revenue_total",
                    ValueFormat::Money {
                        currency: "US$".into(),
                    },
                ),
            ],
            sets: vec![],
        };
        assert_eq!(catalog_currency(&catalog).as_deref(), Some("US$"));

        let no_money = IndicatorCatalogResponse {
            indicators: vec![meta("roi", ValueFormat::Percent { decimals: 1 })],
            sets: vec![],
        };
        assert_eq!(catalog_currency(&no_money), None);
    }

    #[test]
    fn test_refresh_error_reports_catalog_failure() {
        assert_eq!(refresh_error(None, None), None);
        assert_eq!(
            refresh_error(Some("HTTP 500".into()), None).as_deref(),
            Some("Indicator catalog unavailable: HTTP 500")
        );
        assert_eq!(
            refresh_error(None, Some("sales.csv not found".into())).as_deref(),
            Some("sales.csv not found")
        );
        assert_eq!(
            refresh_error(Some("HTTP 500".into()), Some("sales.csv not found".into())).as_deref(),
            Some("sales.csv not found (indicator catalog unavailable: HTTP 500)")
        );
    }

    #[test]
    fn test_short_timestamp() {
        assert_eq!(
            short_timestamp("2024-05-01T13:45:12.123456+00:00"),
            "2024-05-01 13:45:12"
        );
        assert_eq!(short_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_indicator_map_keys_by_id() {
        let map = indicator_map(vec![IndicatorValue {
            id: IndicatorId::new("roi"),
            value: 12.5,
            display: "12,5%".into(),
            status: IndicatorStatus::Neutral,
            subtitle: None,
        }]);
        assert_eq!(map["roi"].display, "12,5%");
    }
}
