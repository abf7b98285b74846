use contracts::dashboards::d400_financial_overview::MetricsBundle;
use contracts::shared::format::format_value;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::financial;
use super::metadata::{build_catalog, ids};

type ComputeFn = fn(&MetricsBundle) -> f64;

/// Central registry: maps `IndicatorId` to the function reading it off the metrics.
pub struct IndicatorRegistry {
    catalog: IndicatorCatalogResponse,
    fns: HashMap<String, ComputeFn>,
}

impl IndicatorRegistry {
    pub fn new(currency: &str) -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::average_ticket().0, financial::average_ticket);
        fns.insert(ids::nps().0, financial::nps);
        fns.insert(ids::revenue_total().0, financial::revenue_total);
        fns.insert(ids::expense_total().0, financial::expense_total);
        fns.insert(
            ids::average_monthly_expense().0,
            financial::average_monthly_expense,
        );
        fns.insert(ids::profit_total().0, financial::profit_total);
        fns.insert(ids::profit_margin().0, financial::profit_margin);
        fns.insert(ids::roi().0, financial::roi);

        Self {
            catalog: build_catalog(currency),
            fns,
        }
    }

    pub fn catalog(&self) -> &IndicatorCatalogResponse {
        &self.catalog
    }

    /// Compute every catalogued indicator, in catalogue order.
    pub fn compute_all(&self, metrics: &MetricsBundle) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(self.catalog.indicators.len());

        for meta in &self.catalog.indicators {
            let Some(compute_fn) = self.fns.get(&meta.id.0) else {
                tracing::warn!("indicator {} not found in registry", meta.id.0);
                continue;
            };
            let value = compute_fn(metrics);
            results.push(IndicatorValue {
                id: meta.id.clone(),
                value,
                display: format_value(value, &meta.format),
                status: status_for(&meta.id, value),
                subtitle: subtitle_for(&meta.id, metrics),
            });
        }

        results
    }
}

fn status_for(id: &IndicatorId, value: f64) -> IndicatorStatus {
    if *id == ids::profit_total() {
        financial::sign_status(value)
    } else {
        IndicatorStatus::Neutral
    }
}

fn subtitle_for(id: &IndicatorId, metrics: &MetricsBundle) -> Option<String> {
    if *id == ids::average_ticket() {
        Some(format!("{} sales", metrics.sale_count))
    } else if *id == ids::average_monthly_expense() {
        Some(format!("{} months", metrics.expenses_monthly.len()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_financial_overview::FinancialTotals;

    fn metrics(revenue: f64, expense: f64) -> MetricsBundle {
        let profit = revenue - expense;
        MetricsBundle {
            sales_by_category: vec![],
            revenue_monthly: vec![],
            revenue_cumulative: vec![],
            average_ticket: 150.0,
            nps: 33.3,
            sale_count: 2,
            expenses_by_category: vec![],
            expenses_monthly: vec![],
            expenses_cumulative: vec![],
            average_monthly_expense: 50.0,
            expense_count: 1,
            profit_monthly: vec![],
            profit_cumulative: vec![],
            margin_monthly: vec![],
            totals: FinancialTotals {
                revenue_total: revenue,
                expense_total: expense,
                profit_total: profit,
                margin_total: 12.5,
                roi: 250.0,
            },
        }
    }

    fn find<'a>(values: &'a [IndicatorValue], id: IndicatorId) -> &'a IndicatorValue {
        values.iter().find(|v| v.id == id).unwrap()
    }

    #[test]
    fn test_all_indicators_computed_in_catalog_order() {
        let registry = IndicatorRegistry::new("R$");
        let values = registry.compute_all(&metrics(300.0, 50.0));
        let order: Vec<&str> = values.iter().map(|v| v.id.0.as_str()).collect();
        let catalog_order: Vec<&str> = registry
            .catalog()
            .indicators
            .iter()
            .map(|m| m.id.0.as_str())
            .collect();
        assert_eq!(order, catalog_order);
    }

    #[test]
    fn test_display_strings() {
        let values = IndicatorRegistry::new("R$").compute_all(&metrics(1234.5, 50.0));
        assert_eq!(find(&values, ids::revenue_total()).display, "R$ 1.234,50");
        assert_eq!(find(&values, ids::average_ticket()).display, "R$ 150,00");
        assert_eq!(find(&values, ids::nps()).display, "33,3");
        assert_eq!(find(&values, ids::profit_margin()).display, "12,5%");
        assert_eq!(find(&values, ids::roi()).display, "250,0%");
        assert_eq!(
            find(&values, ids::average_ticket()).subtitle.as_deref(),
            Some("2 sales")
        );
    }

    #[test]
    fn test_profit_status_follows_sign() {
        let registry = IndicatorRegistry::new("R$");

        let gain = registry.compute_all(&metrics(300.0, 50.0));
        assert_eq!(find(&gain, ids::profit_total()).status, IndicatorStatus::Good);
        assert_eq!(find(&gain, ids::nps()).status, IndicatorStatus::Neutral);

        let loss = registry.compute_all(&metrics(50.0, 300.0));
        assert_eq!(find(&loss, ids::profit_total()).status, IndicatorStatus::Bad);
        assert_eq!(find(&loss, ids::profit_total()).display, "R$ -250,00");
    }
}
