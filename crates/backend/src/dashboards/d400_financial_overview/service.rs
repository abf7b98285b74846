use contracts::dashboards::d400_financial_overview::FinancialOverviewResponse;
use std::path::Path;

use super::aggregator::build_metrics;
use super::error::DashboardError;
use super::repository;
use crate::shared::config::Config;
use crate::shared::indicators::IndicatorRegistry;

/// Read both sources and compute the whole dashboard.
///
/// Nothing is cached: every call is a full, independent recomputation.
pub fn get_financial_overview(config: &Config) -> Result<FinancialOverviewResponse, DashboardError> {
    let sales_path = config.sales_path();
    let expenses_path = config.expenses_path();
    compute_overview(&sales_path, &expenses_path, &config.display.currency)
}

pub fn compute_overview(
    sales_path: &Path,
    expenses_path: &Path,
    currency: &str,
) -> Result<FinancialOverviewResponse, DashboardError> {
    // 1. Both files must be present before anything is read
    repository::ensure_sources_exist(sales_path, expenses_path)?;

    // 2. Load

    let sales = repository::load_sales(sales_path)?;
    let expenses = repository::load_expenses(expenses_path)?;
    tracing::info!(
        "D400 Dashboard: Loaded {} sales from {} and {} expenses from {}",
        sales.len(),
        sales_path.display(),
        expenses.len(),
        expenses_path.display()
    );

    // 3. Aggregate
    let metrics = build_metrics(&sales, &expenses);
    tracing::info!(
        "D400 Dashboard: {} revenue months, {} expense months, {} profit months",
        metrics.revenue_monthly.len(),
        metrics.expenses_monthly.len(),
        metrics.profit_monthly.len()
    );

    // 4. Cards
    let indicators = IndicatorRegistry::new(currency).compute_all(&metrics);

    Ok(FinancialOverviewResponse {
        generated_at: chrono::Utc::now().to_rfc3339(),
        metrics,
        indicators,
    })
}
