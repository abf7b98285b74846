//! Indicator values read off an already computed `MetricsBundle`.

use contracts::dashboards::d400_financial_overview::MetricsBundle;
use contracts::shared::indicators::IndicatorStatus;

pub fn average_ticket(m: &MetricsBundle) -> f64 {
    m.average_ticket
}

pub fn nps(m: &MetricsBundle) -> f64 {
    m.nps
}

pub fn revenue_total(m: &MetricsBundle) -> f64 {
    m.totals.revenue_total
}

pub fn expense_total(m: &MetricsBundle) -> f64 {
    m.totals.expense_total
}

pub fn average_monthly_expense(m: &MetricsBundle) -> f64 {
    m.average_monthly_expense
}

pub fn profit_total(m: &MetricsBundle) -> f64 {
    m.totals.profit_total
}

pub fn profit_margin(m: &MetricsBundle) -> f64 {
    m.totals.margin_total
}

pub fn roi(m: &MetricsBundle) -> f64 {
    m.totals.roi
}

/// Green for a profit, red for a loss.
pub fn sign_status(value: f64) -> IndicatorStatus {
    if value >= 0.0 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Bad
    }
}
