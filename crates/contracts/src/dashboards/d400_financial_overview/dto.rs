use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use crate::shared::indicators::IndicatorValue;

/// One sales transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub category: String,
    pub total_value: f64,
    /// Customer score, 0..=10
    pub nps_score: u8,
}

/// One expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

/// Sum of values for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// A point of a month-bucketed series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyValue {
    pub month: MonthKey,
    pub value: f64,
}

/// Grand totals over the full revenue and expense series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialTotals {
    pub revenue_total: f64,
    pub expense_total: f64,
    pub profit_total: f64,
    /// profit / revenue * 100, 0 when there is no revenue
    pub margin_total: f64,
    /// profit / expense * 100, 0 when there are no expenses
    pub roi: f64,
}

/// Everything the dashboard shows, computed in one pass from the two sources.
///
/// All month series are in chronological order. The profit and margin series
/// only contain months that have both revenue and expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    // Sales
    pub sales_by_category: Vec<CategoryTotal>,
    pub revenue_monthly: Vec<MonthlyValue>,
    pub revenue_cumulative: Vec<MonthlyValue>,
    pub average_ticket: f64,
    /// Rounded to one decimal place
    pub nps: f64,
    pub sale_count: usize,

    // Expenses
    pub expenses_by_category: Vec<CategoryTotal>,
    pub expenses_monthly: Vec<MonthlyValue>,
    pub expenses_cumulative: Vec<MonthlyValue>,
    pub average_monthly_expense: f64,
    pub expense_count: usize,

    // Profit
    pub profit_monthly: Vec<MonthlyValue>,
    pub profit_cumulative: Vec<MonthlyValue>,
    pub margin_monthly: Vec<MonthlyValue>,
    pub totals: FinancialTotals,
}

/// Response for GET /api/d400/financial_overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialOverviewResponse {
    /// RFC 3339 timestamp of the computation
    pub generated_at: String,
    pub metrics: MetricsBundle,
    pub indicators: Vec<IndicatorValue>,
}

/// Error body returned by the d400 endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable kind, e.g. "source_not_found"
    pub kind: String,
    pub message: String,
}
