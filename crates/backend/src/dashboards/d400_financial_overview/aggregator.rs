//! Financial aggregation: records in, `MetricsBundle` out.
//!
//! Pure and deterministic; every refresh calls `build_metrics` from scratch.

use contracts::dashboards::d400_financial_overview::{
    CategoryTotal, ExpenseRecord, FinancialTotals, MetricsBundle, MonthKey, MonthlyValue,
    SaleRecord,
};
use std::collections::BTreeMap;

const PROMOTER_MIN_SCORE: u8 = 9;
const DETRACTOR_MAX_SCORE: u8 = 6;

pub fn build_metrics(sales: &[SaleRecord], expenses: &[ExpenseRecord]) -> MetricsBundle {
    // === SALES ===
    let sales_by_category = totals_by_category(
        sales.iter().map(|s| (s.category.as_str(), s.total_value)),
    );
    let revenue_by_month = sum_by_month(
        sales.iter().map(|s| (MonthKey::from_date(s.date), s.total_value)),
    );
    let revenue_monthly = to_series(&revenue_by_month);
    let revenue_cumulative = cumulative(&revenue_monthly);
    let average_ticket = mean(sales.iter().map(|s| s.total_value));
    let nps = net_promoter_score(sales);

    // === EXPENSES ===
    let expenses_by_category = totals_by_category(
        expenses.iter().map(|e| (e.category.as_str(), e.amount)),
    );
    let expense_by_month = sum_by_month(
        expenses.iter().map(|e| (MonthKey::from_date(e.date), e.amount)),
    );
    let expenses_monthly = to_series(&expense_by_month);
    let expenses_cumulative = cumulative(&expenses_monthly);

    // === PROFIT (months present in both series only) ===
    let mut profit_monthly = Vec::new();
    let mut margin_monthly = Vec::new();
    for (month, revenue) in &revenue_by_month {
        let Some(expense) = expense_by_month.get(month) else {
            continue;
        };
        let profit = revenue - expense;
        profit_monthly.push(MonthlyValue {
            month: *month,
            value: profit,
        });
        margin_monthly.push(MonthlyValue {
            month: *month,
            value: monthly_margin(profit, *revenue),
        });
    }
    let profit_cumulative = cumulative(&profit_monthly);

    // === TOTALS (full series, not just common months) ===
    let revenue_total: f64 = revenue_monthly.iter().map(|v| v.value).sum();
    let expense_total: f64 = expenses_monthly.iter().map(|v| v.value).sum();
    let profit_total = revenue_total - expense_total;
    let totals = FinancialTotals {
        revenue_total,
        expense_total,
        profit_total,
        margin_total: percentage(profit_total, revenue_total),
        roi: percentage(profit_total, expense_total),
    };

    let average_monthly_expense = if expenses_monthly.is_empty() {
        0.0
    } else {
        expense_total / expenses_monthly.len() as f64
    };

    MetricsBundle {
        sales_by_category,
        revenue_monthly,
        revenue_cumulative,
        average_ticket,
        nps,
        sale_count: sales.len(),
        expenses_by_category,
        expenses_monthly,
        expenses_cumulative,
        average_monthly_expense,
        expense_count: expenses.len(),
        profit_monthly,
        profit_cumulative,
        margin_monthly,
        totals,
    }
}

/// Sums per category, largest first. Equal totals are ordered by name.
pub fn totals_by_category<'a>(items: impl Iterator<Item = (&'a str, f64)>) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for (category, value) in items {
        *sums.entry(category).or_insert(0.0) += value;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

pub fn sum_by_month(items: impl Iterator<Item = (MonthKey, f64)>) -> BTreeMap<MonthKey, f64> {
    let mut sums = BTreeMap::new();
    for (month, value) in items {
        *sums.entry(month).or_insert(0.0) += value;
    }
    sums
}

fn to_series(by_month: &BTreeMap<MonthKey, f64>) -> Vec<MonthlyValue> {
    by_month
        .iter()
        .map(|(month, value)| MonthlyValue {
            month: *month,
            value: *value,
        })
        .collect()
}

/// Running sum, same months as the input.
pub fn cumulative(series: &[MonthlyValue]) -> Vec<MonthlyValue> {
    let mut running = 0.0;
    series
        .iter()
        .map(|point| {
            running += point.value;
            MonthlyValue {
                month: point.month,
                value: running,
            }
        })
        .collect()
}

/// % promoters (9-10) minus % detractors (0-6), one decimal. 0 without sales.
pub fn net_promoter_score(sales: &[SaleRecord]) -> f64 {
    if sales.is_empty() {
        return 0.0;
    }
    let total = sales.len() as f64;
    let promoters = sales
        .iter()
        .filter(|s| s.nps_score >= PROMOTER_MIN_SCORE)
        .count() as f64;
    let detractors = sales
        .iter()
        .filter(|s| s.nps_score <= DETRACTOR_MAX_SCORE)
        .count() as f64;

    let nps = promoters / total * 100.0 - detractors / total * 100.0;
    (nps * 10.0).round() / 10.0
}

/// part / whole * 100; 0 unless `whole` is positive.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Monthly margin: profit / revenue * 100. Only a zero revenue month gives 0;
/// negative revenue (refunds) still divides.
pub fn monthly_margin(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        0.0
    } else {
        profit / revenue * 100.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(y: i32, m: u32, category: &str, total_value: f64, nps_score: u8) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(y, m, 15).unwrap(),
            category: category.to_string(),
            total_value,
            nps_score,
        }
    }

    fn expense(y: i32, m: u32, category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(y, m, 10).unwrap(),
            category: category.to_string(),
            amount,
        }
    }

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    fn values(series: &[MonthlyValue]) -> Vec<f64> {
        series.iter().map(|v| v.value).collect()
    }

    fn months(series: &[MonthlyValue]) -> Vec<MonthKey> {
        series.iter().map(|v| v.month).collect()
    }

    #[test]
    fn test_reference_example() {
        let sales = vec![
            sale(2024, 1, "CategoryA", 100.0, 10),
            sale(2024, 2, "CategoryA", 200.0, 5),
        ];
        let expenses = vec![expense(2024, 1, "Rent", 50.0)];

        let m = build_metrics(&sales, &expenses);

        assert_eq!(m.totals.revenue_total, 300.0);
        assert_eq!(m.totals.expense_total, 50.0);
        assert_eq!(m.totals.profit_total, 250.0);
        assert_eq!(months(&m.profit_monthly), vec![month(2024, 1)]);
        assert_eq!(values(&m.profit_monthly), vec![50.0]);
        assert_eq!(m.nps, 0.0);
        assert_eq!(m.average_ticket, 150.0);
        assert_eq!(m.sale_count, 2);
        assert_eq!(m.expense_count, 1);
    }

    #[test]
    fn test_category_totals_sorted_and_sum_to_revenue() {
        let sales = vec![
            sale(2024, 1, "Rings", 100.0, 9),
            sale(2024, 1, "Necklaces", 500.0, 9),
            sale(2024, 2, "Rings", 150.0, 7),
            sale(2024, 3, "Earrings", 80.0, 3),
        ];
        let m = build_metrics(&sales, &[]);

        let names: Vec<&str> = m.sales_by_category.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Necklaces", "Rings", "Earrings"]);
        assert_eq!(m.sales_by_category[1].total, 250.0);

        let category_sum: f64 = m.sales_by_category.iter().map(|c| c.total).sum();
        assert_eq!(category_sum, m.totals.revenue_total);
    }

    #[test]
    fn test_category_ties_ordered_by_name() {
        let totals = totals_by_category(
            vec![("Zeta", 10.0), ("Alpha", 10.0), ("Mid", 20.0)].into_iter(),
        );
        let names: Vec<&str> = totals.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_monthly_series_chronological_across_years() {
        let sales = vec![
            sale(2024, 2, "A", 20.0, 9),
            sale(2023, 12, "A", 10.0, 9),
            sale(2024, 1, "A", 5.0, 9),
            sale(2024, 1, "B", 7.0, 9),
        ];
        let m = build_metrics(&sales, &[]);
        assert_eq!(
            months(&m.revenue_monthly),
            vec![month(2023, 12), month(2024, 1), month(2024, 2)]
        );
        assert_eq!(values(&m.revenue_monthly), vec![10.0, 12.0, 20.0]);
        assert_eq!(values(&m.revenue_cumulative), vec![10.0, 22.0, 42.0]);
    }

    #[test]
    fn test_cumulative_is_running_sum() {
        let series: Vec<MonthlyValue> = [3.0, 0.0, 7.5, 1.25]
            .iter()
            .enumerate()
            .map(|(i, v)| MonthlyValue {
                month: month(2024, i as u32 + 1),
                value: *v,
            })
            .collect();
        let acc = cumulative(&series);

        assert_eq!(months(&acc), months(&series));
        let mut running = 0.0;
        for (i, point) in acc.iter().enumerate() {
            running += series[i].value;
            assert_eq!(point.value, running);
        }
        assert!(acc.windows(2).all(|w| w[1].value >= w[0].value));
    }

    #[test]
    fn test_cumulative_of_negative_profit_can_decrease() {
        let sales = vec![sale(2024, 1, "A", 100.0, 9), sale(2024, 2, "A", 100.0, 9)];
        let expenses = vec![expense(2024, 1, "Rent", 40.0), expense(2024, 2, "Rent", 160.0)];
        let m = build_metrics(&sales, &expenses);
        assert_eq!(values(&m.profit_monthly), vec![60.0, -60.0]);
        assert_eq!(values(&m.profit_cumulative), vec![60.0, 0.0]);
    }

    #[test]
    fn test_nps_bounds() {
        let promoters = vec![sale(2024, 1, "A", 1.0, 9), sale(2024, 1, "A", 1.0, 10)];
        assert_eq!(net_promoter_score(&promoters), 100.0);

        let detractors = vec![sale(2024, 1, "A", 1.0, 0), sale(2024, 1, "A", 1.0, 6)];
        assert_eq!(net_promoter_score(&detractors), -100.0);

        let passives = vec![sale(2024, 1, "A", 1.0, 7), sale(2024, 1, "A", 1.0, 8)];
        assert_eq!(net_promoter_score(&passives), 0.0);

        assert_eq!(net_promoter_score(&[]), 0.0);
    }

    #[test]
    fn test_nps_rounded_to_one_decimal() {
        // 1 promoter, 2 passives out of 3: 33.333.. -> 33.3
        let sales = vec![
            sale(2024, 1, "A", 1.0, 10),
            sale(2024, 1, "A", 1.0, 7),
            sale(2024, 1, "A", 1.0, 8),
        ];
        assert_eq!(net_promoter_score(&sales), 33.3);
    }

    #[test]
    fn test_profit_months_are_intersection() {
        let sales = vec![
            sale(2024, 1, "A", 100.0, 9),
            sale(2024, 2, "A", 200.0, 9),
            sale(2024, 4, "A", 300.0, 9),
        ];
        let expenses = vec![
            expense(2024, 2, "Rent", 50.0),
            expense(2024, 3, "Rent", 70.0),
            expense(2024, 4, "Rent", 100.0),
        ];
        let m = build_metrics(&sales, &expenses);

        assert_eq!(months(&m.profit_monthly), vec![month(2024, 2), month(2024, 4)]);
        assert_eq!(months(&m.margin_monthly), vec![month(2024, 2), month(2024, 4)]);
        assert_eq!(values(&m.profit_monthly), vec![150.0, 200.0]);
        assert_eq!(values(&m.margin_monthly), vec![75.0, 200.0 / 300.0 * 100.0]);
        assert_eq!(values(&m.profit_cumulative), vec![150.0, 350.0]);

        // grand totals use the full series
        assert_eq!(m.totals.revenue_total, 600.0);
        assert_eq!(m.totals.expense_total, 220.0);
        assert_eq!(m.totals.profit_total, 380.0);
    }

    #[test]
    fn test_no_common_months_gives_empty_profit_series() {
        let sales = vec![sale(2024, 1, "A", 100.0, 9)];
        let expenses = vec![expense(2024, 2, "Rent", 50.0)];
        let m = build_metrics(&sales, &expenses);
        assert!(m.profit_monthly.is_empty());
        assert!(m.profit_cumulative.is_empty());
        assert!(m.margin_monthly.is_empty());
        assert_eq!(m.totals.profit_total, 50.0);
    }

    #[test]
    fn test_margin_and_roi() {
        let sales = vec![sale(2024, 1, "A", 1000.0, 9)];
        let expenses = vec![expense(2024, 1, "Rent", 400.0)];
        let m = build_metrics(&sales, &expenses);
        assert_eq!(m.totals.margin_total, 60.0);
        assert_eq!(m.totals.roi, 150.0);
    }

    #[test]
    fn test_zero_denominators_fall_back_to_zero() {
        let m = build_metrics(&[sale(2024, 1, "A", 100.0, 9)], &[]);
        assert_eq!(m.totals.roi, 0.0);
        assert_eq!(m.totals.margin_total, 100.0);
        assert_eq!(m.average_monthly_expense, 0.0);

        let m = build_metrics(&[], &[expense(2024, 1, "Rent", 100.0)]);
        assert_eq!(m.totals.margin_total, 0.0);
        assert_eq!(m.totals.roi, -100.0);
        assert_eq!(m.average_ticket, 0.0);
        assert_eq!(m.nps, 0.0);

        let m = build_metrics(&[], &[]);
        assert_eq!(m.totals.margin_total, 0.0);
        assert_eq!(m.totals.roi, 0.0);
        assert!(!m.totals.margin_total.is_nan());
    }

    #[test]
    fn test_monthly_margin_zero_revenue_month() {
        let sales = vec![sale(2024, 1, "Gift", 0.0, 9)];
        let expenses = vec![expense(2024, 1, "Rent", 100.0)];
        let m = build_metrics(&sales, &expenses);
        assert_eq!(values(&m.profit_monthly), vec![-100.0]);
        assert_eq!(values(&m.margin_monthly), vec![0.0]);
    }

    #[test]
    fn test_monthly_margin_negative_revenue_month() {
        // refunds exceed sales in January
        let sales = vec![sale(2024, 1, "Refund", -100.0, 9)];
        let expenses = vec![expense(2024, 1, "Rent", 50.0)];
        let m = build_metrics(&sales, &expenses);
        assert_eq!(values(&m.profit_monthly), vec![-150.0]);
        assert_eq!(values(&m.margin_monthly), vec![150.0]);
        // grand total margin keeps the positive-revenue guard
        assert_eq!(m.totals.margin_total, 0.0);
    }

    #[test]
    fn test_expense_side() {
        let expenses = vec![
            expense(2024, 1, "Rent", 3000.0),
            expense(2024, 1, "Marketing", 500.0),
            expense(2024, 2, "Rent", 3000.0),
            expense(2024, 3, "Supplies", 4500.0),
        ];
        let m = build_metrics(&[], &expenses);

        let names: Vec<&str> = m.expenses_by_category.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Supplies", "Marketing"]);
        assert_eq!(values(&m.expenses_monthly), vec![3500.0, 3000.0, 4500.0]);
        assert_eq!(values(&m.expenses_cumulative), vec![3500.0, 6500.0, 11000.0]);
        assert_eq!(m.average_monthly_expense, 11000.0 / 3.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let sales = vec![sale(2024, 1, "A", 10.0, 9), sale(2024, 3, "B", 30.0, 2)];
        let expenses = vec![expense(2024, 1, "Rent", 5.0)];
        assert_eq!(build_metrics(&sales, &expenses), build_metrics(&sales, &expenses));
    }
}
