//! Turning month series into chart inputs.

use contracts::dashboards::d400_financial_overview::{MonthKey, MonthlyValue};
use std::collections::BTreeMap;

/// Month labels and values of one series, in order.
pub fn split_series(series: &[MonthlyValue]) -> (Vec<String>, Vec<f64>) {
    series.iter().map(|p| (p.month.label(), p.value)).unzip()
}

/// Two series laid over the union of their months; a month missing from one
/// side counts as 0 there.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub months: Vec<MonthKey>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

impl AlignedSeries {
    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(MonthKey::label).collect()
    }
}

pub fn align_series(left: &[MonthlyValue], right: &[MonthlyValue]) -> AlignedSeries {
    let mut by_month: BTreeMap<MonthKey, (f64, f64)> = BTreeMap::new();
    for p in left {
        by_month.entry(p.month).or_default().0 += p.value;
    }
    for p in right {
        by_month.entry(p.month).or_default().1 += p.value;
    }

    let mut aligned = AlignedSeries {
        months: Vec::with_capacity(by_month.len()),
        left: Vec::with_capacity(by_month.len()),
        right: Vec::with_capacity(by_month.len()),
    };
    for (month, (l, r)) in by_month {
        aligned.months.push(month);
        aligned.left.push(l);
        aligned.right.push(r);
    }
    aligned
}
