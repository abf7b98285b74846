use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month bucket.
///
/// Field order matters: the derived `Ord` compares `year` first, then `month`,
/// which is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthKey {
    /// Returns `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Axis label, e.g. "Jan/2024"
    pub fn label(&self) -> String {
        let idx = (self.month as usize).clamp(1, 12) - 1;
        format!("{}/{}", MONTH_ABBREVIATIONS[idx], self.year)
    }
}

impl fmt::Display for MonthKey {
    /// Period in format "YYYY-MM"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 2).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2024, 1).unwrap(),
            MonthKey::new(2023, 3).unwrap(),
        ];
        keys.sort();
        let labels: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["2023-03", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey { year: 2024, month: 7 });
    }

    #[test]
    fn test_label_and_display() {
        let key = MonthKey::new(2024, 1).unwrap();
        assert_eq!(key.label(), "Jan/2024");
        assert_eq!(key.to_string(), "2024-01");
        assert_eq!(MonthKey::new(2023, 12).unwrap().label(), "Dec/2023");
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&MonthKey::new(2024, 5).unwrap()).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":5}"#);
    }
}
