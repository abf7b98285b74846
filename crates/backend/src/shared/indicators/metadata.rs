use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn average_ticket() -> IndicatorId {
        IndicatorId::new("average_ticket")
    }
    pub fn nps() -> IndicatorId {
        IndicatorId::new("nps")
    }
    pub fn revenue_total() -> IndicatorId {
        IndicatorId::new("revenue_total")
    }
    pub fn expense_total() -> IndicatorId {
        IndicatorId::new("expense_total")
    }
    pub fn average_monthly_expense() -> IndicatorId {
        IndicatorId::new("average_monthly_expense")
    }
    pub fn profit_total() -> IndicatorId {
        IndicatorId::new("profit_total")
    }
    pub fn profit_margin() -> IndicatorId {
        IndicatorId::new("profit_margin")
    }
    pub fn roi() -> IndicatorId {
        IndicatorId::new("roi")
    }
}

/// Set IDs double as the dashboard tab keys.
pub mod set_ids {
    pub const REVENUE: &str = "revenue";
    pub const COSTS: &str = "costs";
    pub const PROFIT: &str = "profit";
}

/// Build the full catalogue of indicators + sets.
pub fn build_catalog(currency: &str) -> IndicatorCatalogResponse {
    let money = ValueFormat::Money {
        currency: currency.to_string(),
    };
    let percent = ValueFormat::Percent { decimals: 1 };

    let indicators = vec![
        IndicatorMeta {
            id: ids::average_ticket(),
            label: "Average ticket".into(),
            icon: "ticket".into(),
            format: money.clone(),
            description: Some("Mean value of a sale".into()),
        },
        IndicatorMeta {
            id: ids::nps(),
            label: "NPS".into(),
            icon: "star".into(),
            format: ValueFormat::Number { decimals: 1 },
            description: Some("% promoters (9-10) minus % detractors (0-6)".into()),
        },
        IndicatorMeta {
            id: ids::revenue_total(),
            label: "Total revenue".into(),
            icon: "dollar-sign".into(),
            format: money.clone(),
            description: Some("Sum of all sales".into()),
        },
        IndicatorMeta {
            id: ids::expense_total(),
            label: "Total expenses".into(),
            icon: "wallet".into(),
            format: money.clone(),
            description: Some("Sum of all expenses".into()),
        },
        IndicatorMeta {
            id: ids::average_monthly_expense(),
            label: "Average monthly expense".into(),
            icon: "calendar".into(),
            format: money.clone(),
            description: Some("Total expenses / months with expenses".into()),
        },
        IndicatorMeta {
            id: ids::profit_total(),
            label: "Total profit".into(),
            icon: "trending-up".into(),
            format: money,
            description: Some("Total revenue - total expenses".into()),
        },
        IndicatorMeta {
            id: ids::profit_margin(),
            label: "Profit margin".into(),
            icon: "percent".into(),
            format: percent.clone(),
            description: Some("Profit / revenue".into()),
        },
        IndicatorMeta {
            id: ids::roi(),
            label: "ROI".into(),
            icon: "target".into(),
            format: percent,
            description: Some("Profit / expenses".into()),
        },
    ];

    let sets = vec![
        IndicatorSetMeta {
            id: IndicatorSetId::new(set_ids::REVENUE),
            label: "Revenue".into(),
            indicators: vec![ids::average_ticket(), ids::nps(), ids::revenue_total()],
            columns: 3,
        },
        IndicatorSetMeta {
            id: IndicatorSetId::new(set_ids::COSTS),
            label: "Costs".into(),
            indicators: vec![ids::expense_total(), ids::average_monthly_expense()],
            columns: 2,
        },
        IndicatorSetMeta {
            id: IndicatorSetId::new(set_ids::PROFIT),
            label: "Profit".into(),
            indicators: vec![ids::profit_total(), ids::profit_margin(), ids::roi()],
            columns: 3,
        },
    ];

    IndicatorCatalogResponse { indicators, sets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_set_member_has_metadata() {
        let catalog = build_catalog("R$");
        let known: HashSet<&str> = catalog.indicators.iter().map(|m| m.id.0.as_str()).collect();
        for set in &catalog.sets {
            for id in &set.indicators {
                assert!(known.contains(id.0.as_str()), "{} has no metadata", id.0);
            }
        }
    }

    #[test]
    fn test_money_uses_configured_currency() {
        let catalog = build_catalog("US$");
        let revenue = catalog
            .indicators
            .iter()
            .find(|m| m.id == ids::revenue_total())
            .unwrap();
        assert_eq!(
            revenue.format,
            ValueFormat::Money {
                currency: "US$".into()
            }
        );
    }

    #[test]
    fn test_sets_are_the_three_tabs() {
        let catalog = build_catalog("R$");
        let set_keys: Vec<&str> = catalog.sets.iter().map(|s| s.id.0.as_str()).collect();
        assert_eq!(set_keys, vec!["revenue", "costs", "profit"]);
        assert!(catalog.set(set_ids::COSTS).is_some());
    }
}
