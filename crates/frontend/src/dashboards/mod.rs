pub mod d400_financial_overview;

pub use d400_financial_overview::ui::FinancialOverviewDashboard;
