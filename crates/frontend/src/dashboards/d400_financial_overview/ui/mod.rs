pub mod costs_tab;
pub mod dashboard;
pub mod profit_tab;
pub mod revenue_tab;

pub use dashboard::FinancialOverviewDashboard;
