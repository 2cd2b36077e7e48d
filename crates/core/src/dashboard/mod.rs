//! Month-over-month summaries and trend statistics.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{MonthOverMonth, MonthNetProfit, PeriodSummary, TrendStatistics};
