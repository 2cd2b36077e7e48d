//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::AggregateSnapshot;
use crate::period::PeriodKey;

/// One month's dashboard summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Period the summary covers.
    pub period: PeriodKey,
    /// Derived totals for the period.
    pub snapshot: AggregateSnapshot,
    /// Percentage changes versus the previous month, when one exists.
    pub changes: Option<MonthOverMonth>,
}

/// Percentage changes versus the previous month.
///
/// A field is `None` when the previous value was zero (the change is
/// undefined, not infinite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOverMonth {
    /// Total revenue change percent.
    pub total_revenue: Option<Decimal>,
    /// Variable cost change percent.
    pub variable_costs: Option<Decimal>,
    /// Fixed cost change percent.
    pub fixed_costs: Option<Decimal>,
    /// Total cost change percent.
    pub total_costs: Option<Decimal>,
    /// Net profit change percent.
    pub net_profit: Option<Decimal>,
    /// Margin change percent.
    pub margin_percent: Option<Decimal>,
}

/// Net profit of a single month, for best/worst rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthNetProfit {
    /// Which month.
    pub period: PeriodKey,
    /// Net profit that month.
    pub net_profit: Decimal,
}

/// Aggregate statistics over a run of months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendStatistics {
    /// Sum of revenue over the window.
    pub total_revenue: Decimal,
    /// Sum of costs over the window.
    pub total_costs: Decimal,
    /// Sum of net profit over the window.
    pub total_net_profit: Decimal,
    /// Mean margin over the window; zero when the window is empty.
    pub average_margin_percent: Decimal,
    /// Month with the highest net profit.
    pub best_month: Option<MonthNetProfit>,
    /// Month with the lowest net profit.
    pub worst_month: Option<MonthNetProfit>,
    /// Number of months in the window.
    pub months_count: usize,
}
