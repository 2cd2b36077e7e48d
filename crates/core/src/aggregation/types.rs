//! Aggregate snapshot types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived totals for one period record.
///
/// Never persisted independently of its source record; `net_profit` is
/// always `total_revenue - total_costs` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    /// Sum of the three revenue components.
    pub total_revenue: Decimal,
    /// Sum of the three variable cost components.
    pub variable_costs: Decimal,
    /// Sum of the five fixed cost components.
    pub fixed_costs: Decimal,
    /// Variable plus fixed costs.
    pub total_costs: Decimal,
    /// Total revenue minus total costs. May be negative.
    pub net_profit: Decimal,
    /// Net profit as a percentage of total revenue; zero when revenue is zero.
    pub margin_percent: Decimal,
}

impl AggregateSnapshot {
    /// Returns a snapshot with every field zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            variable_costs: Decimal::ZERO,
            fixed_costs: Decimal::ZERO,
            total_costs: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            margin_percent: Decimal::ZERO,
        }
    }
}
