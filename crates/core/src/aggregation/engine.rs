//! Aggregation engine mapping period records to aggregate snapshots.

use rust_decimal::Decimal;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::types::AggregateSnapshot;
use crate::period::PeriodRecord;

/// Engine deriving aggregate snapshots from period records.
///
/// Pure and referentially transparent: safe to call repeatedly and to
/// memoize by record hash.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Computes net profit margin, guarding against zero revenue.
    ///
    /// A zero-revenue period has a margin of exactly zero. Policy choice,
    /// not an error.
    #[must_use]
    pub fn margin_percent(net_profit: Decimal, total_revenue: Decimal) -> Decimal {
        if total_revenue.is_zero() {
            Decimal::ZERO
        } else {
            (net_profit / total_revenue) * Decimal::ONE_HUNDRED
        }
    }

    /// Derives the aggregate snapshot for a period record.
    #[must_use]
    pub fn aggregate(record: &PeriodRecord) -> AggregateSnapshot {
        let total_revenue =
            record.revenue_services + record.revenue_products + record.revenue_other;
        let variable_costs =
            record.cost_of_goods + record.commissions + record.variable_marketing;
        let fixed_costs = record.rent
            + record.salaries
            + record.utilities
            + record.fixed_marketing
            + record.other_fixed_costs;
        let total_costs = variable_costs + fixed_costs;
        let net_profit = total_revenue - total_costs;

        AggregateSnapshot {
            total_revenue,
            variable_costs,
            fixed_costs,
            total_costs,
            net_profit,
            margin_percent: Self::margin_percent(net_profit, total_revenue),
        }
    }

    /// Deterministic hash of a record, for memoizing derived snapshots by
    /// (year, month, record contents).
    #[must_use]
    pub fn hash_record(record: &PeriodRecord) -> String {
        let mut hasher = DefaultHasher::new();
        record.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}
