//! Simulation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::AggregateSnapshot;

/// Baseline-versus-projected movement for a single snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDelta {
    /// Baseline value.
    pub baseline: Decimal,
    /// Projected value.
    pub projected: Decimal,
    /// Absolute change (projected - baseline).
    pub delta: Decimal,
    /// Percentage change; zero when the baseline is zero.
    pub delta_percent: Decimal,
}

impl FieldDelta {
    /// Computes the movement between a baseline and a projected value.
    ///
    /// The percentage uses the same zero-guard policy as margin: a zero
    /// baseline yields 0, never a division error.
    #[must_use]
    pub fn between(baseline: Decimal, projected: Decimal) -> Self {
        let delta = projected - baseline;
        let delta_percent = if baseline.is_zero() {
            Decimal::ZERO
        } else {
            (delta / baseline) * Decimal::ONE_HUNDRED
        };

        Self {
            baseline,
            projected,
            delta,
            delta_percent,
        }
    }
}

/// Per-field comparison of a projection against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Total revenue movement.
    pub total_revenue: FieldDelta,
    /// Variable cost movement.
    pub variable_costs: FieldDelta,
    /// Fixed cost movement.
    pub fixed_costs: FieldDelta,
    /// Total cost movement.
    pub total_costs: FieldDelta,
    /// Net profit movement.
    pub net_profit: FieldDelta,
    /// Margin movement.
    pub margin_percent: FieldDelta,
}

/// Result of running a scenario against a baseline snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Projected snapshot, same shape as the baseline.
    pub projected: AggregateSnapshot,
    /// Field-by-field comparison against the baseline.
    pub comparison: ComparisonTable,
    /// Hash of (baseline, scenario), used as the cache key.
    pub parameters_hash: String,
    /// Whether this result was returned from cache.
    pub cached: bool,
}
