//! Scenario engine for running projections.

use rust_decimal::Decimal;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::scenario::Scenario;
use super::types::{ComparisonTable, FieldDelta, SimulationOutcome};
use crate::aggregation::{AggregateSnapshot, AggregationEngine};

/// Engine for running what-if simulations against an aggregate snapshot.
///
/// Pure function of (baseline, scenario). Range validation is the caller's
/// job (`Scenario::validate`); handed out-of-range values, the engine still
/// computes the formulas mechanically.
pub struct ScenarioEngine;

impl ScenarioEngine {
    /// Deterministic hash of the simulation inputs, for caching.
    #[must_use]
    pub fn hash_inputs(baseline: &AggregateSnapshot, scenario: &Scenario) -> String {
        let mut hasher = DefaultHasher::new();
        baseline.hash(&mut hasher);
        scenario.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    /// Projects a baseline snapshot under a scenario and compares the two.
    ///
    /// Revenue scales by `(1 + revenue_delta/100)`; both cost classes scale
    /// by `(1 - cost_delta/100)` — the same reduction factor for variable
    /// and fixed costs. Derived fields are recomputed with the aggregation
    /// formulas, including the zero-revenue margin guard.
    #[must_use]
    pub fn simulate(baseline: &AggregateSnapshot, scenario: &Scenario) -> SimulationOutcome {
        let revenue_factor =
            Decimal::ONE + scenario.revenue_delta_percent / Decimal::ONE_HUNDRED;
        let cost_factor = Decimal::ONE - scenario.cost_delta_percent / Decimal::ONE_HUNDRED;

        let total_revenue = baseline.total_revenue * revenue_factor;
        let variable_costs = baseline.variable_costs * cost_factor;
        let fixed_costs = baseline.fixed_costs * cost_factor;
        let total_costs = variable_costs + fixed_costs;
        let net_profit = total_revenue - total_costs;

        let projected = AggregateSnapshot {
            total_revenue,
            variable_costs,
            fixed_costs,
            total_costs,
            net_profit,
            margin_percent: AggregationEngine::margin_percent(net_profit, total_revenue),
        };

        let comparison = ComparisonTable {
            total_revenue: FieldDelta::between(baseline.total_revenue, projected.total_revenue),
            variable_costs: FieldDelta::between(
                baseline.variable_costs,
                projected.variable_costs,
            ),
            fixed_costs: FieldDelta::between(baseline.fixed_costs, projected.fixed_costs),
            total_costs: FieldDelta::between(baseline.total_costs, projected.total_costs),
            net_profit: FieldDelta::between(baseline.net_profit, projected.net_profit),
            margin_percent: FieldDelta::between(
                baseline.margin_percent,
                projected.margin_percent,
            ),
        };

        SimulationOutcome {
            projected,
            comparison,
            parameters_hash: Self::hash_inputs(baseline, scenario),
            cached: false,
        }
    }
}
