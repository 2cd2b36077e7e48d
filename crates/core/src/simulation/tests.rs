//! Property-based tests for the scenario engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::ScenarioEngine;
use super::scenario::Scenario;
use crate::aggregation::{AggregateSnapshot, AggregationEngine};
use crate::period::{PeriodKey, PeriodRecord};

fn baseline_from_cents(revenue: i64, variable: i64, fixed: i64) -> AggregateSnapshot {
    let total_revenue = Decimal::new(revenue, 2);
    let variable_costs = Decimal::new(variable, 2);
    let fixed_costs = Decimal::new(fixed, 2);
    let total_costs = variable_costs + fixed_costs;
    let net_profit = total_revenue - total_costs;

    AggregateSnapshot {
        total_revenue,
        variable_costs,
        fixed_costs,
        total_costs,
        net_profit,
        margin_percent: AggregationEngine::margin_percent(net_profit, total_revenue),
    }
}

fn scenario_from_bps(revenue_bps: i64, cost_bps: i64) -> Scenario {
    // Basis points of a percent: -5000 bps = -50.00%
    Scenario {
        revenue_delta_percent: Decimal::new(revenue_bps, 2),
        cost_delta_percent: Decimal::new(cost_bps, 2),
    }
}

proptest! {
    /// Identity: the zero scenario projects the baseline exactly.
    #[test]
    fn test_identity_scenario(
        revenue in 0i64..1_000_000_000,
        variable in 0i64..500_000_000,
        fixed in 0i64..500_000_000,
    ) {
        let baseline = baseline_from_cents(revenue, variable, fixed);
        let outcome = ScenarioEngine::simulate(&baseline, &Scenario::identity());

        prop_assert_eq!(outcome.projected, baseline);
        prop_assert_eq!(outcome.comparison.net_profit.delta, Decimal::ZERO);
        prop_assert_eq!(outcome.comparison.total_revenue.delta_percent, Decimal::ZERO);
    }

    /// Projected totals keep the aggregation identities.
    #[test]
    fn test_projected_identities(
        revenue in 0i64..1_000_000_000,
        variable in 0i64..500_000_000,
        fixed in 0i64..500_000_000,
        revenue_bps in -5000i64..=10000,
        cost_bps in -5000i64..=5000,
    ) {
        let baseline = baseline_from_cents(revenue, variable, fixed);
        let scenario = scenario_from_bps(revenue_bps, cost_bps);
        let outcome = ScenarioEngine::simulate(&baseline, &scenario);

        prop_assert_eq!(
            outcome.projected.total_costs,
            outcome.projected.variable_costs + outcome.projected.fixed_costs
        );
        prop_assert_eq!(
            outcome.projected.net_profit,
            outcome.projected.total_revenue - outcome.projected.total_costs
        );
    }

    /// Monotonicity: with positive revenue, a larger revenue delta strictly
    /// increases projected net profit.
    #[test]
    fn test_net_profit_monotonic_in_revenue_delta(
        revenue in 1i64..1_000_000_000,
        variable in 0i64..500_000_000,
        fixed in 0i64..500_000_000,
        cost_bps in -5000i64..=5000,
        lower_bps in -5000i64..10000,
    ) {
        let baseline = baseline_from_cents(revenue, variable, fixed);
        let smaller = scenario_from_bps(lower_bps, cost_bps);
        let larger = scenario_from_bps(lower_bps + 1, cost_bps);

        let low = ScenarioEngine::simulate(&baseline, &smaller);
        let high = ScenarioEngine::simulate(&baseline, &larger);

        prop_assert!(high.projected.net_profit > low.projected.net_profit);
    }

    /// Comparison symmetry: delta is always projected minus baseline.
    #[test]
    fn test_comparison_symmetry(
        revenue in 0i64..1_000_000_000,
        variable in 0i64..500_000_000,
        fixed in 0i64..500_000_000,
        revenue_bps in -5000i64..=10000,
        cost_bps in -5000i64..=5000,
    ) {
        let baseline = baseline_from_cents(revenue, variable, fixed);
        let scenario = scenario_from_bps(revenue_bps, cost_bps);
        let outcome = ScenarioEngine::simulate(&baseline, &scenario);

        prop_assert_eq!(
            outcome.comparison.net_profit.delta,
            outcome.projected.net_profit - baseline.net_profit
        );
        prop_assert_eq!(
            outcome.comparison.total_costs.delta,
            outcome.projected.total_costs - baseline.total_costs
        );
    }

    /// Zero-revenue baseline: margin stays zero under any scenario.
    #[test]
    fn test_zero_revenue_margin_guard(
        variable in 0i64..500_000_000,
        fixed in 0i64..500_000_000,
        revenue_bps in -5000i64..=10000,
        cost_bps in -5000i64..=5000,
    ) {
        let baseline = baseline_from_cents(0, variable, fixed);
        let scenario = scenario_from_bps(revenue_bps, cost_bps);
        let outcome = ScenarioEngine::simulate(&baseline, &scenario);

        prop_assert_eq!(outcome.projected.margin_percent, Decimal::ZERO);
    }

    /// Hash is deterministic for the same inputs.
    #[test]
    fn test_hash_deterministic(
        revenue in 0i64..1_000_000_000,
        revenue_bps in -5000i64..=10000,
    ) {
        let baseline = baseline_from_cents(revenue, 100, 100);
        let scenario = scenario_from_bps(revenue_bps, 0);

        prop_assert_eq!(
            ScenarioEngine::hash_inputs(&baseline, &scenario),
            ScenarioEngine::hash_inputs(&baseline, &scenario)
        );
    }
}

mod unit_tests {
    use super::*;

    /// Worked example from the product brief: +10% revenue, -10% costs on a
    /// 27500/16250 baseline.
    #[test]
    fn test_worked_example_projection() {
        let mut record = PeriodRecord::zeroed(PeriodKey { year: 2026, month: 1 });
        record.revenue_services = dec!(20000);
        record.revenue_products = dec!(6000);
        record.revenue_other = dec!(1500);
        record.cost_of_goods = dec!(5000);
        record.commissions = dec!(2000);
        record.variable_marketing = dec!(1250);
        record.rent = dec!(2500);
        record.salaries = dec!(4000);
        record.utilities = dec!(500);
        record.fixed_marketing = dec!(600);
        record.other_fixed_costs = dec!(400);

        let baseline = AggregationEngine::aggregate(&record);
        let scenario = Scenario {
            revenue_delta_percent: dec!(10),
            cost_delta_percent: dec!(10),
        };

        let outcome = ScenarioEngine::simulate(&baseline, &scenario);

        assert_eq!(outcome.projected.total_revenue, dec!(30250));
        assert_eq!(outcome.projected.total_costs, dec!(14625));
        assert_eq!(outcome.projected.net_profit, dec!(15625));
        assert_eq!(outcome.comparison.net_profit.delta, dec!(4375));
        assert_eq!(
            outcome.comparison.net_profit.delta_percent.round_dp(2),
            dec!(38.89)
        );
    }

    #[test]
    fn test_cost_reduction_applies_to_both_classes() {
        let baseline = baseline_from_cents(1_000_000, 400_000, 200_000);
        let scenario = Scenario {
            revenue_delta_percent: Decimal::ZERO,
            cost_delta_percent: dec!(25),
        };

        let outcome = ScenarioEngine::simulate(&baseline, &scenario);
        assert_eq!(outcome.projected.variable_costs, dec!(3000));
        assert_eq!(outcome.projected.fixed_costs, dec!(1500));
    }

    #[test]
    fn test_negative_cost_delta_increases_costs() {
        let baseline = baseline_from_cents(1_000_000, 400_000, 200_000);
        let scenario = Scenario {
            revenue_delta_percent: Decimal::ZERO,
            cost_delta_percent: dec!(-10),
        };

        let outcome = ScenarioEngine::simulate(&baseline, &scenario);
        assert_eq!(outcome.projected.variable_costs, dec!(4400));
        assert_eq!(outcome.projected.fixed_costs, dec!(2200));
    }

    #[test]
    fn test_delta_percent_zero_guard() {
        let baseline = baseline_from_cents(100_000, 0, 0);
        let scenario = Scenario {
            revenue_delta_percent: Decimal::ZERO,
            cost_delta_percent: dec!(10),
        };

        let outcome = ScenarioEngine::simulate(&baseline, &scenario);
        // Costs are zero at baseline, so their delta percent is guarded to 0.
        assert_eq!(outcome.comparison.total_costs.delta_percent, Decimal::ZERO);
    }
}
