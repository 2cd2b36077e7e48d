//! Property-based tests for the aggregation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::AggregationEngine;
use crate::period::{PeriodKey, PeriodRecord};

fn record_from_cents(components: [i64; 11]) -> PeriodRecord {
    let d = |cents: i64| Decimal::new(cents, 2);
    PeriodRecord {
        key: PeriodKey { year: 2026, month: 1 },
        revenue_services: d(components[0]),
        revenue_products: d(components[1]),
        revenue_other: d(components[2]),
        cost_of_goods: d(components[3]),
        commissions: d(components[4]),
        variable_marketing: d(components[5]),
        rent: d(components[6]),
        salaries: d(components[7]),
        utilities: d(components[8]),
        fixed_marketing: d(components[9]),
        other_fixed_costs: d(components[10]),
    }
}

proptest! {
    /// total_costs is always variable_costs + fixed_costs, exactly.
    #[test]
    fn test_cost_identity(components in prop::array::uniform11(0i64..100_000_000)) {
        let snapshot = AggregationEngine::aggregate(&record_from_cents(components));
        prop_assert_eq!(
            snapshot.total_costs,
            snapshot.variable_costs + snapshot.fixed_costs
        );
    }

    /// net_profit is always total_revenue - total_costs, exactly.
    #[test]
    fn test_net_profit_identity(components in prop::array::uniform11(0i64..100_000_000)) {
        let snapshot = AggregationEngine::aggregate(&record_from_cents(components));
        prop_assert_eq!(
            snapshot.net_profit,
            snapshot.total_revenue - snapshot.total_costs
        );
    }

    /// Margin reconstructs net profit when revenue is positive.
    #[test]
    fn test_margin_consistent(components in prop::array::uniform11(1i64..100_000_000)) {
        let snapshot = AggregationEngine::aggregate(&record_from_cents(components));
        prop_assert!(!snapshot.total_revenue.is_zero());

        let reconstructed =
            snapshot.margin_percent * snapshot.total_revenue / Decimal::ONE_HUNDRED;
        let diff = (reconstructed - snapshot.net_profit).abs();
        prop_assert!(diff < dec!(0.0001));
    }

    /// Hash is deterministic and sensitive to contents.
    #[test]
    fn test_hash_record(components in prop::array::uniform11(0i64..100_000_000)) {
        let record = record_from_cents(components);
        prop_assert_eq!(
            AggregationEngine::hash_record(&record),
            AggregationEngine::hash_record(&record.clone())
        );

        let mut changed = record.clone();
        changed.revenue_services += dec!(0.01);
        prop_assert_ne!(
            AggregationEngine::hash_record(&record),
            AggregationEngine::hash_record(&changed)
        );
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_zero_record_has_zero_margin() {
        let record = PeriodRecord::zeroed(PeriodKey { year: 2026, month: 1 });
        let snapshot = AggregationEngine::aggregate(&record);

        assert_eq!(snapshot.total_revenue, Decimal::ZERO);
        assert_eq!(snapshot.total_costs, Decimal::ZERO);
        assert_eq!(snapshot.net_profit, Decimal::ZERO);
        assert_eq!(snapshot.margin_percent, Decimal::ZERO);
    }

    #[test]
    fn test_worked_example() {
        // 27500 revenue, 8250 variable, 8000 fixed -> 11250 profit at ~40.91%
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

        let snapshot = AggregationEngine::aggregate(&record);
        assert_eq!(snapshot.total_revenue, dec!(27500));
        assert_eq!(snapshot.variable_costs, dec!(8250));
        assert_eq!(snapshot.fixed_costs, dec!(8000));
        assert_eq!(snapshot.total_costs, dec!(16250));
        assert_eq!(snapshot.net_profit, dec!(11250));
        assert_eq!(snapshot.margin_percent.round_dp(2), dec!(40.91));
    }

    #[test]
    fn test_net_profit_may_be_negative() {
        let mut record = PeriodRecord::zeroed(PeriodKey { year: 2026, month: 2 });
        record.revenue_services = dec!(1000);
        record.rent = dec!(3000);

        let snapshot = AggregationEngine::aggregate(&record);
        assert_eq!(snapshot.net_profit, dec!(-2000));
        assert_eq!(snapshot.margin_percent, dec!(-200));
    }
}
