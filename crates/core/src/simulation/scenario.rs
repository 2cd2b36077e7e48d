//! Simulation scenario types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Lower bound for the revenue adjustment, in percent.
pub const REVENUE_DELTA_MIN: Decimal = Decimal::from_parts(50, 0, 0, true, 0);
/// Upper bound for the revenue adjustment, in percent.
pub const REVENUE_DELTA_MAX: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// Lower bound for the cost reduction, in percent.
pub const COST_DELTA_MIN: Decimal = Decimal::from_parts(50, 0, 0, true, 0);
/// Upper bound for the cost reduction, in percent.
pub const COST_DELTA_MAX: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// A what-if scenario: two percentage adjustments applied to a baseline.
///
/// `cost_delta_percent` is a *reduction*, applied uniformly to variable and
/// fixed costs. Cost-cutting is modeled as proportional across categories,
/// not category-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    /// Revenue adjustment in percent, domain [-50, +100].
    pub revenue_delta_percent: Decimal,
    /// Cost reduction in percent, domain [-50, +50].
    pub cost_delta_percent: Decimal,
}

impl Scenario {
    /// The do-nothing scenario. Projects the baseline unchanged.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            revenue_delta_percent: Decimal::ZERO,
            cost_delta_percent: Decimal::ZERO,
        }
    }

    /// Checks both percentages against their documented domains.
    ///
    /// The engine itself computes mechanically whatever it is handed; the
    /// boundary layer calls this before invoking it.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::ScenarioOutOfRange` naming the offending
    /// field.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.revenue_delta_percent < REVENUE_DELTA_MIN
            || self.revenue_delta_percent > REVENUE_DELTA_MAX
        {
            return Err(SimulationError::ScenarioOutOfRange {
                field: "revenue_delta_percent",
                min: REVENUE_DELTA_MIN,
                max: REVENUE_DELTA_MAX,
                value: self.revenue_delta_percent,
            });
        }

        if self.cost_delta_percent < COST_DELTA_MIN || self.cost_delta_percent > COST_DELTA_MAX {
            return Err(SimulationError::ScenarioOutOfRange {
                field: "cost_delta_percent",
                min: COST_DELTA_MIN,
                max: COST_DELTA_MAX,
                value: self.cost_delta_percent,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bounds_constants() {
        assert_eq!(REVENUE_DELTA_MIN, dec!(-50));
        assert_eq!(REVENUE_DELTA_MAX, dec!(100));
        assert_eq!(COST_DELTA_MIN, dec!(-50));
        assert_eq!(COST_DELTA_MAX, dec!(50));
    }

    #[rstest]
    #[case(dec!(-50), dec!(0))]
    #[case(dec!(100), dec!(0))]
    #[case(dec!(0), dec!(-50))]
    #[case(dec!(0), dec!(50))]
    #[case(dec!(0), dec!(0))]
    fn test_validate_accepts_boundaries(#[case] rev: Decimal, #[case] cost: Decimal) {
        let scenario = Scenario {
            revenue_delta_percent: rev,
            cost_delta_percent: cost,
        };
        assert!(scenario.validate().is_ok(), "({rev}, {cost}) should pass");
    }

    #[rstest]
    #[case(dec!(-50.01), dec!(0), "revenue_delta_percent")]
    #[case(dec!(100.01), dec!(0), "revenue_delta_percent")]
    #[case(dec!(0), dec!(-50.01), "cost_delta_percent")]
    #[case(dec!(0), dec!(50.01), "cost_delta_percent")]
    fn test_validate_rejects_out_of_range(
        #[case] rev: Decimal,
        #[case] cost: Decimal,
        #[case] expected_field: &'static str,
    ) {
        let scenario = Scenario {
            revenue_delta_percent: rev,
            cost_delta_percent: cost,
        };
        assert!(matches!(
            scenario.validate(),
            Err(SimulationError::ScenarioOutOfRange { field, .. }) if field == expected_field
        ));
    }
}
