//! Period record types.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::PeriodError;

/// Earliest year accepted for data entry.
pub const MIN_YEAR: i32 = 2000;

/// Identifies one calendar month of financial data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PeriodKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl PeriodKey {
    /// Creates a validated period key.
    ///
    /// Months must fall in 1-12 and years in 2000 through next calendar year.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError` when either bound is violated.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }

        let max_year = chrono::Utc::now().year() + 1;
        if year < MIN_YEAR || year > max_year {
            return Err(PeriodError::YearOutOfRange {
                year,
                max: max_year,
            });
        }

        Ok(Self { year, month })
    }

    /// Returns the key for the preceding calendar month.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of whole months from `self` to `other` (positive when `other`
    /// is later).
    #[must_use]
    pub const fn months_until(self, other: Self) -> i32 {
        (other.year - self.year) * 12 + (other.month as i32 - self.month as i32)
    }

    /// Returns the key for the current calendar month.
    #[must_use]
    pub fn current() -> Self {
        let now = chrono::Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One month's raw revenue/cost inputs for one account.
///
/// All component amounts are non-negative; intake clamps rather than rejects.
/// A record is an immutable value once built. Resubmission for the same key
/// supersedes the old record at the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// The (year, month) this record covers.
    pub key: PeriodKey,
    /// Revenue from services.
    pub revenue_services: Decimal,
    /// Revenue from products.
    pub revenue_products: Decimal,
    /// Other revenue.
    pub revenue_other: Decimal,
    /// Cost of goods sold (variable).
    pub cost_of_goods: Decimal,
    /// Sales commissions (variable).
    pub commissions: Decimal,
    /// Variable marketing spend.
    pub variable_marketing: Decimal,
    /// Rent (fixed).
    pub rent: Decimal,
    /// Salaries (fixed).
    pub salaries: Decimal,
    /// Utilities (fixed).
    pub utilities: Decimal,
    /// Fixed marketing spend.
    pub fixed_marketing: Decimal,
    /// Other fixed costs.
    pub other_fixed_costs: Decimal,
}

/// Raw form input for one month, prior to numeric coercion.
///
/// Fields arrive as arbitrary JSON so that partially filled forms never
/// fail: numbers and numeric strings are accepted, everything else
/// (missing, null, garbage) becomes zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPeriodInput {
    /// Revenue from services.
    #[serde(default)]
    pub revenue_services: serde_json::Value,
    /// Revenue from products.
    #[serde(default)]
    pub revenue_products: serde_json::Value,
    /// Other revenue.
    #[serde(default)]
    pub revenue_other: serde_json::Value,
    /// Cost of goods sold.
    #[serde(default)]
    pub cost_of_goods: serde_json::Value,
    /// Sales commissions.
    #[serde(default)]
    pub commissions: serde_json::Value,
    /// Variable marketing spend.
    #[serde(default)]
    pub variable_marketing: serde_json::Value,
    /// Rent.
    #[serde(default)]
    pub rent: serde_json::Value,
    /// Salaries.
    #[serde(default)]
    pub salaries: serde_json::Value,
    /// Utilities.
    #[serde(default)]
    pub utilities: serde_json::Value,
    /// Fixed marketing spend.
    #[serde(default)]
    pub fixed_marketing: serde_json::Value,
    /// Other fixed costs.
    #[serde(default)]
    pub other_fixed_costs: serde_json::Value,
}

/// Coerces a raw JSON value to a non-negative amount.
///
/// Numbers and numeric strings parse; anything else defaults to zero.
/// Negative amounts are clamped to zero, not propagated and not rejected.
fn coerce_amount(value: &serde_json::Value) -> Decimal {
    let parsed = match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    };

    if parsed.is_sign_negative() {
        Decimal::ZERO
    } else {
        parsed
    }
}

impl PeriodRecord {
    /// Builds a record from raw form input, best-effort.
    ///
    /// This never fails: unparseable or missing fields become zero and
    /// negative entries are clamped to zero. Intentional leniency for
    /// partially filled forms.
    #[must_use]
    pub fn from_raw(key: PeriodKey, raw: &RawPeriodInput) -> Self {
        Self {
            key,
            revenue_services: coerce_amount(&raw.revenue_services),
            revenue_products: coerce_amount(&raw.revenue_products),
            revenue_other: coerce_amount(&raw.revenue_other),
            cost_of_goods: coerce_amount(&raw.cost_of_goods),
            commissions: coerce_amount(&raw.commissions),
            variable_marketing: coerce_amount(&raw.variable_marketing),
            rent: coerce_amount(&raw.rent),
            salaries: coerce_amount(&raw.salaries),
            utilities: coerce_amount(&raw.utilities),
            fixed_marketing: coerce_amount(&raw.fixed_marketing),
            other_fixed_costs: coerce_amount(&raw.other_fixed_costs),
        }
    }

    /// Returns a record with every component set to zero.
    #[must_use]
    pub fn zeroed(key: PeriodKey) -> Self {
        Self::from_raw(key, &RawPeriodInput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_period_key_valid() {
        let key = PeriodKey::new(2026, 3).unwrap();
        assert_eq!(key.year, 2026);
        assert_eq!(key.month, 3);
        assert_eq!(key.to_string(), "2026-03");
    }

    #[test]
    fn test_period_key_invalid_month() {
        assert_eq!(PeriodKey::new(2026, 0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(PeriodKey::new(2026, 13), Err(PeriodError::InvalidMonth(13)));
    }

    #[test]
    fn test_period_key_year_bounds() {
        assert!(matches!(
            PeriodKey::new(1999, 6),
            Err(PeriodError::YearOutOfRange { year: 1999, .. })
        ));
        assert!(matches!(
            PeriodKey::new(9999, 6),
            Err(PeriodError::YearOutOfRange { year: 9999, .. })
        ));
        assert!(PeriodKey::new(2000, 1).is_ok());
    }

    #[test]
    fn test_previous_rolls_over_year() {
        let jan = PeriodKey::new(2026, 1).unwrap();
        let prev = jan.previous();
        assert_eq!(prev.year, 2025);
        assert_eq!(prev.month, 12);

        let mar = PeriodKey::new(2026, 3).unwrap();
        assert_eq!(mar.previous().month, 2);
        assert_eq!(mar.previous().year, 2026);
    }

    #[test]
    fn test_months_until() {
        let a = PeriodKey::new(2025, 11).unwrap();
        let b = PeriodKey::new(2026, 2).unwrap();
        assert_eq!(a.months_until(b), 3);
        assert_eq!(b.months_until(a), -3);
        assert_eq!(a.months_until(a), 0);
    }

    #[test]
    fn test_key_ordering() {
        let earlier = PeriodKey::new(2025, 12).unwrap();
        let later = PeriodKey::new(2026, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_coerce_number_and_string() {
        assert_eq!(coerce_amount(&json!(1500)), dec!(1500));
        assert_eq!(coerce_amount(&json!(99.5)), dec!(99.5));
        assert_eq!(coerce_amount(&json!("250.75")), dec!(250.75));
        assert_eq!(coerce_amount(&json!(" 10 ")), dec!(10));
    }

    #[test]
    fn test_coerce_garbage_defaults_to_zero() {
        assert_eq!(coerce_amount(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!("abc")), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!("")), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!([1, 2])), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!({"a": 1})), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!(true)), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_clamps_negative() {
        assert_eq!(coerce_amount(&json!(-100)), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!("-42.5")), Decimal::ZERO);
    }

    #[test]
    fn test_from_raw_partial_form() {
        let key = PeriodKey::new(2026, 1).unwrap();
        let raw: RawPeriodInput = serde_json::from_value(json!({
            "revenue_services": 20000,
            "revenue_products": "6000",
            "rent": -500,
            "salaries": "not a number"
        }))
        .unwrap();

        let record = PeriodRecord::from_raw(key, &raw);
        assert_eq!(record.revenue_services, dec!(20000));
        assert_eq!(record.revenue_products, dec!(6000));
        assert_eq!(record.revenue_other, Decimal::ZERO);
        assert_eq!(record.rent, Decimal::ZERO);
        assert_eq!(record.salaries, Decimal::ZERO);
    }

    #[test]
    fn test_all_components_non_negative() {
        let key = PeriodKey::new(2026, 1).unwrap();
        let raw: RawPeriodInput = serde_json::from_value(json!({
            "revenue_services": -1,
            "revenue_products": -2.5,
            "revenue_other": "-3",
            "cost_of_goods": -4,
            "commissions": -5,
            "variable_marketing": -6,
            "rent": -7,
            "salaries": -8,
            "utilities": -9,
            "fixed_marketing": -10,
            "other_fixed_costs": -11
        }))
        .unwrap();

        let record = PeriodRecord::from_raw(key, &raw);
        assert_eq!(record, PeriodRecord::zeroed(key));
    }
}
