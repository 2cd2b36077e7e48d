//! Plan catalog served to the presentation and billing layers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tier::SubscriptionTier;

/// Limits attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Months of history available; `None` means unlimited.
    pub max_history_months: Option<u32>,
    /// Whether PDF export is available.
    pub pdf_export: bool,
    /// Whether email reports are available.
    pub email_reports: bool,
    /// Whether the scenario simulator is available.
    pub simulator: bool,
}

/// One entry in the plan catalog.
///
/// Catalog entries are static data serialized outward; they are never read
/// back in.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Tier this plan maps to.
    pub tier: SubscriptionTier,
    /// Display name.
    pub name: &'static str,
    /// Monthly price.
    pub monthly_price: Decimal,
    /// Marketing feature list.
    pub features: &'static [&'static str],
    /// Plan limits.
    pub limits: PlanLimits,
}

impl Plan {
    /// Returns the plan for a tier.
    #[must_use]
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => Self {
                tier,
                name: "Free",
                monthly_price: Decimal::ZERO,
                features: &[
                    "Monthly data entry",
                    "Basic dashboard",
                    "3 months of history",
                ],
                limits: PlanLimits {
                    max_history_months: Some(3),
                    pdf_export: false,
                    email_reports: false,
                    simulator: false,
                },
            },
            SubscriptionTier::Pro => Self {
                tier,
                name: "Pro",
                monthly_price: Decimal::new(1999, 2),
                features: &[
                    "Unlimited history",
                    "PDF export",
                    "Email reports",
                    "Advanced dashboard",
                ],
                limits: PlanLimits {
                    max_history_months: None,
                    pdf_export: true,
                    email_reports: true,
                    simulator: false,
                },
            },
            SubscriptionTier::Premium => Self {
                tier,
                name: "Premium",
                monthly_price: Decimal::new(3999, 2),
                features: &[
                    "Everything in Pro",
                    "Scenario simulator",
                    "Priority support",
                ],
                limits: PlanLimits {
                    max_history_months: None,
                    pdf_export: true,
                    email_reports: true,
                    simulator: true,
                },
            },
        }
    }

    /// The full catalog, cheapest first.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::for_tier(SubscriptionTier::Free),
            Self::for_tier(SubscriptionTier::Pro),
            Self::for_tier(SubscriptionTier::Premium),
        ]
    }
}
