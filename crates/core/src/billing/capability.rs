//! Capability gating per subscription tier.
//!
//! The boundary layer checks capabilities before invoking the engines; the
//! engines themselves assume the check already happened.

use serde::{Deserialize, Serialize};

use super::error::BillingError;
use super::tier::SubscriptionTier;
use crate::period::PeriodKey;

/// A gated feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Entering monthly revenue/cost data. Always on.
    DataEntry,
    /// Viewing the basic dashboard. Always on.
    BasicDashboard,
    /// PDF download and email report send.
    Export,
    /// Scenario simulator access.
    Simulation,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataEntry => write!(f, "data entry"),
            Self::BasicDashboard => write!(f, "the dashboard"),
            Self::Export => write!(f, "report export"),
            Self::Simulation => write!(f, "the scenario simulator"),
        }
    }
}

impl SubscriptionTier {
    /// The capability table. Deterministic, no network or time dependency.
    #[must_use]
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Free => &[Capability::DataEntry, Capability::BasicDashboard],
            Self::Pro => &[
                Capability::DataEntry,
                Capability::BasicDashboard,
                Capability::Export,
            ],
            Self::Premium => &[
                Capability::DataEntry,
                Capability::BasicDashboard,
                Capability::Export,
                Capability::Simulation,
            ],
        }
    }

    /// Returns true if this tier includes the capability.
    #[must_use]
    pub fn allows(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Fails with `CapabilityDenied` unless the tier includes the capability.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::CapabilityDenied` naming the tier and the
    /// missing capability.
    pub fn require(self, capability: Capability) -> Result<(), BillingError> {
        if self.allows(capability) {
            Ok(())
        } else {
            Err(BillingError::CapabilityDenied {
                tier: self,
                capability,
            })
        }
    }

    /// Months of history this tier may access; `None` means unlimited.
    #[must_use]
    pub const fn max_history_months(self) -> Option<u32> {
        match self {
            Self::Free => Some(3),
            Self::Pro | Self::Premium => None,
        }
    }

    /// Checks that a period falls inside the tier's history window,
    /// measured backwards from `current`.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::HistoryLimitExceeded` when the period is too
    /// far in the past for the tier.
    pub fn check_history_window(
        self,
        period: PeriodKey,
        current: PeriodKey,
    ) -> Result<(), BillingError> {
        if let Some(limit_months) = self.max_history_months() {
            let months_back = period.months_until(current);
            #[allow(clippy::cast_possible_wrap)]
            if months_back > limit_months as i32 {
                return Err(BillingError::HistoryLimitExceeded {
                    tier: self,
                    limit_months,
                });
            }
        }
        Ok(())
    }
}
