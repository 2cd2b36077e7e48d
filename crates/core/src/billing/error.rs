//! Billing and access policy errors.

use thiserror::Error;

use super::capability::Capability;
use super::tier::SubscriptionTier;

/// Errors raised by the access policy gate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// The tier lacks a required capability.
    ///
    /// Fatal to the single request, not to the session.
    #[error("The {tier} plan does not include {capability}")]
    CapabilityDenied {
        /// Tier that attempted the operation.
        tier: SubscriptionTier,
        /// Capability that was required.
        capability: Capability,
    },

    /// The period falls outside the tier's history window.
    #[error("The {tier} plan only allows {limit_months} months of history")]
    HistoryLimitExceeded {
        /// Tier that attempted the operation.
        tier: SubscriptionTier,
        /// Months of history the tier allows.
        limit_months: u32,
    },
}
