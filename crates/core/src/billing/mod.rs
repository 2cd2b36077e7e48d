//! Subscription tiers, capability gating, and the plan catalog.
//!
//! Tier changes and payment happen at the billing provider; this module
//! only maps a tier to what it may do.

pub mod capability;
pub mod error;
pub mod plan;
pub mod tier;

pub use capability::Capability;
pub use error::BillingError;
pub use plan::{Plan, PlanLimits};
pub use tier::SubscriptionTier;
