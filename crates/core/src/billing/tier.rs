//! Subscription tier enumeration.

use serde::{Deserialize, Serialize};

/// Account subscription tier.
///
/// A closed enumeration: adding a tier forces every capability and plan
/// match to be revisited at compile time. Controls gating only, never
/// arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free plan: data entry and basic dashboard.
    #[default]
    Free,
    /// Pro plan: adds PDF export and email reports.
    Pro,
    /// Premium plan: adds the scenario simulator.
    Premium,
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Pro => write!(f, "pro"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "premium" => Ok(Self::Premium),
            _ => Err(format!("Unknown subscription tier: {s}")),
        }
    }
}
