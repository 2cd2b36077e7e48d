//! Simulation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Simulation-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Scenario percentage outside its documented domain.
    ///
    /// Surfaced instead of silently computing a nonsensical projection.
    #[error("{field} must be between {min} and {max}, got {value}")]
    ScenarioOutOfRange {
        /// Which percentage was rejected.
        field: &'static str,
        /// Lower bound of the domain.
        min: Decimal,
        /// Upper bound of the domain.
        max: Decimal,
        /// Rejected value.
        value: Decimal,
    },
}
