//! What-if scenario projections.

pub mod cache;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod types;

#[cfg(test)]
mod tests;

pub use cache::SimulationCache;
pub use engine::ScenarioEngine;
pub use error::SimulationError;
pub use scenario::Scenario;
pub use types::{ComparisonTable, FieldDelta, SimulationOutcome};
