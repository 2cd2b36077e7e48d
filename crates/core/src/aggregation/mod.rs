//! Derivation of aggregate snapshots from period records.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AggregationEngine;
pub use types::AggregateSnapshot;
