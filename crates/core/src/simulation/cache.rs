//! Simulation result caching using Moka.
//!
//! The engine is pure, so results are memoizable by the hash of
//! (baseline, scenario). Avoids recomputing while a user drags a slider
//! back and forth over the same values.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use super::engine::ScenarioEngine;
use super::scenario::Scenario;
use super::types::SimulationOutcome;
use crate::aggregation::AggregateSnapshot;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for simulation outcomes.
///
/// Thread-safe and suitable for concurrent access; keyed by the hash of
/// the simulation inputs.
#[derive(Clone)]
pub struct SimulationCache {
    cache: Cache<String, Arc<SimulationOutcome>>,
}

impl SimulationCache {
    /// Creates a new simulation cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new simulation cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Runs a simulation, returning a cached outcome if available.
    ///
    /// Cached outcomes come back with `cached: true`; fresh runs are stored
    /// before being returned.
    #[must_use]
    pub fn run_cached(
        &self,
        baseline: &AggregateSnapshot,
        scenario: &Scenario,
    ) -> SimulationOutcome {
        let cache_key = ScenarioEngine::hash_inputs(baseline, scenario);

        if let Some(cached_outcome) = self.cache.get(&cache_key) {
            let mut outcome = (*cached_outcome).clone();
            outcome.cached = true;
            return outcome;
        }

        let outcome = ScenarioEngine::simulate(baseline, scenario);
        self.cache.insert(cache_key, Arc::new(outcome.clone()));

        outcome
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks so entry counts and evictions settle.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new()
    }
}
