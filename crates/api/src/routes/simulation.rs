//! What-if simulation routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::error_response;
use crate::{AppState, middleware::AccountContext};
use profitpulse_core::aggregation::AggregationEngine;
use profitpulse_core::billing::Capability;
use profitpulse_core::period::PeriodKey;
use profitpulse_core::simulation::Scenario;
use profitpulse_shared::AppError;

/// Creates the simulation routes (requires the account middleware).
pub fn routes() -> Router<AppState> {
    Router::new().route("/simulation/run", post(run_simulation))
}

/// Request body for running a scenario against a stored month.
#[derive(Debug, Deserialize)]
pub struct RunSimulationRequest {
    /// Year of the baseline month.
    pub year: i32,
    /// Month of the baseline month.
    pub month: u32,
    /// Revenue adjustment percent; omitted means no change.
    pub revenue_delta_percent: Option<String>,
    /// Cost reduction percent; omitted means no change.
    pub cost_delta_percent: Option<String>,
}

/// Parses a decimal value from an optional string, defaulting to zero.
fn parse_decimal(value: Option<&str>) -> Decimal {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(Decimal::ZERO)
}

/// POST /simulation/run
///
/// Tier gating happens before anything else: an account without the
/// simulation capability gets 403 even for a month it has no data for.
async fn run_simulation(
    State(state): State<AppState>,
    ctx: AccountContext,
    Json(request): Json<RunSimulationRequest>,
) -> impl IntoResponse {
    if let Err(e) = ctx.tier().require(Capability::Simulation) {
        return error_response(&AppError::CapabilityDenied(e.to_string()));
    }

    let key = match PeriodKey::new(request.year, request.month) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let Some(record) = state.store.get(ctx.account_id(), key) else {
        return error_response(&AppError::NotFound(format!("No data for period {key}")));
    };

    let scenario = Scenario {
        revenue_delta_percent: parse_decimal(request.revenue_delta_percent.as_deref()),
        cost_delta_percent: parse_decimal(request.cost_delta_percent.as_deref()),
    };
    if let Err(e) = scenario.validate() {
        return error_response(&AppError::Validation(e.to_string()));
    }

    let baseline = AggregationEngine::aggregate(&record);
    let outcome = state.sim_cache.run_cached(&baseline, &scenario);

    debug!(
        account = %ctx.account_id(),
        period = %key,
        hash = %outcome.parameters_hash,
        cached = outcome.cached,
        "Simulation run"
    );

    Json(serde_json::json!({
        "period": key,
        "scenario": scenario,
        "baseline": baseline,
        "projected": outcome.projected,
        "comparison": outcome.comparison,
        "parameters_hash": outcome.parameters_hash,
        "cached": outcome.cached,
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_defaults_to_zero() {
        assert_eq!(parse_decimal(None), Decimal::ZERO);
        assert_eq!(parse_decimal(Some("not a number")), Decimal::ZERO);
        assert_eq!(parse_decimal(Some("")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal_accepts_signed_values() {
        assert_eq!(parse_decimal(Some("10")), dec!(10));
        assert_eq!(parse_decimal(Some("-25.5")), dec!(-25.5));
        assert_eq!(parse_decimal(Some("  7.25  ")), dec!(7.25));
    }
}
