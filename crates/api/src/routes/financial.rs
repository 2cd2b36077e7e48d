//! Financial data entry routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error_response;
use crate::{AppState, middleware::AccountContext};
use profitpulse_core::aggregation::{AggregateSnapshot, AggregationEngine};
use profitpulse_core::period::{PeriodKey, PeriodRecord, RawPeriodInput};
use profitpulse_shared::AppError;

/// Creates the financial data routes (requires the account middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/financial-data", post(submit_period).get(list_periods))
        .route(
            "/financial-data/{year}/{month}",
            get(get_period).delete(delete_period),
        )
}

/// Request body for submitting one month of data.
///
/// Component fields are deliberately untyped: numbers and numeric strings
/// are accepted, anything else defaults to zero. Partially filled forms
/// must never fail.
#[derive(Debug, Deserialize)]
pub struct SubmitPeriodRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Raw component amounts.
    #[serde(flatten)]
    pub input: RawPeriodInput,
}

/// A stored record together with its derived snapshot.
#[derive(Debug, Serialize)]
pub struct PeriodEntryResponse {
    /// The stored record.
    pub record: PeriodRecord,
    /// Derived totals.
    pub snapshot: AggregateSnapshot,
}

/// Optional filters for listing periods.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict to one year.
    pub year: Option<i32>,
    /// Restrict to one month.
    pub month: Option<u32>,
}

/// POST /financial-data
///
/// Creates or replaces the record for (year, month). A resubmission
/// supersedes the previous record wholesale.
async fn submit_period(
    State(state): State<AppState>,
    ctx: AccountContext,
    Json(request): Json<SubmitPeriodRequest>,
) -> impl IntoResponse {
    let key = match PeriodKey::new(request.year, request.month) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    // Free tier only keeps a short history window.
    if let Err(e) = ctx.tier().check_history_window(key, PeriodKey::current()) {
        return error_response(&AppError::CapabilityDenied(e.to_string()));
    }

    let record = PeriodRecord::from_raw(key, &request.input);
    let snapshot = AggregationEngine::aggregate(&record);
    let replaced = state.store.upsert(ctx.account_id(), record.clone());

    info!(
        account = %ctx.account_id(),
        period = %key,
        replaced,
        "Period record stored"
    );

    (
        StatusCode::CREATED,
        Json(PeriodEntryResponse { record, snapshot }),
    )
        .into_response()
}

/// GET /financial-data
///
/// Lists stored periods, newest first, optionally filtered by year/month.
async fn list_periods(
    State(state): State<AppState>,
    ctx: AccountContext,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let mut records = state.store.list(ctx.account_id());
    if let Some(year) = params.year {
        records.retain(|r| r.key.year == year);
    }
    if let Some(month) = params.month {
        records.retain(|r| r.key.month == month);
    }
    records.reverse(); // list() is oldest first

    let data: Vec<PeriodEntryResponse> = records
        .into_iter()
        .map(|record| {
            let snapshot = AggregationEngine::aggregate(&record);
            PeriodEntryResponse { record, snapshot }
        })
        .collect();

    Json(serde_json::json!({ "data": data })).into_response()
}

/// GET /financial-data/{year}/{month}
async fn get_period(
    State(state): State<AppState>,
    ctx: AccountContext,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let key = match PeriodKey::new(year, month) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    match state.store.get(ctx.account_id(), key) {
        Some(record) => {
            let snapshot = AggregationEngine::aggregate(&record);
            Json(PeriodEntryResponse { record, snapshot }).into_response()
        }
        None => error_response(&AppError::NotFound(format!("No data for period {key}"))),
    }
}

/// DELETE /financial-data/{year}/{month}
async fn delete_period(
    State(state): State<AppState>,
    ctx: AccountContext,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let key = match PeriodKey::new(year, month) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    match state.store.remove(ctx.account_id(), key) {
        Some(_) => {
            info!(account = %ctx.account_id(), period = %key, "Period record deleted");
            Json(serde_json::json!({ "deleted": true, "period": key })).into_response()
        }
        None => error_response(&AppError::NotFound(format!("No data for period {key}"))),
    }
}
