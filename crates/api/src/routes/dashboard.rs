//! Dashboard summary and trend routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use super::error_response;
use crate::{AppState, middleware::AccountContext};
use profitpulse_core::aggregation::AggregationEngine;
use profitpulse_core::dashboard::DashboardService;
use profitpulse_core::period::PeriodKey;
use profitpulse_shared::AppError;

/// Creates the dashboard routes (requires the account middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/summary", get(summary))
        .route("/dashboard/trends", get(trends))
        .route("/dashboard/charts", get(charts))
}

/// Query parameters for the summary view.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// Year to summarize; defaults to the current year.
    pub year: Option<i32>,
    /// Month to summarize; defaults to the current month.
    pub month: Option<u32>,
}

/// Query parameters for the trends view.
#[derive(Debug, Deserialize)]
pub struct TrendParams {
    /// Window size in months, counting back from the newest record.
    pub months: Option<usize>,
}

/// GET /dashboard/summary
///
/// Summarizes one month with month-over-month changes. Answers
/// `has_data: false` rather than 404 when the month has no record, so
/// the dashboard can render an empty state.
async fn summary(
    State(state): State<AppState>,
    ctx: AccountContext,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let current = PeriodKey::current();
    let key = match PeriodKey::new(
        params.year.unwrap_or(current.year),
        params.month.unwrap_or(current.month),
    ) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let Some(record) = state.store.get(ctx.account_id(), key) else {
        return Json(serde_json::json!({
            "has_data": false,
            "year": key.year,
            "month": key.month,
        }))
        .into_response();
    };

    let snapshot = AggregationEngine::aggregate(&record);
    let previous = state
        .store
        .get(ctx.account_id(), key.previous())
        .map(|prev| AggregationEngine::aggregate(&prev));

    let summary = DashboardService::summarize(key, snapshot, previous.as_ref());

    Json(serde_json::json!({
        "has_data": true,
        "summary": summary,
    }))
    .into_response()
}

/// GET /dashboard/trends
///
/// Trend statistics over the newest `months` records. The free tier is
/// capped at its history limit regardless of the requested window.
async fn trends(
    State(state): State<AppState>,
    ctx: AccountContext,
    Query(params): Query<TrendParams>,
) -> impl IntoResponse {
    let requested = params.months.unwrap_or(12).max(1);
    let plan_limit = ctx.tier().max_history_months();
    let window = match plan_limit {
        Some(limit) => requested.min(limit as usize),
        None => requested,
    };

    let records = state.store.list(ctx.account_id());
    let months: Vec<_> = records
        .iter()
        .rev()
        .take(window)
        .rev()
        .map(|record| (record.key, AggregationEngine::aggregate(record)))
        .collect();

    let statistics = DashboardService::trend_statistics(&months);
    let series: Vec<_> = months
        .iter()
        .map(|&(period, snapshot)| {
            serde_json::json!({ "period": period, "snapshot": snapshot })
        })
        .collect();

    Json(serde_json::json!({
        "statistics": statistics,
        "months": series,
        "plan_limit": plan_limit,
    }))
    .into_response()
}

/// GET /dashboard/charts
///
/// Chart-ready data for one month: the revenue/cost breakdown of the
/// selected period plus a monthly trend line ending at it. The trend line
/// respects the tier's history window, like `/dashboard/trends`.
async fn charts(
    State(state): State<AppState>,
    ctx: AccountContext,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let current = PeriodKey::current();
    let key = match PeriodKey::new(
        params.year.unwrap_or(current.year),
        params.month.unwrap_or(current.month),
    ) {
        Ok(key) => key,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let revenue_vs_costs = state.store.get(ctx.account_id(), key).map(|record| {
        let snapshot = AggregationEngine::aggregate(&record);
        serde_json::json!({
            "revenue_services": record.revenue_services,
            "revenue_products": record.revenue_products,
            "revenue_other": record.revenue_other,
            "variable_costs": snapshot.variable_costs,
            "fixed_costs": snapshot.fixed_costs,
            "net_profit": snapshot.net_profit,
        })
    });

    let window = ctx
        .tier()
        .max_history_months()
        .map_or(12, |limit| 12.min(limit as usize));
    let records = state.store.list(ctx.account_id());
    let mut trend_records: Vec<_> = records
        .iter()
        .filter(|record| record.key <= key)
        .rev()
        .take(window)
        .collect();
    trend_records.reverse();
    let monthly_trend: Vec<_> = trend_records
        .into_iter()
        .map(|record| {
            let snapshot = AggregationEngine::aggregate(record);
            serde_json::json!({
                "period": record.key,
                "total_revenue": snapshot.total_revenue,
                "total_costs": snapshot.total_costs,
                "net_profit": snapshot.net_profit,
                "margin_percent": snapshot.margin_percent,
            })
        })
        .collect();

    Json(serde_json::json!({
        "revenue_vs_costs": revenue_vs_costs,
        "monthly_trend": monthly_trend,
        "current_period": { "year": key.year, "month": key.month },
    }))
    .into_response()
}
