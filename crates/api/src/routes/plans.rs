//! Plan catalog and subscription status routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::{AppState, middleware::AccountContext};
use profitpulse_core::billing::Plan;

/// Creates the public plan routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/billing/config", get(billing_config))
}

/// Creates the plan routes that require the account middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/subscription-status", get(subscription_status))
}

/// GET /plans
///
/// The catalog is static; pricing changes ship as releases.
async fn list_plans() -> impl IntoResponse {
    Json(serde_json::json!({ "plans": Plan::catalog() }))
}

/// GET /billing/config
///
/// Publishable key for the client-side payment widget. `None` when billing
/// is not configured on this instance.
async fn billing_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "publishable_key": state.billing.publishable_key,
    }))
}

/// GET /subscription-status
async fn subscription_status(ctx: AccountContext) -> impl IntoResponse {
    let tier = ctx.tier();
    let plan = Plan::for_tier(tier);

    Json(serde_json::json!({
        "tier": tier,
        "name": plan.name,
        "monthly_price": plan.monthly_price,
        "features": plan.features,
        "limits": plan.limits,
        "capabilities": tier.capabilities(),
    }))
}
