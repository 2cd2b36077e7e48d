//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, middleware::auth::account_middleware};
use profitpulse_shared::AppError;

pub mod dashboard;
pub mod export;
pub mod financial;
pub mod health;
pub mod plans;
pub mod simulation;

/// Creates the API router with all routes.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require a resolved account
    let protected_routes = Router::new()
        .merge(financial::routes())
        .merge(dashboard::routes())
        .merge(simulation::routes())
        .merge(export::routes())
        .merge(plans::protected_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            account_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(plans::routes())
        .merge(protected_routes)
}

/// Renders an `AppError` in the standard JSON error shape.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code().to_lowercase(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}
