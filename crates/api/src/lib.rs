//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Account-context middleware (authentication is delegated upstream)
//! - The in-memory storage collaborator stand-in
//! - Response types

pub mod middleware;
pub mod routes;
pub mod store;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use profitpulse_core::simulation::SimulationCache;
use profitpulse_shared::EmailService;
use profitpulse_shared::config::BillingConfig;
use store::{AccountRegistry, PeriodStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Period record storage collaborator.
    pub store: Arc<PeriodStore>,
    /// Account registry (tier and business metadata per account).
    pub accounts: Arc<AccountRegistry>,
    /// Simulation result cache.
    pub sim_cache: Arc<SimulationCache>,
    /// Email collaborator for report delivery.
    pub email: Arc<EmailService>,
    /// Billing provider configuration.
    pub billing: BillingConfig,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
