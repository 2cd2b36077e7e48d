//! ProfitPulse API Server
//!
//! Main entry point for the ProfitPulse backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use profitpulse_api::store::{Account, AccountRegistry, PeriodStore};
use profitpulse_api::{AppState, create_router};
use profitpulse_core::billing::SubscriptionTier;
use profitpulse_core::simulation::SimulationCache;
use profitpulse_shared::{AppConfig, EmailService};

/// Well-known demo account, so a fresh instance is usable immediately.
const DEMO_ACCOUNT_ID: Uuid = Uuid::from_u128(0x00000000_0000_4000_8000_0000000000d3);

fn demo_account() -> Account {
    Account {
        id: DEMO_ACCOUNT_ID,
        email: "demo@example.com".to_string(),
        business_name: "Demo Business".to_string(),
        business_type: "Services".to_string(),
        owner_name: "Demo User".to_string(),
        tier: SubscriptionTier::Premium,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profitpulse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create email service
    let email_service = EmailService::new(config.email.clone());
    info!(
        smtp_host = %config.email.smtp_host,
        smtp_port = %config.email.smtp_port,
        "Email service configured"
    );

    // Seed the well-known demo account
    let accounts = AccountRegistry::new();
    accounts.insert(demo_account());
    info!(account = %DEMO_ACCOUNT_ID, "Demo account registered");

    // Create application state
    let state = AppState {
        store: Arc::new(PeriodStore::new()),
        accounts: Arc::new(accounts),
        sim_cache: Arc::new(SimulationCache::new()),
        email: Arc::new(email_service),
        billing: config.billing.clone(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
