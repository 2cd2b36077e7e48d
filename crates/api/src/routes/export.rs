//! Report export routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::Deserialize;
use tracing::{error, info};

use super::error_response;
use crate::{AppState, middleware::AccountContext};
use profitpulse_core::aggregation::AggregationEngine;
use profitpulse_core::billing::Capability;
use profitpulse_core::export::MonthlyReport;
use profitpulse_core::period::PeriodKey;
use profitpulse_shared::AppError;

/// Creates the export routes (requires the account middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export/preview", post(preview_report))
        .route("/export/send-email", post(send_report_email))
}

/// Request body for export operations.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Year of the reported month.
    pub year: i32,
    /// Month of the reported month.
    pub month: u32,
    /// Recipient override; defaults to the account email.
    pub email: Option<String>,
}

/// Resolves the export request into a report, or an error response.
fn build_report(
    state: &AppState,
    ctx: &AccountContext,
    request: &ExportRequest,
) -> Result<MonthlyReport, axum::response::Response> {
    if let Err(e) = ctx.tier().require(Capability::Export) {
        return Err(error_response(&AppError::CapabilityDenied(e.to_string())));
    }

    let key = PeriodKey::new(request.year, request.month)
        .map_err(|e| error_response(&AppError::Validation(e.to_string())))?;

    let record = state.store.get(ctx.account_id(), key).ok_or_else(|| {
        error_response(&AppError::NotFound(format!("No data for period {key}")))
    })?;

    let account = ctx.account();
    Ok(MonthlyReport {
        business_name: account.business_name.clone(),
        business_type: account.business_type.clone(),
        owner_name: account.owner_name.clone(),
        period: key,
        snapshot: AggregationEngine::aggregate(&record),
    })
}

/// POST /export/preview
///
/// Returns the report context and rendered body without sending anything.
/// Lets the client show what the email will contain.
async fn preview_report(
    State(state): State<AppState>,
    ctx: AccountContext,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    let report = match build_report(&state, &ctx, &request) {
        Ok(report) => report,
        Err(response) => return response,
    };

    Json(serde_json::json!({
        "report": report,
        "subject": report.subject(),
        "body": report.render_text(),
    }))
    .into_response()
}

/// POST /export/send-email
async fn send_report_email(
    State(state): State<AppState>,
    ctx: AccountContext,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    let report = match build_report(&state, &ctx, &request) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let recipient = request
        .email
        .clone()
        .unwrap_or_else(|| ctx.account().email.clone());

    match state
        .email
        .send_monthly_report(&recipient, &report.subject(), &report.render_text())
        .await
    {
        Ok(()) => {
            info!(
                account = %ctx.account_id(),
                period = %report.period,
                "Monthly report email sent"
            );
            Json(serde_json::json!({
                "sent": true,
                "recipient": recipient,
                "period": report.period,
            }))
            .into_response()
        }
        Err(e) => {
            error!(account = %ctx.account_id(), error = %e, "Report email failed");
            error_response(&AppError::ExternalService(format!(
                "Failed to send report email: {e}"
            )))
        }
    }
}
