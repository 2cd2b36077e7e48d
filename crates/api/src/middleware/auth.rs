//! Account-context middleware for protected routes.
//!
//! Authentication itself is delegated to an upstream gateway; by the time a
//! request reaches this service it carries a trusted `X-Account-Id` header.
//! This middleware resolves that header against the account registry and
//! stores the account in request extensions for handlers to access.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use crate::store::Account;

/// Header naming the acting account.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// Middleware resolving the acting account.
///
/// Rejects requests without a parseable `X-Account-Id`, or naming an
/// account this instance does not know.
pub async fn account_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(ACCOUNT_ID_HEADER)
        .and_then(|h| h.to_str().ok());

    let Some(account_id) = header.and_then(|raw| Uuid::parse_str(raw).ok()) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "missing_account",
                "message": "X-Account-Id header with a valid account ID is required"
            })),
        )
            .into_response();
    };

    match state.accounts.get(account_id) {
        Some(account) => {
            request.extensions_mut().insert(account);
            next.run(request).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "unknown_account",
                "message": "Account not found"
            })),
        )
            .into_response(),
    }
}

/// Extractor for the resolved account.
///
/// Use this in handlers to get the acting account:
///
/// ```ignore
/// async fn handler(ctx: AccountContext) -> impl IntoResponse {
///     let tier = ctx.tier();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AccountContext(pub Account);

impl AccountContext {
    /// Returns the account ID.
    #[must_use]
    pub fn account_id(&self) -> Uuid {
        self.0.id
    }

    /// Returns the account's subscription tier.
    #[must_use]
    pub fn tier(&self) -> profitpulse_core::billing::SubscriptionTier {
        self.0.tier
    }

    /// Returns the inner account.
    #[must_use]
    pub fn account(&self) -> &Account {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AccountContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Account>()
            .cloned()
            .map(AccountContext)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Account context required"
                    })),
                )
            })
    }
}
