//! API Routes
//!
//! HTTP endpoint definitions. Each POST endpoint stands in for one form
//! submission and answers with the presentation to show.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{AccountId, Amount, ApplicationNumber, OperationContext, SignUpForm};
use crate::error::AppError;
use crate::handlers::{DepositCommand, DepositHandler, SignUpCommand, SignUpHandler};
use crate::presenter::{self, Presentation};
use crate::store::AccountStore;

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct DepositRequest {
    /// Amount as typed; validated server-side
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub account_id: AccountId,
    pub amount: Amount,
    pub deposited_at: DateTime<Utc>,
    pub presentation: Presentation,
}

/// Sign-up request body; same fields as the form
pub type SignUpRequest = SignUpForm;

#[derive(Serialize)]
pub struct SignUpResponse {
    pub application_number: ApplicationNumber,
    pub account_number: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub presentation: Presentation,
}

impl fmt::Debug for SignUpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpResponse")
            .field("application_number", &self.application_number)
            .field("account_number", &self.account_number)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("presentation", &"[REDACTED]")
            .finish()
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/accounts/:account_id/deposits", post(deposit))
        .route("/sign-up", post(sign_up))
}

// =========================================================================
// POST /accounts/:account_id/deposits
// =========================================================================

/// Deposit into an existing account
async fn deposit(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<DepositResponse>, AppError> {
    let Json(request) = payload?;
    let context = context.map(|Extension(c)| c).unwrap_or_default();
    let handler = DepositHandler::new(state.store);

    let command = DepositCommand::new(AccountId::new(account_id), request.amount);
    let result = handler.execute(command, &context).await?;
    let presentation = presenter::deposit_succeeded(&result);

    Ok(Json(DepositResponse {
        account_id: result.account_id,
        amount: result.amount,
        deposited_at: result.deposited_at,
        presentation,
    }))
}

// =========================================================================
// POST /sign-up
// =========================================================================

/// Create a user and their first account
async fn sign_up(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignUpResponse>), AppError> {
    let Json(request) = payload?;
    let context = context.map(|Extension(c)| c).unwrap_or_default();
    let handler = SignUpHandler::new(state.store);

    let result = handler.execute(SignUpCommand::new(request), &context).await?;
    let presentation = presenter::account_created(&result);

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            application_number: result.application_number,
            account_number: result.account_number,
            password: result.password,
            created_at: result.created_at,
            presentation,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{Navigation, Severity, View};

    #[test]
    fn test_sign_up_response_debug_redacts_password() {
        let response = SignUpResponse {
            application_number: ApplicationNumber::generate(),
            account_number: "5040000000000001".to_string(),
            password: "4711".to_string(),
            created_at: Utc::now(),
            presentation: Presentation {
                title: "Application No. 1234".to_string(),
                message: "Card No: 5040000000000001\nPIN: 4711".to_string(),
                severity: Severity::Info,
                navigation: Navigation::Open(View::Login),
            },
        };

        let debug = format!("{:?}", response);
        assert!(debug.contains("5040000000000001"));
        assert!(!debug.contains("4711"));
    }
}
