//! Sign-Up Handler
//!
//! Validates a sign-up form and asks the account store to create the user
//! and their account.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{validate_sign_up, OperationContext};
use crate::error::AppError;
use crate::store::AccountStore;

use super::{SignUpCommand, SignUpResult};

/// Handler for sign-up
pub struct SignUpHandler {
    store: Arc<dyn AccountStore>,
}

impl SignUpHandler {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Execute the sign-up command
    pub async fn execute(
        &self,
        command: SignUpCommand,
        context: &OperationContext,
    ) -> Result<SignUpResult, AppError> {
        let application_number = command.application_number;

        let sign_up = validate_sign_up(&command.form).map_err(|e| {
            tracing::debug!(
                application_number = %application_number,
                error = %e,
                "Sign-up form rejected"
            );
            e
        })?;

        let issued = self.store.create_user_and_account(&sign_up).await?;

        tracing::info!(
            application_number = %application_number,
            account_number = %issued.account_number,
            correlation_id = ?context.correlation_id,
            "Account created"
        );

        Ok(SignUpResult {
            application_number,
            account_number: issued.account_number,
            password: issued.password,
            created_at: Utc::now(),
        })
    }
}
