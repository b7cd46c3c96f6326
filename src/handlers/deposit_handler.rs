//! Deposit Handler
//!
//! Validates the entered amount and forwards it to the account store.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{validate_amount, OperationContext};
use crate::error::AppError;
use crate::store::AccountStore;

use super::{DepositCommand, DepositResult};

/// Handler for deposits
pub struct DepositHandler {
    store: Arc<dyn AccountStore>,
}

impl DepositHandler {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Execute the deposit command
    pub async fn execute(
        &self,
        command: DepositCommand,
        context: &OperationContext,
    ) -> Result<DepositResult, AppError> {
        // Nothing reaches the store unless the amount is valid
        let amount = validate_amount(&command.amount)?;

        self.store.deposit(&command.account_id, &amount).await?;

        tracing::info!(
            account_id = %command.account_id,
            amount = %amount,
            correlation_id = ?context.correlation_id,
            "Deposit completed"
        );

        Ok(DepositResult {
            account_id: command.account_id,
            amount,
            deposited_at: Utc::now(),
        })
    }
}
