//! Command definitions
//!
//! Commands carry raw user input into a flow; results carry what the store
//! returned back out of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, ApplicationNumber, SignUpForm};

// =========================================================================
// DepositCommand
// =========================================================================

/// Command to deposit into an existing account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositCommand {
    pub account_id: AccountId,
    /// Amount as typed by the user; validated by the handler
    pub amount: String,
}

impl DepositCommand {
    pub fn new(account_id: AccountId, amount: impl Into<String>) -> Self {
        Self {
            account_id,
            amount: amount.into(),
        }
    }
}

// =========================================================================
// SignUpCommand
// =========================================================================

/// Command to create a user and their first account
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub application_number: ApplicationNumber,
    pub form: SignUpForm,
}

impl SignUpCommand {
    /// Create a command under a freshly drawn application number
    pub fn new(form: SignUpForm) -> Self {
        Self {
            application_number: ApplicationNumber::generate(),
            form,
        }
    }

    pub fn with_application_number(mut self, application_number: ApplicationNumber) -> Self {
        self.application_number = application_number;
        self
    }
}

/// Result of a successful deposit
#[derive(Debug, Clone, Serialize)]
pub struct DepositResult {
    pub account_id: AccountId,
    pub amount: Amount,
    pub deposited_at: DateTime<Utc>,
}

/// Result of a successful sign-up
#[derive(Clone, Serialize)]
pub struct SignUpResult {
    pub application_number: ApplicationNumber,
    pub account_number: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for SignUpResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpResult")
            .field("application_number", &self.application_number)
            .field("account_number", &self.account_number)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}
