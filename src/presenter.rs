//! Result Presenter
//!
//! Turns the outcome of a flow into what the user sees: a titled message and
//! the navigation that follows it. Store failures are reduced to a generic
//! message here; their causes are logged, never shown.

use serde::Serialize;

use crate::domain::ValidationError;
use crate::error::AppError;
use crate::handlers::{DepositResult, SignUpResult};
use crate::store::StoreError;

const ERROR_TITLE: &str = "Error";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// Views a flow can hand over to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
}

/// What happens to the current form after the message is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "view", rename_all = "snake_case")]
pub enum Navigation {
    /// Keep the form open for correction
    Stay,
    /// Close the form
    Close,
    /// Close the form and open another view
    Open(View),
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub navigation: Navigation,
}

impl Presentation {
    fn error(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
            severity: Severity::Error,
            navigation: Navigation::Stay,
        }
    }
}

pub fn deposit_succeeded(result: &DepositResult) -> Presentation {
    Presentation {
        title: "Deposit".to_string(),
        message: format!("Amount of {} has been deposited.", result.amount),
        severity: Severity::Info,
        navigation: Navigation::Close,
    }
}

pub fn account_created(result: &SignUpResult) -> Presentation {
    Presentation {
        title: format!("Application No. {}", result.application_number),
        message: format!(
            "Card No: {}\nPIN: {}",
            result.account_number, result.password
        ),
        severity: Severity::Info,
        navigation: Navigation::Open(View::Login),
    }
}

pub fn validation_failed(error: &ValidationError) -> Presentation {
    let message = match error {
        ValidationError::InvalidAmount => "Please enter a valid amount.",
        ValidationError::MissingField(_) => "All fields must be filled out.",
        ValidationError::PinMismatch => "PINs do not match.",
        ValidationError::InvalidEmail => "Invalid email address.",
        ValidationError::InvalidPin => "PIN must be a four-digit number.",
    };
    Presentation::error(message)
}

/// Present any failed flow. The form always stays open.
pub fn failed(error: &AppError) -> Presentation {
    match error {
        AppError::Validation(e) => validation_failed(e),
        AppError::MalformedRequest(_) => {
            Presentation::error("The form could not be read. Please check your input.")
        }
        AppError::Store(StoreError::NoAccountCreated) => {
            Presentation::error("No account was created. Please fill out the form again.")
        }
        AppError::Store(_) => Presentation::error(GENERIC_FAILURE),
    }
}
