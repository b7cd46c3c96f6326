//! Domain Error Types
//!
//! Pure validation errors that don't depend on infrastructure.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Sign-up form fields, in the order they are checked for presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Pin,
    PinConfirmation,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Email => "email",
            FormField::Pin => "pin",
            FormField::PinConfirmation => "pin_confirmation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input validation errors.
///
/// These are detected locally before the account store is contacted, and are
/// always the user's to correct.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount is empty or not made only of digits
    #[error("Invalid amount")]
    InvalidAmount,

    /// A required sign-up field is blank
    #[error("Missing required field: {0}")]
    MissingField(FormField),

    /// PIN and its confirmation differ
    #[error("PINs do not match")]
    PinMismatch,

    #[error("Invalid email address")]
    InvalidEmail,

    /// PIN is not exactly four digits
    #[error("PIN must be a four-digit number")]
    InvalidPin,
}

impl ValidationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount => "invalid_amount",
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::PinMismatch => "pin_mismatch",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidPin => "invalid_pin",
        }
    }
}
