//! Domain module
//!
//! Core domain types and validation rules.

pub mod account;
pub mod amount;
pub mod context;
pub mod error;
pub mod validation;

pub use account::{AccountId, ApplicationNumber, IssuedAccount};
pub use amount::{validate_amount, Amount};
pub use context::OperationContext;
pub use error::{FormField, ValidationError};
pub use validation::{is_valid_email, is_valid_pin, validate_sign_up, Pin, SignUpForm, ValidatedSignUp};
