//! bank_management Library
//!
//! Account sign-up and deposits over an external account store.
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod presenter;
pub mod store;
mod error;

pub use config::Config;
pub use domain::{AccountId, Amount, OperationContext, ValidationError};
pub use error::{AppError, AppResult};
pub use store::{AccountStore, StoreError};
