//! Account Store module
//!
//! The only point of contact with the external account store.
//! Account creation and deposits are delegated to stored routines; this layer
//! performs no caching, retry or balance bookkeeping of its own.

mod error;
pub mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::{AccountId, Amount, IssuedAccount, ValidatedSignUp};

pub use error::StoreError;
pub use memory::{InMemoryAccountStore, StoreMode};
pub use postgres::{PgAccountStore, CREATE_USER_AND_ACCOUNT_ROUTINE, DEPOSIT_ROUTINE};

/// Account store client
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Deposit `amount` into an existing account.
    async fn deposit(&self, account_id: &AccountId, amount: &Amount) -> Result<(), StoreError>;

    /// Create a user together with their first account.
    ///
    /// Returns the issued account number and password, or
    /// `StoreError::NoAccountCreated` if the store produced nothing.
    async fn create_user_and_account(
        &self,
        sign_up: &ValidatedSignUp,
    ) -> Result<IssuedAccount, StoreError>;
}
