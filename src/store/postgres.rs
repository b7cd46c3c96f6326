//! PostgreSQL account store
//!
//! Calls the store's routines with bound parameters. User input never
//! becomes part of the SQL text.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{AccountId, Amount, IssuedAccount, ValidatedSignUp};

use super::{AccountStore, StoreError};

/// Name of the deposit procedure
pub const DEPOSIT_ROUTINE: &str = "deposit";

/// Name of the account-creation function
pub const CREATE_USER_AND_ACCOUNT_ROUTINE: &str = "create_user_and_account";

/// Account store backed by stored routines in PostgreSQL
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn deposit(&self, account_id: &AccountId, amount: &Amount) -> Result<(), StoreError> {
        sqlx::query("CALL deposit($1, $2)")
            .bind(account_id.as_str())
            .bind(amount.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn create_user_and_account(
        &self,
        sign_up: &ValidatedSignUp,
    ) -> Result<IssuedAccount, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT account_number, password
            FROM create_user_and_account($1, $2, $3, $4)
            "#,
        )
        .bind(sign_up.first_name())
        .bind(sign_up.last_name())
        .bind(sign_up.email())
        .bind(sign_up.pin().expose())
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(StoreError::NoAccountCreated)?;

        let account_number: String = row.try_get("account_number")?;
        let password: String = row.try_get("password")?;

        Ok(IssuedAccount::new(account_number, password))
    }
}
