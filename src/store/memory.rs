//! In-memory account store
//!
//! Stands in for the database when running locally (`ACCOUNT_STORE=memory`)
//! and in tests. Keeps balances in a map, issues account numbers itself and
//! records every call it receives.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::{AccountId, Amount, IssuedAccount, ValidatedSignUp};

use super::{AccountStore, StoreError};

/// Prefix of issued account (card) numbers
const ACCOUNT_NUMBER_PREFIX: &str = "5040";

/// How the store answers calls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// Behave like a healthy store
    #[default]
    Normal,
    /// Every call fails as if the database were unreachable
    Unavailable,
    /// Account creation returns no row; deposits behave normally
    EmptyResult,
    /// Every call is refused with the given message
    Rejecting(String),
}

/// A recorded `create_user_and_account` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpCall {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Default)]
struct State {
    mode: StoreMode,
    balances: HashMap<AccountId, Decimal>,
    next_sequence: u64,
    deposits: Vec<(AccountId, Amount)>,
    sign_ups: Vec<SignUpCall>,
}

/// Account store held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in the given mode
    pub fn with_mode(mode: StoreMode) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                mode,
                ..State::default()
            })),
        }
    }

    /// Switch how subsequent calls are answered
    pub async fn set_mode(&self, mode: StoreMode) {
        self.state.lock().await.mode = mode;
    }

    /// Register an existing account with a zero balance
    pub async fn open_account(&self, account_id: AccountId) {
        self.state
            .lock()
            .await
            .balances
            .entry(account_id)
            .or_insert(Decimal::ZERO);
    }

    /// Current balance of an account, if it exists
    pub async fn balance(&self, account_id: &AccountId) -> Option<Decimal> {
        self.state.lock().await.balances.get(account_id).copied()
    }

    /// Every deposit call received, in order
    pub async fn deposit_calls(&self) -> Vec<(AccountId, Amount)> {
        self.state.lock().await.deposits.clone()
    }

    /// Every account-creation call received, in order
    pub async fn sign_up_calls(&self) -> Vec<SignUpCall> {
        self.state.lock().await.sign_ups.clone()
    }
}

fn check_mode(mode: &StoreMode) -> Result<(), StoreError> {
    match mode {
        StoreMode::Unavailable => Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut)),
        StoreMode::Rejecting(message) => Err(StoreError::Rejected(message.clone())),
        StoreMode::Normal | StoreMode::EmptyResult => Ok(()),
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn deposit(&self, account_id: &AccountId, amount: &Amount) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.deposits.push((account_id.clone(), *amount));
        check_mode(&state.mode)?;

        let balance = state
            .balances
            .get_mut(account_id)
            .ok_or_else(|| StoreError::Rejected(format!("Account {} does not exist", account_id)))?;
        *balance += amount.value();

        tracing::debug!(account_id = %account_id, balance = %balance, "In-memory deposit applied");
        Ok(())
    }

    async fn create_user_and_account(
        &self,
        sign_up: &ValidatedSignUp,
    ) -> Result<IssuedAccount, StoreError> {
        let mut state = self.state.lock().await;
        state.sign_ups.push(SignUpCall {
            first_name: sign_up.first_name().to_string(),
            last_name: sign_up.last_name().to_string(),
            email: sign_up.email().to_string(),
        });
        check_mode(&state.mode)?;

        if state.mode == StoreMode::EmptyResult {
            return Err(StoreError::NoAccountCreated);
        }

        state.next_sequence += 1;
        let account_number = format!("{}{:012}", ACCOUNT_NUMBER_PREFIX, state.next_sequence);
        let password = format!("{:04}", rand::thread_rng().gen_range(0..10_000));

        state
            .balances
            .insert(AccountId::new(account_number.clone()), Decimal::ZERO);

        Ok(IssuedAccount::new(account_number, password))
    }
}
