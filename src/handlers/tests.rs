//! Flow tests across handlers
//!
//! Run against the in-memory account store; no database required.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::domain::{AccountId, OperationContext, SignUpForm};
    use crate::error::AppError;
    use crate::handlers::{DepositCommand, DepositHandler, SignUpCommand, SignUpHandler};
    use crate::presenter::{self, Navigation, View};
    use crate::store::{InMemoryAccountStore, StoreError, StoreMode};

    fn form(email: &str) -> SignUpForm {
        SignUpForm {
            first_name: "Katherine".to_string(),
            last_name: "Johnson".to_string(),
            email: email.to_string(),
            pin: "0826".to_string(),
            pin_confirmation: "0826".to_string(),
        }
    }

    // =========================================================================
    // Sign up, then deposit into the issued account
    // =========================================================================

    #[tokio::test]
    async fn test_sign_up_then_deposit() {
        let store = InMemoryAccountStore::new();
        let shared: Arc<InMemoryAccountStore> = Arc::new(store.clone());
        let context = OperationContext::new();

        let created = SignUpHandler::new(shared.clone())
            .execute(SignUpCommand::new(form("kj@example.com")), &context)
            .await
            .unwrap();

        let presentation = presenter::account_created(&created);
        assert_eq!(presentation.navigation, Navigation::Open(View::Login));

        let account_id = AccountId::new(created.account_number.clone());
        let deposit = DepositHandler::new(shared)
            .execute(DepositCommand::new(account_id.clone(), " 250 "), &context)
            .await
            .unwrap();

        let presentation = presenter::deposit_succeeded(&deposit);
        assert!(presentation.message.contains("250"));
        assert_eq!(presentation.navigation, Navigation::Close);
        assert_eq!(store.balance(&account_id).await, Some(dec!(250)));
    }

    // =========================================================================
    // Store rejections stay distinguishable from bad input
    // =========================================================================

    #[tokio::test]
    async fn test_deposit_to_unknown_account_is_rejected_by_store() {
        let store = Arc::new(InMemoryAccountStore::new());

        let err = DepositHandler::new(store)
            .execute(
                DepositCommand::new(AccountId::new("no-such-account"), "10"),
                &OperationContext::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store(StoreError::Rejected(_))));
        assert_eq!(presenter::failed(&err).navigation, Navigation::Stay);
    }

    #[tokio::test]
    async fn test_rejecting_store_on_sign_up() {
        let store = Arc::new(InMemoryAccountStore::with_mode(StoreMode::Rejecting(
            "email already registered".to_string(),
        )));

        let err = SignUpHandler::new(store)
            .execute(SignUpCommand::new(form("dup@example.com")), &OperationContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store(StoreError::Rejected(ref m)) if m.contains("already")));
        let presentation = presenter::failed(&err);
        assert!(!presentation.message.contains("already"));
    }
}
