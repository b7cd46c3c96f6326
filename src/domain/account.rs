//! Account identifiers and issued credentials

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an existing bank account.
///
/// The value is owned by the account store; this layer never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Account number and password issued by the store on sign-up.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedAccount {
    pub account_number: String,
    pub password: String,
}

impl IssuedAccount {
    pub fn new(account_number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for IssuedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedAccount")
            .field("account_number", &self.account_number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Four-digit reference number shown on a sign-up application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationNumber(u16);

impl ApplicationNumber {
    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 9999;

    /// Draw a random application number in `1000..=9999`.
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_number_range() {
        for _ in 0..1_000 {
            let n = ApplicationNumber::generate().value();
            assert!((ApplicationNumber::MIN..=ApplicationNumber::MAX).contains(&n));
        }
    }

    #[test]
    fn test_issued_account_debug_hides_password() {
        let issued = IssuedAccount::new("5040123412341234", "8812");
        let rendered = format!("{:?}", issued);
        assert!(rendered.contains("5040123412341234"));
        assert!(!rendered.contains("8812"));
    }

    #[test]
    fn test_account_id_is_opaque() {
        let id = AccountId::new(" 42; DROP TABLE accounts ");
        assert_eq!(id.as_str(), " 42; DROP TABLE accounts ");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\" 42; DROP TABLE accounts \"");
    }
}
