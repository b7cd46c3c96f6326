//! Amount type
//!
//! Domain primitive for deposit amounts. An amount is a non-negative whole
//! number of currency units; fractional values are not representable.
//! All amounts are validated at construction time, ensuring invalid values
//! cannot exist in the system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Amount represents a validated deposit amount.
///
/// # Invariants
/// - Value is never negative
/// - Scale is always 0 (whole currency units)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use bank_management::domain::validate_amount;
///
/// let amount = validate_amount(" 100 ").unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// assert_eq!(amount.to_string(), "100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

impl Amount {
    /// Create an Amount from an integer number of units.
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Validate a raw, user-entered amount.
///
/// The input is trimmed; the remainder must be a non-empty run of ASCII
/// digits. Leading zeros are accepted. Digit strings beyond the range of
/// `Decimal` are rejected.
///
/// # Errors
/// - `ValidationError::InvalidAmount` for anything else
pub fn validate_amount(raw: &str) -> Result<Amount, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAmount);
    }

    let value = Decimal::from_str(trimmed).map_err(|_| ValidationError::InvalidAmount)?;

    Ok(Amount(value.normalize()))
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_amount(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_amount(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}
