//! Sign-up validation
//!
//! Checks a submitted sign-up form and produces a `ValidatedSignUp`, the only
//! value the account store accepts for account creation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::error::{FormField, ValidationError};

// Domain part: anything but a line terminator
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([^\r\n\x{85}\x{2028}\x{2029}]+)$")
        .expect("email pattern is valid")
});

static PIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("pin pattern is valid"));

/// Raw sign-up form as submitted by the user
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub pin_confirmation: String,
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("pin", &"[REDACTED]")
            .field("pin_confirmation", &"[REDACTED]")
            .finish()
    }
}

/// A four-digit PIN. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin([REDACTED])")
    }
}

/// Sign-up data that passed validation. Fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignUp {
    first_name: String,
    last_name: String,
    email: String,
    pin: Pin,
}

impl ValidatedSignUp {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

/// Email check: local part of `[A-Za-z0-9+_.-]`, an `@`, then at least one
/// character.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// PIN check: exactly four ASCII digits.
pub fn is_valid_pin(pin: &str) -> bool {
    PIN_PATTERN.is_match(pin)
}

/// Validate a sign-up form.
///
/// Checks run in order and stop at the first failure:
/// 1. every field is non-blank (first blank field is reported)
/// 2. PIN equals its confirmation
/// 3. email format
/// 4. PIN format
pub fn validate_sign_up(form: &SignUpForm) -> Result<ValidatedSignUp, ValidationError> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let pin = form.pin.trim();
    let pin_confirmation = form.pin_confirmation.trim();

    let fields = [
        (FormField::FirstName, first_name),
        (FormField::LastName, last_name),
        (FormField::Email, email),
        (FormField::Pin, pin),
        (FormField::PinConfirmation, pin_confirmation),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    if pin != pin_confirmation {
        return Err(ValidationError::PinMismatch);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_pin(pin) {
        return Err(ValidationError::InvalidPin);
    }

    Ok(ValidatedSignUp {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        pin: Pin(pin.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn form(first: &str, last: &str, email: &str, pin: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            pin: pin.to_string(),
            pin_confirmation: confirm.to_string(),
        }
    }

    #[test]
    fn test_email_examples() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@x"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b\rc"));
        assert!(!is_valid_email("a@b\nc"));
        assert!(!is_valid_email("a@\u{85}"));
        assert!(!is_valid_email("a@\u{2028}"));
        assert!(!is_valid_email("a@b\u{2029}"));
    }

    #[test]
    fn test_pin_examples() {
        assert!(is_valid_pin("1234"));
        assert!(is_valid_pin("0000"));
        assert!(!is_valid_pin("12"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin("١٢٣٤"));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let validated =
            validate_sign_up(&form(" Ada ", "Lovelace\t", " ada@example.com", "1234 ", " 1234"))
                .unwrap();

        assert_eq!(validated.first_name(), "Ada");
        assert_eq!(validated.last_name(), "Lovelace");
        assert_eq!(validated.email(), "ada@example.com");
        assert_eq!(validated.pin().expose(), "1234");
    }

    #[test]
    fn test_case_and_inner_whitespace_preserved() {
        let validated =
            validate_sign_up(&form("Mary Ann", "McDONALD", "Mary@Example.com", "4321", "4321"))
                .unwrap();

        assert_eq!(validated.first_name(), "Mary Ann");
        assert_eq!(validated.last_name(), "McDONALD");
        assert_eq!(validated.email(), "Mary@Example.com");
    }

    #[test]
    fn test_first_blank_field_is_reported() {
        let err = validate_sign_up(&form("Ada", "  ", "", "1234", "1234")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(FormField::LastName));

        let err = validate_sign_up(&form("Ada", "L", "a@b", "1234", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(FormField::PinConfirmation));
    }

    #[test]
    fn test_missing_field_checked_before_mismatch() {
        let err = validate_sign_up(&form("", "L", "a@b", "1234", "9999")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(FormField::FirstName));
    }

    #[test]
    fn test_mismatch_checked_before_email() {
        let err = validate_sign_up(&form("Ada", "L", "not-an-email", "1234", "1235")).unwrap_err();
        assert_eq!(err, ValidationError::PinMismatch);
    }

    #[test]
    fn test_email_checked_before_pin_format() {
        let err = validate_sign_up(&form("Ada", "L", "not-an-email", "12", "12")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn test_matching_but_malformed_pin() {
        let err = validate_sign_up(&form("Ada", "L", "a@b.com", "12a4", "12a4")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPin);
    }

    #[test]
    fn test_debug_redacts_pins() {
        let f = form("Ada", "L", "a@b.com", "1234", "1234");
        let rendered = format!("{:?}", f);
        assert!(!rendered.contains("1234"));

        let validated = validate_sign_up(&f).unwrap();
        assert!(!format!("{:?}", validated).contains("1234"));
    }

    proptest! {
        #[test]
        fn prop_pin_mismatch_wins_over_other_field_errors(
            first in "[A-Za-z]{1,10}",
            last in "[A-Za-z]{1,10}",
            email in "[^\\s]{1,20}",
            pin in "[^\\s]{1,6}",
            confirmation in "[^\\s]{1,6}",
        ) {
            prop_assume!(pin != confirmation);
            let result = validate_sign_up(&form(&first, &last, &email, &pin, &confirmation));
            prop_assert_eq!(result.unwrap_err(), ValidationError::PinMismatch);
        }
    }
}
