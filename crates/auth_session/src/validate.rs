//! Input validation for credential exchanges.
//!
//! Validation runs before any network call; a failed validation never
//! leaves the form boundary and never mutates the session.

use crate::error::{ExchangeError, FieldErrors};
use regex::Regex;

/// Minimum password length accepted by the policy.
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Display names are 1..=100 characters.
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Lightweight email sanity check applied before registration and login.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// First policy violation for `password`, if any.
///
/// The policy: at least [`PASSWORD_MIN_LENGTH`] characters with at least
/// one lowercase letter, one uppercase letter, one digit and one
/// non-alphanumeric character.
#[must_use]
pub fn password_policy_error(password: &str) -> Option<&'static str> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Some("Password must be at least 8 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain a lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain an uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a digit.");
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Some("Password must contain a symbol.");
    }
    None
}

#[must_use]
pub fn valid_password(password: &str) -> bool {
    password_policy_error(password).is_none()
}

/// Validates a registration submission.
///
/// # Errors
/// Returns `ExchangeError::Validation` with one entry per offending field.
pub fn validate_registration(
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<(), ExchangeError> {
    let mut fields = FieldErrors::new();

    if !valid_email(email) {
        fields.push("email", "Enter a valid email address.");
    }

    let name_length = display_name.chars().count();
    if name_length == 0 {
        fields.push("displayName", "Display name is required.");
    } else if name_length > DISPLAY_NAME_MAX_LENGTH {
        fields.push("displayName", "Display name must be 100 characters or fewer.");
    }

    if let Some(message) = password_policy_error(password) {
        fields.push("password", message);
    }

    fields.into_result()
}

/// Validates a sign-in submission. Only presence is checked here; the
/// server's verdict is deliberately a single generic message.
///
/// # Errors
/// Returns `ExchangeError::Validation` when either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<(), ExchangeError> {
    let mut fields = FieldErrors::new();

    if email.trim().is_empty() {
        fields.push("email", "Email is required.");
    }
    if password.is_empty() {
        fields.push("password", "Password is required.");
    }

    fields.into_result()
}

/// Validates a password-reset submission. The confirmation check happens
/// here so a mismatch never reaches the network.
///
/// # Errors
/// Returns `ExchangeError::Validation` with one entry per offending field.
pub fn validate_password_reset(
    token: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ExchangeError> {
    let mut fields = FieldErrors::new();

    if token.trim().is_empty() {
        fields.push("token", "Reset token is missing. Check your email link.");
    }

    if let Some(message) = password_policy_error(new_password) {
        fields.push("newPassword", message);
    }

    if confirm_password != new_password {
        fields.push("confirmPassword", "Passwords do not match.");
    }

    fields.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_simple() {
        assert!(valid_email("user@example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_at() {
        assert!(!valid_email("user.example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_domain_dot() {
        assert!(!valid_email("user@localhost"));
    }

    #[test]
    fn valid_email_rejects_whitespace() {
        assert!(!valid_email("user name@example.com"));
    }

    // Character pools used to synthesize passwords per class.
    const LOWER: &str = "a";
    const UPPER: &str = "B";
    const DIGIT: &str = "3";
    const SYMBOL: &str = "!";

    /// Builds a password of `length` from the given classes, cycling
    /// through them so every requested class appears at least once.
    fn synthesize(length: usize, classes: &[&str]) -> String {
        (0..length)
            .map(|i| classes[i % classes.len()])
            .collect::<String>()
    }

    #[test]
    fn password_length_boundary() {
        let classes = [LOWER, UPPER, DIGIT, SYMBOL];
        for length in 1..PASSWORD_MIN_LENGTH {
            let candidate = synthesize(length, &classes);
            assert!(!valid_password(&candidate), "accepted too-short {candidate:?}");
        }
        let at_boundary = synthesize(PASSWORD_MIN_LENGTH, &classes);
        assert!(valid_password(&at_boundary), "rejected {at_boundary:?}");
        let above = synthesize(PASSWORD_MIN_LENGTH + 17, &classes);
        assert!(valid_password(&above));
    }

    #[test]
    fn password_rejects_each_missing_class_individually() {
        let all = [LOWER, UPPER, DIGIT, SYMBOL];
        for missing in 0..all.len() {
            let classes: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != missing)
                .map(|(_, c)| *c)
                .collect();
            let candidate = synthesize(PASSWORD_MIN_LENGTH * 2, &classes);
            assert!(
                !valid_password(&candidate),
                "accepted {candidate:?} although class {missing} is absent"
            );
        }
    }

    #[test]
    fn password_accepts_the_documented_example() {
        assert!(valid_password("Abcdef1!"));
    }

    #[test]
    fn password_counts_unicode_characters_not_bytes() {
        // Eight chars, one of them multi-byte: exactly at the boundary.
        assert!(valid_password("aB3é!!!!"));
        assert!(!valid_password("aB3!"));
    }

    #[test]
    fn registration_flags_each_field() {
        let err = validate_registration("not-an-email", "", "short").unwrap_err();
        let fields = err.field_errors().expect("validation outcome");
        assert!(fields.message_for("email").is_some());
        assert!(fields.message_for("displayName").is_some());
        assert!(fields.message_for("password").is_some());
    }

    #[test]
    fn registration_accepts_the_documented_scenario() {
        assert!(validate_registration("a@b.com", "A", "Abcdef1!").is_ok());
    }

    #[test]
    fn registration_rejects_oversized_display_name() {
        let name = "x".repeat(DISPLAY_NAME_MAX_LENGTH + 1);
        let err = validate_registration("a@b.com", &name, "Abcdef1!").unwrap_err();
        assert!(err
            .field_errors()
            .and_then(|f| f.message_for("displayName"))
            .is_some());
    }

    #[test]
    fn registration_accepts_display_name_at_the_limit() {
        let name = "x".repeat(DISPLAY_NAME_MAX_LENGTH);
        assert!(validate_registration("a@b.com", &name, "Abcdef1!").is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        let err = validate_login(" ", "").unwrap_err();
        let fields = err.field_errors().expect("validation outcome");
        assert!(fields.message_for("email").is_some());
        assert!(fields.message_for("password").is_some());
        assert!(validate_login("a@b.com", "whatever").is_ok());
    }

    #[test]
    fn reset_mismatch_is_a_confirm_password_field_error() {
        let err = validate_password_reset("tok", "Abcdef1!", "Abcdef1?").unwrap_err();
        let fields = err.field_errors().expect("validation outcome");
        assert_eq!(
            fields.message_for("confirmPassword"),
            Some("Passwords do not match.")
        );
    }

    #[test]
    fn reset_requires_a_token_and_a_conforming_password() {
        let err = validate_password_reset("  ", "weak", "weak").unwrap_err();
        let fields = err.field_errors().expect("validation outcome");
        assert!(fields.message_for("token").is_some());
        assert!(fields.message_for("newPassword").is_some());
        assert_eq!(fields.message_for("confirmPassword"), None);
    }

    #[test]
    fn reset_accepts_a_matching_conforming_pair() {
        assert!(validate_password_reset("tok", "Abcdef1!", "Abcdef1!").is_ok());
    }
}
