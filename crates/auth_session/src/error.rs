//! Closed result type for credential exchanges.
//!
//! Callers pattern-match on the three kinds instead of inspecting thrown
//! shapes: `Validation` carries field-scoped messages resolved at the form
//! boundary, `Auth` is a single user-facing message, and `Network` is the
//! generic retry prompt for transport failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Generic message shown for transport-level failures. Raw transport
/// errors are logged, never rendered.
pub const NETWORK_RETRY_MESSAGE: &str = "Network error, please retry.";

/// One field-scoped validation message, keyed by the wire field name
/// (`email`, `displayName`, `newPassword`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Ordered collection of field errors for one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`, used to render inline errors.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Converts an accumulated set into an exchange outcome.
    ///
    /// # Errors
    /// Returns `ExchangeError::Validation` when any message was recorded.
    pub fn into_result(self) -> Result<(), ExchangeError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ExchangeError::Validation(self))
        }
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.0 {
            if !first {
                formatter.write_str(" ")?;
            }
            formatter.write_str(&entry.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of a failed credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Field-scoped input problems; never reached the network.
    #[error("{0}")]
    Validation(FieldErrors),
    /// The server rejected the credentials or the session. Deliberately a
    /// single message so responses cannot be used for account enumeration.
    #[error("{0}")]
    Auth(String),
    /// Transport failure or an unstructured non-2xx response.
    #[error("{0}")]
    Network(String),
}

impl ExchangeError {
    /// The generic retry prompt for transport failures.
    #[must_use]
    pub fn network() -> Self {
        Self::Network(NETWORK_RETRY_MESSAGE.to_string())
    }

    #[must_use]
    pub fn auth(message: &str) -> Self {
        Self::Auth(message.to_string())
    }

    /// Field errors carried by a validation outcome, if any.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            Self::Auth(_) | Self::Network(_) => None,
        }
    }

    /// True when the server explicitly rejected the session or
    /// credentials, meaning the call site should log out rather than
    /// merely surface a message.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_field_messages() {
        let mut fields = FieldErrors::new();
        fields.push("email", "Enter a valid email address.");
        fields.push("password", "Password must be at least 8 characters.");

        let error = ExchangeError::Validation(fields);
        assert_eq!(
            error.to_string(),
            "Enter a valid email address. Password must be at least 8 characters."
        );
    }

    #[test]
    fn message_for_returns_the_first_match() {
        let mut fields = FieldErrors::new();
        fields.push("password", "too short");
        fields.push("password", "missing digit");

        assert_eq!(fields.message_for("password"), Some("too short"));
        assert_eq!(fields.message_for("email"), None);
    }

    #[test]
    fn empty_set_converts_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn network_default_uses_the_retry_prompt() {
        assert_eq!(
            ExchangeError::network().to_string(),
            "Network error, please retry."
        );
    }

    #[test]
    fn field_error_parses_from_a_server_body() {
        let parsed: FieldError =
            serde_json::from_str(r#"{"field":"email","message":"Already registered."}"#)
                .expect("parse field error");
        assert_eq!(parsed.field, "email");
    }
}
