//! Client wrappers for the auth API endpoints. Each operation is a single
//! request/response exchange; validation runs before the network call, so
//! a validation failure never leaves the form boundary. Register, login
//! and refresh include credentials so the server can set or read the
//! httpOnly refresh cookie.

use crate::app_lib::{post_json, post_json_with_credentials};
use crate::features::auth::types::{
    AuthResponse, LoginRequest, MessageResponse, RegisterRequest, ResendVerificationRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};
use auth_session::{validate, ExchangeError};

/// Single message for any rejected sign-in. The server must not be more
/// specific either, so responses cannot be used for account enumeration.
pub const SIGN_IN_FAILED_MESSAGE: &str = "Invalid email or password.";

/// Normalizes an email the way the server canonicalizes it.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registers a new account. On success the server has set the refresh
/// cookie; the caller decides how to adopt the returned token (a user
/// with an unverified email is prompted to verify before signing in).
pub async fn register(
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<AuthResponse, ExchangeError> {
    let email = normalize_email(email);
    let display_name = display_name.trim().to_string();
    validate::validate_registration(&email, &display_name, password)?;

    let request = RegisterRequest {
        email,
        display_name,
        password: password.to_string(),
    };
    post_json_with_credentials("/v1/auth/register", &request).await
}

/// Signs in with email and password. Every server-side rejection folds
/// into [`SIGN_IN_FAILED_MESSAGE`].
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ExchangeError> {
    let email = normalize_email(email);
    validate::validate_login(&email, password)?;

    let request = LoginRequest {
        email,
        password: password.to_string(),
    };
    post_json_with_credentials("/v1/auth/login", &request)
        .await
        .map_err(|err| match err {
            ExchangeError::Auth(_) | ExchangeError::Validation(_) => {
                ExchangeError::auth(SIGN_IN_FAILED_MESSAGE)
            }
            network => network,
        })
}

/// Exchanges the httpOnly refresh cookie for a fresh access token. The
/// cookie never touches client code; the browser attaches it. An `Auth`
/// failure here means the session is gone and the caller must log out.
pub async fn refresh() -> Result<AuthResponse, ExchangeError> {
    post_json_with_credentials("/v1/auth/refresh", &serde_json::json!({})).await
}

/// Completes a password reset with the token from the email link.
pub async fn reset_password(
    token: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<MessageResponse, ExchangeError> {
    validate::validate_password_reset(token, new_password, confirm_password)?;

    let request = ResetPasswordRequest {
        token: token.trim().to_string(),
        new_password: new_password.to_string(),
    };
    post_json("/v1/auth/reset-password", &request).await
}

/// Confirms an email address with the token from the link.
pub async fn verify_email(token: &str) -> Result<MessageResponse, ExchangeError> {
    let request = VerifyEmailRequest {
        token: token.to_string(),
    };
    post_json("/v1/auth/verify-email", &request).await
}

/// Requests a new verification email. The response copy never discloses
/// whether the account exists.
pub async fn resend_verification(email: &str) -> Result<MessageResponse, ExchangeError> {
    let request = ResendVerificationRequest {
        email: normalize_email(email),
    };
    post_json("/v1/auth/resend-verification", &request).await
}
