//! Client helpers for user-related API endpoints. The access token is a
//! bearer credential here; the backend owns authorization.

use crate::app_lib::get_json_with_auth;
use crate::features::users::types::UserSummary;
use auth_session::ExchangeError;

/// Fetches the user list for the permissions dashboard picker.
pub async fn list_users(access_token: &str) -> Result<Vec<UserSummary>, ExchangeError> {
    get_json_with_auth("/v1/users", access_token).await
}
