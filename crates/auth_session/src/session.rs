//! In-memory session state machine.
//!
//! All mutation goes through the named operations; consumers never write
//! fields directly. Two invariants hold across every transition:
//! `is_authenticated` implies both `user` and `access_token` are present,
//! and `is_loading` implies `error` is `None`.

use crate::store::CredentialStore;
use serde::{Deserialize, Serialize};

/// Account lifecycle states as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Pending,
    Disabled,
}

/// Server-owned user record; the client holds a cached copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
    pub status: UserStatus,
}

/// The client's belief about the current authentication status.
///
/// Created in the loading state; resolved by [`Session::restore`] once at
/// startup, then driven by credential exchange results. The machine does
/// no I/O beyond the credential store and therefore cannot fail; it only
/// records failures reported by the exchange layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Initial state at process start: nothing known yet, loading until
    /// [`Session::restore`] resolves it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: None,
            access_token: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }

    /// Adopts the result of a successful credential exchange and persists
    /// the access token.
    pub fn login(&mut self, store: &dyn CredentialStore, user: User, access_token: String) {
        store.write_token(&access_token);
        self.user = Some(user);
        self.access_token = Some(access_token);
        self.is_authenticated = true;
        self.is_loading = false;
        self.error = None;
    }

    /// Clears all fields to the initial non-loading state and removes the
    /// stored token. Idempotent: logging out while logged out only
    /// re-clears storage.
    pub fn logout(&mut self, store: &dyn CredentialStore) {
        store.clear_token();
        self.user = None;
        self.access_token = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = None;
    }

    /// Replaces the cached user after a profile-mutating operation.
    /// Leaves `access_token` and `is_authenticated` untouched.
    pub fn update_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Marks an exchange as in flight. Entering the loading state clears
    /// any previous error.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        if loading {
            self.error = None;
        }
    }

    /// Records a failure reported by an exchange, or clears the previous
    /// one. Either way the loading phase is over, so `is_loading` drops
    /// with it.
    pub fn set_error(&mut self, error: Option<String>) {
        self.is_loading = false;
        self.error = error;
    }

    /// One-shot restoration from the credential store.
    ///
    /// A stored token is adopted provisionally without contacting the
    /// server; it is trusted until the next authenticated request proves
    /// or disproves it. No user is known at this point, so
    /// `is_authenticated` stays false until an exchange supplies one.
    /// Once the session has resolved (`is_loading == false`) this is a
    /// no-op.
    pub fn restore(&mut self, store: &dyn CredentialStore) {
        if !self.is_loading {
            return;
        }
        if let Some(token) = store.read_token() {
            log::debug!("restored access token from storage");
            self.access_token = Some(token);
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn user(email: &str) -> User {
        User {
            id: "01HV0000000000000000000000".to_string(),
            email: email.to_string(),
            display_name: "A".to_string(),
            email_verified: true,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let session = Session::new();
        assert!(session.is_loading);
        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
        assert_eq!(session.access_token, None);
        assert_eq!(session.error, None);
    }

    #[test]
    fn restore_with_empty_store_resolves_signed_out() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.restore(&store);

        assert!(!session.is_loading);
        assert!(!session.is_authenticated);
        assert_eq!(session.error, None);
    }

    #[test]
    fn restore_adopts_stored_token_without_a_user() {
        let store = MemoryStore::with_token("stale-or-not");
        let mut session = Session::new();
        session.restore(&store);

        assert_eq!(session.access_token, Some("stale-or-not".to_string()));
        assert_eq!(session.user, None);
        // No user is known yet, so the authenticated flag must stay down.
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[test]
    fn restore_is_a_no_op_once_resolved() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.restore(&store);

        store.write_token("written-later");
        session.restore(&store);
        assert_eq!(session.access_token, None);
    }

    #[test]
    fn login_authenticates_and_persists_the_token() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.restore(&store);

        session.login(&store, user("a@b.com"), "tok".to_string());

        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.error, None);
        assert_eq!(store.read_token(), Some("tok".to_string()));
        assert_eq!(session.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn login_clears_a_previous_error() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.set_error(Some("Invalid email or password.".to_string()));

        session.login(&store, user("a@b.com"), "tok".to_string());
        assert_eq!(session.error, None);
    }

    #[test]
    fn logout_resets_to_initial_non_loading_state() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.login(&store, user("a@b.com"), "tok".to_string());

        session.logout(&store);

        assert_eq!(session.user, None);
        assert_eq!(session.access_token, None);
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.error, None);
        assert_eq!(store.read_token(), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.login(&store, user("a@b.com"), "tok".to_string());

        session.logout(&store);
        let after_first = session.clone();
        session.logout(&store);

        assert_eq!(session, after_first);
        assert_eq!(store.read_token(), None);
    }

    #[test]
    fn update_user_leaves_credentials_alone() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.login(&store, user("a@b.com"), "tok".to_string());

        session.update_user(user("renamed@b.com"));

        assert!(session.is_authenticated);
        assert_eq!(session.access_token, Some("tok".to_string()));
        assert_eq!(
            session.user.as_ref().map(|u| u.email.as_str()),
            Some("renamed@b.com")
        );
    }

    #[test]
    fn set_error_terminates_loading() {
        let mut session = Session::new();
        session.set_loading(true);
        session.set_error(Some("boom".to_string()));

        assert!(!session.is_loading);
        assert_eq!(session.error, Some("boom".to_string()));
    }

    #[test]
    fn clearing_the_error_also_ends_loading() {
        let mut session = Session::new();
        session.set_loading(true);
        session.set_error(None);

        assert!(!session.is_loading);
        assert_eq!(session.error, None);
    }

    #[test]
    fn entering_loading_clears_the_error() {
        let mut session = Session::new();
        session.set_error(Some("boom".to_string()));
        session.set_loading(true);

        assert!(session.is_loading);
        assert_eq!(session.error, None);
    }

    #[test]
    fn auth_failure_leaves_previous_session_untouched() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        session.login(&store, user("a@b.com"), "tok".to_string());

        session.set_error(Some("Network error, please retry.".to_string()));

        assert!(session.is_authenticated);
        assert_eq!(session.access_token, Some("tok".to_string()));
    }

    #[test]
    fn user_serializes_with_wire_field_names() {
        let value = serde_json::to_value(user("a@b.com")).expect("serialize user");
        assert_eq!(value["displayName"], "A");
        assert_eq!(value["emailVerified"], true);
        assert_eq!(value["status"], "active");
    }
}
