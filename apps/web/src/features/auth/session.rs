//! Reactive session context for the frontend.
//!
//! Wraps the `auth_session` state machine in a Leptos signal and exposes
//! the named mutation operations; consumers never write session fields
//! directly. The provider resolves the session from durable storage once
//! on mount — synchronously, without contacting the server — per the
//! restoration contract.

use crate::features::auth::storage::LocalStorageStore;
use auth_session::{Session, User};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: Signal<bool>,
    pub user: Signal<Option<User>>,
    pub error: Signal<Option<String>>,
    pub access_token: Signal<Option<String>>,
}

impl SessionContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Session>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_authenticated);
        let is_loading = Signal::derive(move || session.get().is_loading);
        let user = Signal::derive(move || session.get().user);
        let error = Signal::derive(move || session.get().error);
        let access_token = Signal::derive(move || session.get().access_token);
        Self {
            session,
            is_authenticated,
            is_loading,
            user,
            error,
            access_token,
        }
    }

    fn store() -> LocalStorageStore {
        LocalStorageStore
    }

    /// One-shot restoration from durable storage; a no-op once resolved.
    pub fn initialize(&self) {
        self.session.update(|session| session.restore(&Self::store()));
    }

    /// Adopts a successful exchange and persists the access token.
    pub fn login(&self, user: User, access_token: String) {
        self.session
            .update(|session| session.login(&Self::store(), user, access_token));
    }

    /// Clears the session and the stored token. Idempotent.
    pub fn logout(&self) {
        self.session.update(|session| session.logout(&Self::store()));
    }

    /// Replaces the cached user after a profile-mutating operation.
    pub fn update_user(&self, user: User) {
        self.session.update(|session| session.update_user(user));
    }

    /// Marks an exchange as in flight.
    pub fn set_loading(&self, loading: bool) {
        self.session.update(|session| session.set_loading(loading));
    }

    /// Records an exchange failure; terminates any loading phase.
    pub fn set_error(&self, error: Option<String>) {
        self.session.update(|session| session.set_error(error));
    }

    /// Untracked access token for one-off authenticated requests.
    pub fn current_access_token(&self) -> Option<String> {
        self.session.get_untracked().access_token
    }
}

/// Provides the session context and restores it exactly once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let context = SessionContext::new(session);
    provide_context(context);

    // Restoration is storage-only, so it resolves before the first paint.
    context.initialize();

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(RwSignal::new(Session::new())))
}
