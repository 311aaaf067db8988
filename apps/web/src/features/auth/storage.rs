//! localStorage-backed credential store.
//!
//! One key (`accessToken`), scoped to the browser profile. Storage
//! failures degrade to the absent case with a console warning; the token
//! is short-lived and the next exchange re-establishes it.

use auth_session::{CredentialStore, ACCESS_TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageStore {
    fn read_token(&self) -> Option<String> {
        let storage = local_storage()?;
        storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn write_token(&self, token: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; access token not persisted");
            return;
        };
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("Failed to persist access token");
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}
