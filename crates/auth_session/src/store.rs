//! Durable storage for the access token. One key, one value, scoped to
//! the browser profile; never attached to requests automatically.

use std::cell::RefCell;

/// Storage key under which the access token is persisted.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Abstraction over the durable client storage holding the access token.
///
/// Reads and writes are synchronous from the caller's perspective. An
/// implementation must treat storage failures as the absent case rather
/// than surfacing them; the session machine has no error channel for
/// storage and the token is short-lived anyway.
pub trait CredentialStore {
    /// Returns the stored access token, if any.
    fn read_token(&self) -> Option<String>;

    /// Persists the access token, replacing any previous value.
    fn write_token(&self, token: &str);

    /// Removes the access token.
    fn clear_token(&self);
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the store, e.g. to model a previous visit.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn read_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read_token(), None);

        store.write_token("tok-1");
        assert_eq!(store.read_token(), Some("tok-1".to_string()));

        store.write_token("tok-2");
        assert_eq!(store.read_token(), Some("tok-2".to_string()));

        store.clear_token();
        assert_eq!(store.read_token(), None);
    }

    #[test]
    fn clear_on_empty_store_is_a_no_op() {
        let store = MemoryStore::new();
        store.clear_token();
        assert_eq!(store.read_token(), None);
    }
}
