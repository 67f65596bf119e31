//! Token Store
//!
//! The logged-in session: a bearer token and the username it belongs to.

use std::fmt;
use std::sync::Arc;

use super::storage::{MemoryStorage, StorageBackend};

/// Storage key for the bearer token
pub const USER_TOKEN_KEY: &str = "userToken";

/// Storage key for the logged-in username
pub const USERNAME_KEY: &str = "username";

/// A logged-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: Option<String>,
}

/// Session holder over a storage backend
///
/// Cloning is cheap; clones share the same backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Token store over fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist a session
    pub fn set(&self, token: &str, username: &str) {
        self.backend.set_item(USER_TOKEN_KEY, token);
        self.backend.set_item(USERNAME_KEY, username);
    }

    /// The stored token, if any
    ///
    /// An empty stored value counts as no token.
    pub fn get(&self) -> Option<String> {
        self.backend
            .get_item(USER_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn get_username(&self) -> Option<String> {
        self.backend.get_item(USERNAME_KEY)
    }

    /// Remove both session entries
    pub fn clear(&self) {
        self.backend.remove_item(USER_TOKEN_KEY);
        self.backend.remove_item(USERNAME_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    pub fn session(&self) -> Option<Session> {
        self.get().map(|token| Session {
            token,
            username: self.get_username(),
        })
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = TokenStore::in_memory();
        assert_eq!(store.get(), None);
        assert_eq!(store.get_username(), None);

        store.set("t1", "u1");
        assert_eq!(store.get(), Some("t1".to_string()));
        assert_eq!(store.get_username(), Some("u1".to_string()));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_clear() {
        let store = TokenStore::in_memory();
        store.set("t1", "u1");
        store.clear();

        assert_eq!(store.get(), None);
        assert_eq!(store.get_username(), None);
        assert!(store.session().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set_item(USER_TOKEN_KEY, "");

        let store = TokenStore::new(backend);
        assert_eq!(store.get(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_clones_share_backend() {
        let store = TokenStore::in_memory();
        let other = store.clone();

        store.set("abc", "alice");
        assert_eq!(
            other.session(),
            Some(Session {
                token: "abc".to_string(),
                username: Some("alice".to_string()),
            })
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let store = TokenStore::in_memory();
        store.set("secret-token", "alice");
        let debug = format!("{:?}", store);
        assert!(!debug.contains("secret-token"));
    }
}
