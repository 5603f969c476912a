use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::TokenStore;

/// In-memory store for native builds and tests.
///
/// Clones share the same map, so a test can keep a handle and inspect what the
/// client wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AUTH_TOKEN_KEY, REDIRECT_AFTER_LOGIN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

    #[test]
    fn clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set(AUTH_TOKEN_KEY, "abc");

        assert_eq!(handle.auth_token().as_deref(), Some("abc"));
    }

    #[test]
    fn clear_session_keeps_redirect_path() {
        let store = MemoryStore::new()
            .with_value(AUTH_TOKEN_KEY, "a")
            .with_value(REFRESH_TOKEN_KEY, "r")
            .with_value(USER_KEY, "{}")
            .with_value(REDIRECT_AFTER_LOGIN_KEY, "/dashboard");

        store.clear_session();

        assert!(!store.contains(AUTH_TOKEN_KEY));
        assert!(!store.contains(REFRESH_TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
        assert_eq!(
            store.take_redirect_after_login().as_deref(),
            Some("/dashboard")
        );
        assert!(!store.contains(REDIRECT_AFTER_LOGIN_KEY));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryStore::new().with_value(REFRESH_TOKEN_KEY, "");

        assert_eq!(store.refresh_token(), None);
    }
}
