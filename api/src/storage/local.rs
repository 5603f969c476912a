use web_sys::Storage;

use super::TokenStore;

/// Browser `localStorage`.
///
/// When storage is unavailable (private mode, sandboxed iframe) reads return `None`
/// and writes are dropped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to localStorage", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
