//! Local Storage Backend

use splitter::StorageBackend;

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// `window.localStorage`
///
/// Looks the storage object up on every call; a missing or blocked
/// storage reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        let stored = local_storage().map(|storage| storage.set_item(key, value).is_ok());
        if stored != Some(true) {
            web_sys::console::warn_1(&format!("Failed to store {} in localStorage", key).into());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitter::TokenStore;
    use std::sync::Arc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_store_over_local_storage() {
        let store = TokenStore::new(Arc::new(LocalStorage));
        store.clear();
        assert!(!store.is_logged_in());

        store.set("t1", "u1");
        assert_eq!(LocalStorage.get_item("userToken"), Some("t1".to_string()));
        assert_eq!(store.get_username(), Some("u1".to_string()));

        store.clear();
        assert_eq!(LocalStorage.get_item("userToken"), None);
        assert_eq!(LocalStorage.get_item("username"), None);
    }
}
