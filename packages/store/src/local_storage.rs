//! # Browser token store — `window.localStorage`
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. The
//! token lives under the key [`TOKEN_KEY`] of the page origin's local storage,
//! so it survives reloads and is shared between tabs.
//!
//! Storage can be unavailable (private browsing, disabled by policy). Every
//! method then degrades to "no token" instead of failing.

use web_sys::Storage;

use crate::tokens::{TokenStore, TOKEN_KEY};

#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            tracing::warn!("Failed to write token to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
