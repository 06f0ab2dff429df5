use std::sync::{Arc, Mutex, MutexGuard};

use crate::tokens::TokenStore;

/// In-memory token slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if left over from a previous run.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.save(&token.into());
        store
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryTokenStore::with_token("abc");
        let other = store.clone();
        other.clear();
        assert!(store.load().is_none());
    }
}
