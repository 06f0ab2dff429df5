//! Shared token-slot constructor for all platforms.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): `<data_dir>/lessons/token` via [`store::FileTokenStore`]
//! - anything else keeps the token in memory for the lifetime of the process

use std::rc::Rc;

use store::TokenStore;

/// Create the platform-appropriate durable token slot.
pub fn make_token_store() -> Rc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("lessons");
        Rc::new(store::FileTokenStore::new(base))
    }
}
