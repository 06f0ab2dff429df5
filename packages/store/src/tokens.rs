//! # Durable token storage
//!
//! The only state the client persists is the raw credential token, kept under a
//! single well-known key ([`TOKEN_KEY`]). [`TokenStore`] abstracts where that
//! slot lives:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryTokenStore`] | Tests, and anywhere persistence is not wanted |
//! | [`crate::FileTokenStore`] | Desktop: a `token` file in the app data directory |
//! | `LocalStorageStore` | Web (`web` feature): `window.localStorage` |
//!
//! Backends never fail loudly. A read error is "no token", a write error is
//! logged and the token simply does not survive a reload.

/// Storage key (and file name) of the persisted token.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}
