//! # Session — who is logged in, and how requests get authenticated
//!
//! A [`Session`] owns the in-memory [`Identity`] and the durable token slot. It is
//! created once at start-up with [`Session::restore`], handed to the views (the
//! `ui` crate provides it through a Dioxus context) and torn down with
//! [`Session::logout`].
//!
//! The identity is always derived by decoding the token payload; the token's
//! signature and expiry are left to the server, which rejects a stale token on
//! the next authenticated call.

use std::fmt;
use std::rc::Rc;

use store::{decode_identity, Identity, Role, TokenStore};

use crate::client::{ApiClient, AuthorizedClient};
use crate::error::ApiError;

#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    tokens: Rc<dyn TokenStore>,
    identity: Option<Identity>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.client.base_url())
            .field("identity", &self.identity)
            .finish()
    }
}

impl Session {
    /// A logged-out session. The token slot is not read.
    pub fn new(client: ApiClient, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            client,
            tokens,
            identity: None,
        }
    }

    /// Pick up where a previous run left off.
    ///
    /// A stored token that cannot be decoded is discarded.
    pub fn restore(client: ApiClient, tokens: Rc<dyn TokenStore>) -> Self {
        let mut session = Self::new(client, tokens);
        if let Some(token) = session.tokens.load() {
            match decode_identity(&token) {
                Ok(identity) => {
                    tracing::info!(id = %identity.id, role = %identity.role, "Restored session");
                    session.identity = Some(identity);
                }
                Err(e) => {
                    tracing::warn!("Discarding stored token: {}", e);
                    session.tokens.clear();
                }
            }
        }
        session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Log in, persist the token and return the decoded identity.
    ///
    /// Nothing is stored when the server refuses or the token is malformed.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let token = self.client.login(email, password).await?;
        let identity = decode_identity(&token)?;
        self.tokens.save(&token);
        self.identity = Some(identity.clone());
        tracing::info!(id = %identity.id, role = %identity.role, "Logged in");
        Ok(identity)
    }

    /// Register, then log in with the same credentials.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        wants_admin_role: bool,
    ) -> Result<Identity, ApiError> {
        let role = if wants_admin_role {
            Role::Admin
        } else {
            Role::Student
        };
        self.client.register(name, email, password, role).await?;
        self.login(email, password).await
    }

    /// Forget the token and the identity. The server is not told.
    pub fn logout(&mut self) {
        self.tokens.clear();
        self.identity = None;
        tracing::info!("Logged out");
    }

    /// `Bearer <token>`, read from the token slot at call time.
    ///
    /// Without a stored token the credential is empty and the server rejects
    /// the request.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.tokens.load().unwrap_or_default())
    }

    /// A client for the authenticated endpoints.
    pub fn api(&self) -> AuthorizedClient {
        self.client.authorized(self.auth_header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokenStore;

    // {"sub":"5","role":"admin"}
    const ADMIN_TOKEN: &str = "h.eyJzdWIiOiI1Iiwicm9sZSI6ImFkbWluIn0.s";

    fn session_with(store: &MemoryTokenStore) -> Session {
        Session::restore(ApiClient::new("http://127.0.0.1:9"), Rc::new(store.clone()))
    }

    #[test]
    fn test_restore_empty_slot() {
        let store = MemoryTokenStore::new();
        let session = session_with(&store);
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_header(), "Bearer ");
    }

    #[test]
    fn test_restore_valid_token() {
        let store = MemoryTokenStore::with_token(ADMIN_TOKEN);
        let session = session_with(&store);
        let identity = session.identity().unwrap();
        assert_eq!(identity.id, "5");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(session.auth_header(), format!("Bearer {ADMIN_TOKEN}"));
    }

    #[test]
    fn test_restore_discards_malformed_token() {
        let store = MemoryTokenStore::with_token("garbage");
        let session = session_with(&store);
        assert!(!session.is_authenticated());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryTokenStore::with_token(ADMIN_TOKEN);
        let mut session = session_with(&store);
        session.logout();
        assert!(session.identity().is_none());
        assert!(store.load().is_none());
        assert_eq!(session.auth_header(), "Bearer ");
    }

    #[test]
    fn test_new_does_not_read_slot() {
        let store = MemoryTokenStore::with_token(ADMIN_TOKEN);
        let session = Session::new(ApiClient::new("http://127.0.0.1:9"), Rc::new(store));
        assert!(!session.is_authenticated());
    }
}
