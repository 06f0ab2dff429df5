//! Credential token decoding.
//!
//! The token issued by `POST /api/auth/login` is a three-segment signed string.
//! The client only decodes the middle (payload) segment to learn `{sub, role}`;
//! the signature and expiry are never checked here, the server rejects stale or
//! forged tokens on the next request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::models::{Identity, Role};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// The claims the client relies on. Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: Subject,
    role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Subject {
    Text(String),
    Number(i64),
}

impl From<Subject> for String {
    fn from(value: Subject) -> Self {
        match value {
            Subject::Text(s) => s,
            Subject::Number(n) => n.to_string(),
        }
    }
}

/// Decode the identity carried by a credential token.
pub fn decode_identity(token: &str) -> Result<Identity, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    // Accept the standard alphabet and padded input as well
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;
    Ok(Identity {
        id: claims.sub.into(),
        role: claims.role,
    })
}
