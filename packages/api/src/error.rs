//! Error taxonomy for calls against the lesson-booking API.

use serde::Deserialize;
use store::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got a usable response: connection refused, DNS,
    /// timeouts from the transport, or a body that does not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// The login response carried a token whose payload cannot be decoded.
    #[error("malformed credential token: {0}")]
    Token(#[from] TokenError),
}

impl ApiError {
    /// The `msg` field of the server's error body, when there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Token(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(422))
    }
}

/// Error body the server sends alongside a failure status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}
