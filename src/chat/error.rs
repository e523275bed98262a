//! Chat error types

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when relaying chat messages
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat service unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[cfg(feature = "ssr")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Chat service error {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Chat session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Too many open chat sessions")]
    TooManySessions,

    #[error("Invalid chat configuration: {0}")]
    Config(String),
}

impl ChatError {
    #[cfg(feature = "ssr")]
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Timeout
        } else if err.is_connect() {
            ChatError::Unavailable
        } else {
            ChatError::Request(err)
        }
    }
}
