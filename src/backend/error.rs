//! Backend client error types

use thiserror::Error;

use super::normalize::NETWORK_ERROR;

/// Errors that can occur when talking to the lead-capture backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[cfg(feature = "ssr")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response; `message` is already normalized
    #[error("Backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid backend configuration: {0}")]
    Config(String),
}

impl BackendError {
    /// Map a transport failure the same way for every call
    #[cfg(feature = "ssr")]
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(err)
        }
    }

    /// Message suitable for a status banner
    pub fn display_message(&self) -> String {
        match self {
            BackendError::Rejected { message, .. } => message.clone(),
            _ => NETWORK_ERROR.to_string(),
        }
    }

    /// Whether the request reached the backend and got an answer
    pub fn is_rejection(&self) -> bool {
        matches!(self, BackendError::Rejected { .. })
    }
}
