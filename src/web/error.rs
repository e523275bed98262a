//! Web Error Types
//!
//! Defines error types for the HTTP layer and implements conversion
//! to JSON responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::backend::BackendError;
use crate::chat::ChatError;
use crate::forms::{FieldErrors, FormError};

/// Web layer error types
#[derive(Error, Debug)]
pub enum WebError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Form rules rejected the submission
    #[error(transparent)]
    Form(#[from] FormError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Lead-capture backend call failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Chat relay or session error
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl WebError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            WebError::Form(FormError::Transition { .. }) => (StatusCode::CONFLICT, "FORM_BUSY"),
            WebError::Form(FormError::ConsentRequired) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "CONSENT_REQUIRED")
            }
            WebError::Form(FormError::Invalid(_)) => (StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID"),
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::Backend(e) => match e {
                BackendError::Rejected { status, .. } if (400..500).contains(status) => (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST),
                    "BACKEND_REJECTED",
                ),
                BackendError::Rejected { .. } => (StatusCode::BAD_GATEWAY, "BACKEND_REJECTED"),
                BackendError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "BACKEND_TIMEOUT"),
                BackendError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "BACKEND_UNAVAILABLE"),
                BackendError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "BACKEND_CONFIG"),
                BackendError::Request(_) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
            },
            WebError::Chat(e) => match e {
                ChatError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
                ChatError::TooManySessions => (StatusCode::TOO_MANY_REQUESTS, "TOO_MANY_SESSIONS"),
                ChatError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "CHAT_TIMEOUT"),
                ChatError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "CHAT_UNAVAILABLE"),
                ChatError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CHAT_CONFIG"),
                ChatError::Remote { .. } | ChatError::Request(_) => {
                    (StatusCode::BAD_GATEWAY, "CHAT_ERROR")
                }
            },
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message shown to the visitor
    fn public_message(&self) -> String {
        match self {
            WebError::Backend(e) => e.display_message(),
            WebError::Form(FormError::Invalid(errors)) => errors.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request failed"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let fields = match &self {
            WebError::Form(e) => e.field_errors().cloned(),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.public_message(),
                fields,
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for web handlers
pub type WebResult<T> = Result<T, WebError>;
