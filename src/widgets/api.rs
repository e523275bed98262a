//! Server functions called by the mounted widgets

use leptos::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{SendOutcome, Transcript};
use crate::forms::EmailStatus;

#[cfg(feature = "ssr")]
use crate::web::AppState;
#[cfg(feature = "ssr")]
use std::sync::Arc;

/// Answer to a widget send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatReply {
    Delivered(SendOutcome),
    /// The server no longer knows the session
    Expired,
}

#[cfg(feature = "ssr")]
fn app_state() -> Result<Arc<AppState>, ServerFnError> {
    use_context::<Arc<AppState>>().ok_or_else(|| ServerFnError::new("Application state missing"))
}

/// Debounced registration check; lookup failures come back as a status
#[server(CheckEmailStatus, "/fn")]
pub async fn check_email_status(
    email: String,
    website_source: String,
) -> Result<EmailStatus, ServerFnError> {
    use crate::forms::email_check::{is_checkable, CHECK_FAILED};

    if !is_checkable(&email) {
        return Ok(EmailStatus::Unknown);
    }

    let state = app_state()?;
    let status = match state.email_lookup.check_email(email.trim(), &website_source).await {
        Ok(check) if check.exists => EmailStatus::Exists,
        Ok(_) => EmailStatus::New,
        Err(e) => {
            tracing::warn!(error = %e, "Email check failed");
            EmailStatus::Failed(CHECK_FAILED.to_string())
        }
    };
    Ok(status)
}

#[server(OpenChat, "/fn")]
pub async fn open_chat() -> Result<Transcript, ServerFnError> {
    let state = app_state()?;
    state.sessions.open().await.map_err(ServerFnError::new)
}

#[server(SendChatMessage, "/fn")]
pub async fn send_chat_message(id: Uuid, message: String) -> Result<ChatReply, ServerFnError> {
    use crate::chat::ChatError;

    let state = app_state()?;
    match state.sessions.send(id, &message, state.chat.as_ref()).await {
        Ok(outcome) => Ok(ChatReply::Delivered(outcome)),
        Err(ChatError::SessionNotFound(_)) => Ok(ChatReply::Expired),
        Err(e) => Err(ServerFnError::new(e)),
    }
}

#[server(CloseChat, "/fn")]
pub async fn close_chat(id: Uuid) -> Result<(), ServerFnError> {
    let state = app_state()?;
    if let Err(e) = state.sessions.close(id).await {
        tracing::debug!(session = %id, error = %e, "Close of unknown chat session");
    }
    Ok(())
}
