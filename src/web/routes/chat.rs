//! Chat Routes
//!
//! - POST /api/chat - Relay one message, reply as plain text
//! - POST /api/chat/sessions - Open a widget session
//! - GET /api/chat/sessions/{id} - Transcript
//! - POST /api/chat/sessions/{id}/messages - Send; `accepted: false` while a
//!   reply is pending
//! - DELETE /api/chat/sessions/{id} - Close
//! - POST /api/chat/sessions/{id}/close - Close from the page-exit beacon

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::chat::{SendOutcome, Transcript};
use crate::web::dto::ChatRequest;
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;

fn message_text(request: &ChatRequest) -> WebResult<&str> {
    let text = request.message.trim();
    if text.is_empty() {
        return Err(WebError::Validation("Message is required".to_string()));
    }
    Ok(text)
}

/// POST /api/chat
pub async fn relay(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> WebResult<String> {
    let text = message_text(&request)?;
    let reply = state.chat.reply(text).await?;
    Ok(reply)
}

/// POST /api/chat/sessions
pub async fn open_session(
    State(state): State<Arc<AppState>>,
) -> WebResult<(StatusCode, Json<Transcript>)> {
    let transcript = state.sessions.open().await?;
    Ok((StatusCode::CREATED, Json(transcript)))
}

/// GET /api/chat/sessions/{id}
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<Transcript>> {
    Ok(Json(state.sessions.transcript(id).await?))
}

/// POST /api/chat/sessions/{id}/messages
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> WebResult<Json<SendOutcome>> {
    let text = message_text(&request)?;
    let outcome = state.sessions.send(id, text, state.chat.as_ref()).await?;
    Ok(Json(outcome))
}

/// DELETE /api/chat/sessions/{id}
pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> WebResult<StatusCode> {
    state.sessions.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/chat/sessions/{id}/close
///
/// Beacons get no answer, so an unknown session is not an error here.
pub async fn close_session_beacon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if let Err(e) = state.sessions.close(id).await {
        tracing::debug!(session = %id, error = %e, "Beacon for a closed chat session");
    }
    StatusCode::NO_CONTENT
}
