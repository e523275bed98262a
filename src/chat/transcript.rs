//! Wire snapshots of a widget session

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::{ChatMessage, ChatSession};

/// Snapshot of a session as sent to the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
}

impl From<&ChatSession> for Transcript {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id(),
            messages: session.messages().to_vec(),
            awaiting_reply: session.is_awaiting(),
        }
    }
}

/// Result of a send request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// False when the send was ignored (blank, or a reply still pending)
    pub accepted: bool,
    pub transcript: Transcript,
}
