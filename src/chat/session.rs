//! Chat widget session
//!
//! The transcript lives only as long as the session. A send while a reply is
//! pending is ignored, and each reply is matched to its send by generation so
//! a late answer cannot land in a newer exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ChatError;

/// First bot message of every session
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Bot message shown when the remote service fails
pub const REPLY_ERROR: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChatState {
    Closed,
    Idle,
    AwaitingReply { generation: u64 },
}

/// A send that is waiting for the remote reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub generation: u64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    state: ChatState,
    messages: Vec<ChatMessage>,
    generation: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A closed session with no history
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: ChatState::Closed,
            messages: Vec::new(),
            generation: 0,
        }
    }

    /// A session already opened and greeted
    pub fn opened() -> Self {
        let mut session = Self::new();
        session.open();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.state != ChatState::Closed
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, ChatState::AwaitingReply { .. })
    }

    /// Open the widget; reopening an open session keeps its history
    pub fn open(&mut self) {
        if self.state == ChatState::Closed {
            self.messages = vec![ChatMessage::new(Sender::Bot, GREETING)];
            self.state = ChatState::Idle;
        }
    }

    /// Close from any state, discarding the transcript
    pub fn close(&mut self) {
        self.state = ChatState::Closed;
        self.messages.clear();
    }

    /// Append the user's message and wait for a reply.
    ///
    /// Blank input, a closed session, or a reply still pending leave the
    /// transcript untouched and return `None`.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() || self.state != ChatState::Idle {
            return None;
        }

        self.generation += 1;
        self.messages.push(ChatMessage::new(Sender::User, text));
        self.state = ChatState::AwaitingReply {
            generation: self.generation,
        };

        Some(PendingReply {
            generation: self.generation,
            text: text.to_string(),
        })
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state == ChatState::AwaitingReply { generation }
    }

    /// Deliver the reply for `generation`; stale replies are dropped
    pub fn complete(&mut self, generation: u64, reply: Result<String, ChatError>) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(session = %self.id, generation, "Dropping stale chat reply");
            return false;
        }

        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "Chat reply failed");
                REPLY_ERROR.to_string()
            }
        };

        self.messages.push(ChatMessage::new(Sender::Bot, text));
        self.state = ChatState::Idle;
        true
    }

    /// Start a streamed reply with an empty bot message
    pub fn begin_stream_reply(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.messages.push(ChatMessage::new(Sender::Bot, ""));
        true
    }

    /// Append streamed text to the last bot message only
    pub fn push_chunk(&mut self, generation: u64, chunk: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match self.messages.last_mut() {
            Some(last) if last.sender == Sender::Bot => {
                last.text.push_str(chunk);
                true
            }
            _ => false,
        }
    }

    /// End a streamed reply
    pub fn finish_stream(&mut self, generation: u64, outcome: Result<(), ChatError>) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        if let Err(e) = outcome {
            tracing::warn!(session = %self.id, error = %e, "Chat stream failed");
            match self.messages.last_mut() {
                Some(last) if last.sender == Sender::Bot && last.text.is_empty() => {
                    last.text = REPLY_ERROR.to_string();
                }
                _ => self.messages.push(ChatMessage::new(Sender::Bot, REPLY_ERROR)),
            }
        }

        self.state = ChatState::Idle;
        true
    }
}
