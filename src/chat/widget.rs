//! Browser-side state of the chat widget
//!
//! The widget mirrors the server transcript. Failed requests add the bot's
//! error line and release the send button; an expired session is forgotten so
//! the next toggle opens a fresh one.

use uuid::Uuid;

use super::session::{ChatMessage, Sender, REPLY_ERROR};
use super::transcript::{SendOutcome, Transcript};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetModel {
    pub open: bool,
    pub session: Option<Uuid>,
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
}

impl WidgetModel {
    /// Show the widget; true when a session must be opened first
    pub fn toggle_open(&mut self) -> bool {
        self.open = true;
        self.session.is_none()
    }

    pub fn opened(&mut self, transcript: Transcript) {
        self.session = Some(transcript.id);
        self.messages = transcript.messages;
        self.sending = transcript.awaiting_reply;
    }

    /// Hide the widget, returning the session to close
    pub fn minimize(&mut self) -> Option<Uuid> {
        self.open = false;
        self.sending = false;
        self.messages.clear();
        self.session.take()
    }

    /// Echo the message locally and return what to send.
    ///
    /// `None` for blank input, no session, or a reply still pending.
    pub fn begin_send(&mut self, text: &str) -> Option<(Uuid, String)> {
        let text = text.trim();
        if text.is_empty() || self.sending {
            return None;
        }
        let id = self.session?;
        self.sending = true;
        self.messages.push(ChatMessage::new(Sender::User, text));
        Some((id, text.to_string()))
    }

    pub fn replied(&mut self, outcome: SendOutcome) {
        self.messages = outcome.transcript.messages;
        self.sending = outcome.transcript.awaiting_reply;
    }

    /// The request failed; `expired` when the server no longer knows the session
    pub fn failed(&mut self, expired: bool) {
        self.messages.push(ChatMessage::new(Sender::Bot, REPLY_ERROR));
        self.sending = false;
        if expired {
            self.session = None;
        }
    }
}
