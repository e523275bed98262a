//! Support Chat Widget
//!
//! Per-visitor chat sessions that relay messages to the remote chat service.
//!
//! - **session**: transcript and send/reply state machine
//! - **transcript**: snapshots sent to the widget
//! - **client**: HTTP relay, plain-text and streamed replies
//! - **hub**: the process's open sessions
//! - **widget**: browser-side widget state

#[cfg(feature = "ssr")]
pub mod client;
mod error;
#[cfg(feature = "ssr")]
pub mod hub;
pub mod session;
pub mod transcript;
pub mod widget;

#[cfg(feature = "ssr")]
pub use client::{clean_reply, ChatBackend, ChatClient};
pub use error::ChatError;
#[cfg(feature = "ssr")]
pub use hub::{ChatSessions, SessionsConfig};
pub use session::{ChatMessage, ChatSession, ChatState, PendingReply, Sender, GREETING, REPLY_ERROR};
pub use transcript::{SendOutcome, Transcript};
pub use widget::WidgetModel;
