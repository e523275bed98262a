//! `mailto:` composition
//!
//! A generated link only means the URI was handed to the visitor's mail
//! client. Nothing here can observe whether a message was sent.

use serde::{Deserialize, Serialize};

/// A composed email ready to hand to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Percent-encoded subject
    pub fn encoded_subject(&self) -> String {
        urlencoding::encode(&self.subject).into_owned()
    }

    /// Percent-encoded body
    pub fn encoded_body(&self) -> String {
        urlencoding::encode(&self.body).into_owned()
    }

    /// The full `mailto:` URI
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            self.encoded_subject(),
            self.encoded_body()
        )
    }

    /// Plain-text fallback for visitors without a mail client
    pub fn clipboard_text(&self) -> String {
        format!("To: {}\nSubject: {}\n\n{}", self.to, self.subject, self.body)
    }

}
