//! What the registration page knows about a typed email

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Quiet period before a lookup is issued
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Shown when a lookup fails
pub const CHECK_FAILED: &str = "Email check failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum EmailStatus {
    #[default]
    Unknown,
    Checking,
    Exists,
    New,
    Failed(String),
}

impl EmailStatus {
    /// Message shown under the email field, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            EmailStatus::Checking => Some("Checking..."),
            EmailStatus::Exists => Some("Welcome back! Just tell us your new query."),
            EmailStatus::Failed(error) => Some(error),
            EmailStatus::Unknown | EmailStatus::New => None,
        }
    }
}

/// Whether an input is complete enough to look up
pub fn is_checkable(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}
