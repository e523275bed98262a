//! Transient notices
//!
//! Snackbar-style status messages shown after a form action. They are
//! rendered with a fixed auto-dismiss delay and never stored.

use leptos::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before submission notices disappear
pub const SUBMIT_DISMISS: Duration = Duration::from_secs(5);

/// Delay before copy confirmations disappear
pub const COPY_DISMISS: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    #[serde(rename = "dismiss_after_ms", serialize_with = "as_millis")]
    pub dismiss_after: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            dismiss_after: SUBMIT_DISMISS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }
}

/// Status banner that fades out after its dismiss delay
#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let ms = notice.dismiss_after.as_millis();
    let class = format!("notice notice-{}", notice.severity.as_str());
    let style = format!("animation: notice-fade 0.3s ease-in {}ms forwards;", ms);

    view! {
        <div class=class role="status" data-dismiss-ms=ms.to_string() style=style>
            {notice.message}
        </div>
    }
}
