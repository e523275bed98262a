//! Debounced email-existence check
//!
//! Every keystroke bumps a generation counter and replaces the single pending
//! timer. When the timer fires the lookup runs as a detached task; it is never
//! aborted, but its result is published only if no newer input arrived in the
//! meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::email_check::{is_checkable, EmailStatus, CHECK_FAILED, DEBOUNCE_WINDOW};
use crate::backend::EmailLookup;

pub struct EmailCheckDebouncer {
    lookup: Arc<dyn EmailLookup>,
    website_source: String,
    window: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    status: watch::Sender<EmailStatus>,
}

impl EmailCheckDebouncer {
    pub fn new(lookup: Arc<dyn EmailLookup>, website_source: impl Into<String>) -> Self {
        let (status, _) = watch::channel(EmailStatus::Unknown);
        Self {
            lookup,
            website_source: website_source.into(),
            window: DEBOUNCE_WINDOW,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            status,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Latest published status
    pub fn status(&self) -> EmailStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EmailStatus> {
        self.status.subscribe()
    }

    /// Generation of the most recent input
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Feed the current field value; returns its generation
    pub fn input(&mut self, email: &str) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(timer) = self.pending.take() {
            timer.abort();
        }

        if !is_checkable(email) {
            self.status.send_replace(EmailStatus::Unknown);
            return generation;
        }

        let email = email.trim().to_string();
        let lookup = Arc::clone(&self.lookup);
        let source = self.website_source.clone();
        let latest = Arc::clone(&self.generation);
        let status = self.status.clone();
        let window = self.window;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;

            // Detached so that a later keystroke cancels only the timer.
            tokio::spawn(async move {
                if latest.load(Ordering::SeqCst) == generation {
                    status.send_replace(EmailStatus::Checking);
                }

                let result = lookup.check_email(&email, &source).await;

                if latest.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "Discarding stale email check");
                    return;
                }

                let next = match result {
                    Ok(check) if check.exists => EmailStatus::Exists,
                    Ok(_) => EmailStatus::New,
                    Err(e) => {
                        tracing::warn!(error = %e, "Email check failed");
                        EmailStatus::Failed(CHECK_FAILED.to_string())
                    }
                };
                status.send_replace(next);
            });
        }));

        generation
    }
}

impl Drop for EmailCheckDebouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}
