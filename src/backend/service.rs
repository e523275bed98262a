//! Collaborator seams
//!
//! Forms and handlers depend on these traits rather than on the HTTP client,
//! so tests can swap in fakes.

use async_trait::async_trait;

use super::error::BackendError;
use super::types::{ClientSubmission, EmailCheck, SubmitOutcome};

/// Looks up whether an email is already registered
#[async_trait]
pub trait EmailLookup: Send + Sync {
    async fn check_email(&self, email: &str, website_source: &str) -> Result<EmailCheck, BackendError>;
}

/// Accepts contact registrations and follow-up queries
#[async_trait]
pub trait ClientIntake: Send + Sync {
    async fn submit_client(&self, submission: &ClientSubmission) -> Result<SubmitOutcome, BackendError>;
}
