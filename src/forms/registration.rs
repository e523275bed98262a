//! Contact registration form
//!
//! The IT-support contact variant posts to the backend instead of composing
//! an email. A known email switches the form to a short follow-up that only
//! carries the query.

use serde::{Deserialize, Serialize};

use super::email_check::{is_checkable, EmailStatus};
use super::error::FormError;
use super::state::{FormEvent, FormPhase};
use super::validate::FieldErrors;
use crate::backend::{BackendError, ClientIntake, ClientSubmission, SubmitOutcome};
use crate::shell::notice::Notice;

/// Shortest query the backend accepts
pub const MIN_QUERY_LEN: usize = 5;

/// Longest query the backend accepts
pub const MAX_QUERY_LEN: usize = 2000;

pub const REGISTERED: &str = "Thank you! Your registration is complete.";
pub const FOLLOW_UP_RECEIVED: &str = "Thank you! Your additional query has been submitted.";

/// Which fields the form shows and sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationMode {
    #[default]
    Full,
    FollowUp,
}

/// Raw registration fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub clientfname: String,
    pub clientlname: String,
    pub email: String,
    pub countrycode: String,
    pub mobile: String,
    pub query: String,
    pub website_source: String,
}

impl Default for RegistrationInput {
    fn default() -> Self {
        Self {
            clientfname: String::new(),
            clientlname: String::new(),
            email: String::new(),
            countrycode: "+45".to_string(),
            mobile: String::new(),
            query: String::new(),
            website_source: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub input: RegistrationInput,
    mode: RegistrationMode,
    email_status: EmailStatus,
    phase: FormPhase,
    errors: FieldErrors,
}

impl RegistrationForm {
    pub fn new(website_source: impl Into<String>) -> Self {
        Self {
            input: RegistrationInput {
                website_source: website_source.into(),
                ..RegistrationInput::default()
            },
            mode: RegistrationMode::Full,
            email_status: EmailStatus::Unknown,
            phase: FormPhase::Editing,
            errors: FieldErrors::new(),
        }
    }

    pub fn with_input(input: RegistrationInput) -> Self {
        Self {
            input,
            ..Self::new(String::new())
        }
    }

    pub fn mode(&self) -> RegistrationMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn email_status(&self) -> &EmailStatus {
        &self.email_status
    }

    /// Update the email field; an incomplete address shows every field again
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.input.email = email.into();
        if !is_checkable(self.input.email.trim()) {
            self.email_status = EmailStatus::Unknown;
            self.mode = RegistrationMode::Full;
        }
    }

    /// Apply a published email check result
    pub fn apply_email_status(&mut self, status: EmailStatus) {
        self.mode = match status {
            EmailStatus::Exists => RegistrationMode::FollowUp,
            _ => RegistrationMode::Full,
        };
        self.email_status = status;
    }

    fn validate(&self) -> FieldErrors {
        let input = &self.input;
        let mut errors = FieldErrors::new();
        errors.email("email", &input.email);

        let query = input.query.trim();
        if query.is_empty() {
            errors.insert("query", "Query is required");
        } else if query.chars().count() < MIN_QUERY_LEN {
            errors.insert("query", "Query must be at least 5 characters");
        } else if query.chars().count() > MAX_QUERY_LEN {
            errors.insert("query", "Query too long (max 2000 characters)");
        }

        if self.mode == RegistrationMode::Full {
            errors.require("clientfname", &input.clientfname, "First name is required");
            errors.require("clientlname", &input.clientlname, "Last name is required");
            errors.phone("mobile", &input.countrycode, &input.mobile);
        }
        errors
    }

    /// Validate and build the payload for the current mode
    pub fn prepare(&mut self) -> Result<ClientSubmission, FormError> {
        self.phase = self.phase.transition(FormEvent::Submit)?;

        let errors = self.validate();
        if !errors.is_empty() {
            self.phase = self.phase.transition(FormEvent::Invalid)?;
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }

        self.errors = FieldErrors::new();
        self.phase = self.phase.transition(FormEvent::Valid)?;
        Ok(self.submission())
    }

    fn submission(&self) -> ClientSubmission {
        let input = &self.input;
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        let website_source = optional(&input.website_source).unwrap_or_else(|| "default".to_string());

        match self.mode {
            RegistrationMode::FollowUp => ClientSubmission {
                clientfname: None,
                clientlname: None,
                email: input.email.trim().to_string(),
                countrycode: None,
                mobile: None,
                query: input.query.trim().to_string(),
                website_source,
            },
            RegistrationMode::Full => ClientSubmission {
                clientfname: optional(&input.clientfname),
                clientlname: optional(&input.clientlname),
                email: input.email.trim().to_string(),
                countrycode: optional(&input.countrycode),
                mobile: optional(&input.mobile),
                query: input.query.trim().to_string(),
                website_source,
            },
        }
    }

    /// Record the backend's answer and return the banner to show.
    ///
    /// Success resets the form: a follow-up clears only the query, a full
    /// registration clears everything except the website source. Failure
    /// keeps the fields for another attempt.
    pub fn complete(&mut self, result: Result<SubmitOutcome, BackendError>) -> Result<Notice, FormError> {
        match result {
            Ok(_) => {
                self.phase = self.phase.transition(FormEvent::Succeeded)?;
                let message = match self.mode {
                    RegistrationMode::FollowUp => {
                        self.input.query.clear();
                        FOLLOW_UP_RECEIVED
                    }
                    RegistrationMode::Full => {
                        self.input = RegistrationInput {
                            website_source: std::mem::take(&mut self.input.website_source),
                            ..RegistrationInput::default()
                        };
                        self.email_status = EmailStatus::Unknown;
                        REGISTERED
                    }
                };
                self.phase = self.phase.transition(FormEvent::Reset)?;
                Ok(Notice::success(message))
            }
            Err(e) => {
                self.phase = self.phase.transition(FormEvent::Failed)?;
                tracing::warn!(error = %e, "Registration submit failed");
                let notice = Notice::error(e.display_message());
                self.phase = self.phase.transition(FormEvent::Reset)?;
                Ok(notice)
            }
        }
    }

    /// Validate, send through `intake`, and apply the outcome
    pub async fn submit(&mut self, intake: &dyn ClientIntake) -> Result<Notice, FormError> {
        let submission = self.prepare()?;
        let result = intake.submit_client(&submission).await;
        self.complete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::notice::Severity;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeIntake {
        seen: Mutex<Vec<ClientSubmission>>,
        reject: Option<String>,
    }

    impl FakeIntake {
        fn accepting() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reject: None,
            }
        }
    }

    #[async_trait]
    impl ClientIntake for FakeIntake {
        async fn submit_client(&self, submission: &ClientSubmission) -> Result<SubmitOutcome, BackendError> {
            self.seen.lock().unwrap().push(submission.clone());
            match &self.reject {
                Some(message) => Err(BackendError::Rejected {
                    status: 422,
                    message: message.clone(),
                }),
                None => Ok(SubmitOutcome::default()),
            }
        }
    }

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::new("itsupport");
        form.input.clientfname = "Ada".into();
        form.input.clientlname = "Lovelace".into();
        form.set_email("ada@example.com");
        form.input.mobile = "12345678".into();
        form.input.query = "Printer is offline".into();
        form
    }

    #[tokio::test]
    async fn test_full_registration_resets_all_but_source() {
        let intake = FakeIntake::accepting();
        let mut form = filled();

        let notice = form.submit(&intake).await.unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, REGISTERED);

        let sent = intake.seen.lock().unwrap()[0].clone();
        assert_eq!(sent.clientfname.as_deref(), Some("Ada"));
        assert_eq!(sent.countrycode.as_deref(), Some("+45"));
        assert_eq!(sent.website_source, "itsupport");

        assert_eq!(form.input, RegistrationInput {
            website_source: "itsupport".into(),
            ..RegistrationInput::default()
        });
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_follow_up_sends_short_payload_and_clears_query() {
        let intake = FakeIntake::accepting();
        let mut form = filled();
        form.apply_email_status(EmailStatus::Exists);
        assert_eq!(form.mode(), RegistrationMode::FollowUp);

        let notice = form.submit(&intake).await.unwrap();
        assert_eq!(notice.message, FOLLOW_UP_RECEIVED);

        let sent = intake.seen.lock().unwrap()[0].clone();
        assert!(sent.is_follow_up());
        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);

        assert!(form.input.query.is_empty());
        assert_eq!(form.input.clientfname, "Ada");
        assert_eq!(form.input.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_follow_up_skips_name_checks() {
        let intake = FakeIntake::accepting();
        let mut form = RegistrationForm::new("itsupport");
        form.set_email("known@example.com");
        form.apply_email_status(EmailStatus::Exists);
        form.input.query = "Another question".into();
        assert!(form.submit(&intake).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields_and_shows_message() {
        let intake = FakeIntake {
            seen: Mutex::new(Vec::new()),
            reject: Some("body.query: too short".into()),
        };
        let mut form = filled();

        let notice = form.submit(&intake).await.unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "body.query: too short");
        assert_eq!(form.input.query, "Printer is offline");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_call() {
        let intake = FakeIntake::accepting();
        let mut form = filled();
        form.input.query = "hey".into();

        let err = form.submit(&intake).await.unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("query"),
            Some("Query must be at least 5 characters")
        );
        assert!(intake.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_incomplete_email_restores_full_mode() {
        let mut form = filled();
        form.apply_email_status(EmailStatus::Exists);
        form.set_email("ada@");
        assert_eq!(form.mode(), RegistrationMode::Full);
        assert_eq!(form.email_status(), &EmailStatus::Unknown);
    }
}
