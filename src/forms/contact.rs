//! Contact form
//!
//! Collects a visitor's message and composes a `mailto:` link to the brand's
//! inbox. Validation runs before anything leaves the form.

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::mailto::MailtoLink;
use super::state::{FormEvent, FormPhase};
use super::validate::FieldErrors;
use crate::site::SiteKey;

/// Raw contact form fields as posted by the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
    pub category: String,
    pub countrycode: String,
    pub phone: String,
}

/// A contact form bound to one brand's inbox
#[derive(Debug, Clone)]
pub struct ContactForm {
    site: SiteKey,
    inbox: String,
    pub input: ContactInput,
    phase: FormPhase,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new(site: SiteKey, inbox: impl Into<String>) -> Self {
        Self {
            site,
            inbox: inbox.into(),
            input: ContactInput {
                countrycode: "+45".to_string(),
                ..ContactInput::default()
            },
            phase: FormPhase::Editing,
            errors: FieldErrors::new(),
        }
    }

    /// Form pre-filled from a posted payload
    pub fn with_input(site: SiteKey, inbox: impl Into<String>, input: ContactInput) -> Self {
        let mut form = Self::new(site, inbox);
        form.input = input;
        form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn validate(&self) -> FieldErrors {
        let input = &self.input;
        let mut errors = FieldErrors::new();
        errors.require("name", &input.name, "Name is required");
        errors.email("email", &input.email);
        errors.require("message", &input.message, "Message is required");
        errors.phone("phone", &input.countrycode, &input.phone);
        errors
    }

    /// Validate and compose the email.
    ///
    /// On rejection the form holds the field errors and stays editable.
    pub fn submit(&mut self) -> Result<MailtoLink, FormError> {
        self.phase = self.phase.transition(FormEvent::Submit)?;

        let errors = self.validate();
        if !errors.is_empty() {
            self.phase = self.phase.transition(FormEvent::Invalid)?;
            self.errors = errors.clone();
            tracing::debug!(site = %self.site, fields = errors.len(), "Contact form rejected");
            return Err(FormError::Invalid(errors));
        }

        self.errors = FieldErrors::new();
        self.phase = self.phase.transition(FormEvent::Valid)?;
        let link = self.compose();
        self.phase = self.phase.transition(FormEvent::Succeeded)?;

        tracing::info!(site = %self.site, to = %link.to, "Contact email composed");
        Ok(link)
    }

    /// Return to editing; fields are cleared after a success
    pub fn reset(&mut self) -> Result<(), FormError> {
        let cleared = self.phase == FormPhase::Success;
        self.phase = self.phase.transition(FormEvent::Reset)?;
        if cleared {
            self.input = ContactInput {
                countrycode: self.input.countrycode.clone(),
                ..ContactInput::default()
            };
        }
        Ok(())
    }

    fn compose(&self) -> MailtoLink {
        let input = &self.input;
        let name = input.name.trim();
        let category = input.category.trim();

        let subject = if category.is_empty() {
            format!("Contact request from {}", name)
        } else {
            format!("{} inquiry from {}", category, name)
        };

        let mut body = format!("Name: {}\nEmail: {}\n", name, input.email.trim());
        if !input.phone.trim().is_empty() {
            body.push_str(&format!("Phone: {} {}\n", input.countrycode.trim(), input.phone.trim()));
        }
        if !category.is_empty() {
            body.push_str(&format!("Category: {}\n", category));
        }
        body.push_str(&format!("Website: {}\n\n{}", self.site, input.message.trim()));

        MailtoLink::new(self.inbox.clone(), subject, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm::with_input(
            SiteKey::Guidance,
            "guidance@example.com",
            ContactInput {
                name: name.into(),
                email: email.into(),
                message: message.into(),
                countrycode: "+45".into(),
                ..ContactInput::default()
            },
        )
    }

    #[test]
    fn test_body_contains_fields_verbatim() {
        let mut form = form("A B", "a@b.com", "hello");
        let link = form.submit().unwrap();

        assert!(link.body.contains("A B"));
        assert!(link.body.contains("a@b.com"));
        assert!(link.body.contains("hello"));
        assert_eq!(urlencoding::decode(&link.encoded_subject()).unwrap(), link.subject);
        assert_eq!(urlencoding::decode(&link.encoded_body()).unwrap(), link.body);
        assert_eq!(form.phase(), FormPhase::Success);
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut form = form("A B", "a@b.com", "   ");
        let err = form.submit().unwrap_err();

        assert_eq!(err.field_errors().unwrap().get("message"), Some("Message is required"));
        assert_eq!(form.phase(), FormPhase::Rejected);
        assert_eq!(form.errors().get("message"), Some("Message is required"));
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let mut form = form("A B", "a@b.com", "hello");
        form.input.phone = "123".into();
        let err = form.submit().unwrap_err();
        assert!(err.field_errors().unwrap().get("phone").is_some());
    }

    #[test]
    fn test_category_in_subject() {
        let mut form = form("A B", "a@b.com", "hello");
        form.input.category = "Visa".into();
        let link = form.submit().unwrap();
        assert_eq!(link.subject, "Visa inquiry from A B");
        assert!(link.body.contains("Category: Visa"));
    }

    #[test]
    fn test_reset_after_success_clears_fields() {
        let mut form = form("A B", "a@b.com", "hello");
        form.submit().unwrap();
        form.reset().unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.input.message.is_empty());
        assert_eq!(form.input.countrycode, "+45");
    }

    #[test]
    fn test_resubmit_after_rejection_requires_edit() {
        let mut form = form("", "a@b.com", "hello");
        assert!(form.submit().is_err());
        assert!(matches!(form.submit(), Err(FormError::Transition { .. })));

        form.reset().unwrap();
        form.input.name = "A B".into();
        assert!(form.submit().is_ok());
    }
}
