//! Careers application form
//!
//! Submission stays blocked until the visitor accepts the data-processing
//! consent. The acceptance time is written into the generated email and
//! nowhere else.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::mailto::MailtoLink;
use super::state::{FormEvent, FormPhase};
use super::validate::FieldErrors;

/// Notice period assumed when the applicant leaves it blank (days)
pub const DEFAULT_NOTICE_DAYS: i64 = 30;

/// An open position listed on the careers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub job_type: &'static str,
    pub summary: &'static str,
}

/// Raw application fields as posted by the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationInput {
    pub position_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub current_company: String,
    pub current_position: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
    pub salary_expectation: String,
    pub notice_period: String,
    pub referral_source: String,
    /// Checkbox value; present when ticked
    pub consent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApplicationForm {
    inbox: String,
    posting: Option<JobPosting>,
    pub input: ApplicationInput,
    consent_at: Option<DateTime<Utc>>,
    phase: FormPhase,
    errors: FieldErrors,
}

impl ApplicationForm {
    pub fn new(inbox: impl Into<String>, posting: Option<JobPosting>) -> Self {
        Self {
            inbox: inbox.into(),
            posting,
            input: ApplicationInput::default(),
            consent_at: None,
            phase: FormPhase::Editing,
            errors: FieldErrors::new(),
        }
    }

    pub fn with_input(mut self, input: ApplicationInput) -> Self {
        self.input = input;
        self
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn posting(&self) -> Option<&JobPosting> {
        self.posting.as_ref()
    }

    /// Record the consent timestamp; the submit control unlocks
    pub fn accept_consent(&mut self, now: DateTime<Utc>) {
        self.consent_at = Some(now);
    }

    pub fn withdraw_consent(&mut self) {
        self.consent_at = None;
    }

    pub fn consent_at(&self) -> Option<DateTime<Utc>> {
        self.consent_at
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.consent_at.is_some() && !self.phase.is_busy()
    }

    fn notice_days(&self) -> Option<i64> {
        let raw = self.input.notice_period.trim();
        if raw.is_empty() {
            return Some(DEFAULT_NOTICE_DAYS);
        }
        raw.parse::<i64>().ok().filter(|days| (0..=365).contains(days))
    }

    fn validate(&self) -> FieldErrors {
        let input = &self.input;
        let mut errors = FieldErrors::new();
        errors.require("full_name", &input.full_name, "Full name is required");
        errors.email("email", &input.email);
        errors.require("phone", &input.phone, "Phone number is required");
        errors.require("cover_letter", &input.cover_letter, "Cover letter is required");
        if self.notice_days().is_none() {
            errors.insert("notice_period", "Notice period must be a number of days");
        }
        errors
    }

    /// Validate and compose the application email
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<MailtoLink, FormError> {
        self.phase = self.phase.transition(FormEvent::Submit)?;

        let Some(consent_at) = self.consent_at else {
            self.phase = self.phase.transition(FormEvent::Invalid)?;
            self.errors = FieldErrors::new();
            self.errors.insert("consent", "You must agree to the terms");
            return Err(FormError::ConsentRequired);
        };

        let errors = self.validate();
        if !errors.is_empty() {
            self.phase = self.phase.transition(FormEvent::Invalid)?;
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }

        self.errors = FieldErrors::new();
        self.phase = self.phase.transition(FormEvent::Valid)?;
        let link = self.compose(now, consent_at);
        self.phase = self.phase.transition(FormEvent::Succeeded)?;

        tracing::info!(
            position = self.posting.as_ref().map(|p| p.id).unwrap_or("general"),
            "Application email composed"
        );
        Ok(link)
    }

    pub fn reset(&mut self) -> Result<(), FormError> {
        let cleared = self.phase == FormPhase::Success;
        self.phase = self.phase.transition(FormEvent::Reset)?;
        if cleared {
            self.input = ApplicationInput::default();
            self.consent_at = None;
        }
        Ok(())
    }

    fn compose(&self, now: DateTime<Utc>, consent_at: DateTime<Utc>) -> MailtoLink {
        let input = &self.input;
        let notice = self.notice_days().unwrap_or(DEFAULT_NOTICE_DAYS);
        let available_from = now + Duration::days(notice);

        let title = self.posting.as_ref().map(|p| p.title).unwrap_or("General Application");
        let id = self.posting.as_ref().map(|p| p.id).unwrap_or("N/A");
        let department = self.posting.as_ref().map(|p| p.department).unwrap_or("Various");
        let location = self.posting.as_ref().map(|p| p.location).unwrap_or("Multiple");
        let job_type = self.posting.as_ref().map(|p| p.job_type).unwrap_or("Full-time");

        let or = |value: &str, fallback: &str| {
            let value = value.trim();
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        let full_name = input.full_name.trim();
        let subject = format!("Job Application: {} - {}", title, full_name);
        let body = format!(
            "APPLICATION FOR: {title}\n\
             POSITION ID: {id}\n\
             DEPARTMENT: {department}\n\
             LOCATION: {location}\n\
             JOB TYPE: {job_type}\n\
             \n\
             --- PERSONAL INFORMATION ---\n\
             Full Name: {full_name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             How did you hear about us?: {referral}\n\
             \n\
             --- PROFESSIONAL INFORMATION ---\n\
             Current Company: {company}\n\
             Current Position: {position}\n\
             LinkedIn Profile: {linkedin}\n\
             Portfolio/Website: {portfolio}\n\
             \n\
             --- ADDITIONAL INFORMATION ---\n\
             Salary Expectation: {salary}\n\
             Notice Period: {notice} days\n\
             Available From: {available}\n\
             \n\
             --- COVER LETTER ---\n\
             {cover}\n\
             \n\
             --- GDPR CONSENT ---\n\
             Accepted on: {consent}\n\
             Purpose: Recruitment and hiring process\n\
             \n\
             --- APPLICATION DETAILS ---\n\
             Application Date: {date}\n\
             Application Time: {time}\n\
             \n\
             IMPORTANT: Please attach your resume/CV to this email.\n\
             \n\
             Best regards,\n\
             {full_name}\n\
             {email}\n\
             {phone}",
            email = input.email.trim(),
            phone = input.phone.trim(),
            referral = or(&input.referral_source, "Not specified"),
            company = or(&input.current_company, "Not specified"),
            position = or(&input.current_position, "Not specified"),
            linkedin = or(&input.linkedin_url, "Not provided"),
            portfolio = or(&input.portfolio_url, "Not provided"),
            salary = or(&input.salary_expectation, "Negotiable"),
            available = available_from.format("%d/%m/%Y"),
            cover = input.cover_letter.trim(),
            consent = consent_at.to_rfc3339(),
            date = now.format("%d/%m/%Y"),
            time = now.format("%H:%M"),
        );

        MailtoLink::new(self.inbox.clone(), subject, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn posting() -> JobPosting {
        JobPosting {
            id: "IT-001",
            title: "IT Support Technician",
            department: "Support",
            location: "Copenhagen",
            job_type: "Full-time",
            summary: "",
        }
    }

    fn filled() -> ApplicationForm {
        ApplicationForm::new("careers@example.com", Some(posting())).with_input(ApplicationInput {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+45 12345678".into(),
            cover_letter: "I like engines.".into(),
            ..ApplicationInput::default()
        })
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_consent_gate_blocks_submit() {
        let mut form = filled();
        assert!(!form.can_submit());
        assert_eq!(form.submit(now()).unwrap_err(), FormError::ConsentRequired);
        assert_eq!(form.phase(), FormPhase::Rejected);
        assert!(form.errors().get("consent").is_some());
    }

    #[test]
    fn test_consent_timestamp_in_body() {
        let mut form = filled();
        let accepted = Utc.with_ymd_and_hms(2024, 3, 1, 9, 29, 0).unwrap();
        form.accept_consent(accepted);
        assert!(form.can_submit());

        let link = form.submit(now()).unwrap();
        assert!(link.body.contains(&format!("Accepted on: {}", accepted.to_rfc3339())));
        assert_eq!(link.subject, "Job Application: IT Support Technician - Ada Lovelace");
        assert_eq!(link.to, "careers@example.com");
    }

    #[test]
    fn test_available_from_uses_notice_period() {
        let mut form = filled();
        form.accept_consent(now());
        let link = form.submit(now()).unwrap();
        assert!(link.body.contains("Notice Period: 30 days"));
        assert!(link.body.contains("Available From: 31/03/2024"));

        let mut form = filled();
        form.input.notice_period = "14".into();
        form.accept_consent(now());
        let link = form.submit(now()).unwrap();
        assert!(link.body.contains("Available From: 15/03/2024"));
    }

    #[test]
    fn test_required_fields() {
        let mut form = ApplicationForm::new("careers@example.com", None);
        form.accept_consent(now());
        let err = form.submit(now()).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get("full_name"), Some("Full name is required"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
        assert_eq!(errors.get("cover_letter"), Some("Cover letter is required"));
    }

    #[test]
    fn test_general_application_defaults() {
        let mut form = ApplicationForm::new("careers@example.com", None).with_input(filled().input);
        form.accept_consent(now());
        let link = form.submit(now()).unwrap();
        assert!(link.body.starts_with("APPLICATION FOR: General Application\nPOSITION ID: N/A"));
        assert!(link.body.contains("Salary Expectation: Negotiable"));
    }

    #[test]
    fn test_reset_clears_consent() {
        let mut form = filled();
        form.accept_consent(now());
        form.submit(now()).unwrap();
        form.reset().unwrap();
        assert!(form.consent_at().is_none());
        assert!(form.input.full_name.is_empty());
    }
}
