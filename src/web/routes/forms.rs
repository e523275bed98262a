//! Form Routes
//!
//! HTML form posts that re-render the page with inline errors or a result.
//!
//! - POST /{brand}/contact - Mailto contact form, or the IT-support
//!   registration form which posts on to the backend
//! - POST /{brand}/careers/apply - Job application with the consent gate

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::forms::is_checkable;
use crate::forms::{
    ApplicationForm, ApplicationInput, ContactForm, ContactInput, EmailStatus, FormError,
    RegistrationForm, RegistrationInput,
};
use crate::pages::{careers, uses_registration, FormView};
use crate::router::Page;
use crate::shell::Notice;
use crate::site::SiteKey;
use crate::web::error::{WebError, WebResult};
use crate::web::routes::pages::{not_found, render_page};
use crate::web::state::AppState;

const FIX_FIELDS: &str = "Please fix the highlighted fields.";
const MAIL_READY: &str = "Your email app is opening with the message ready.";
const APPLICATION_READY: &str = "Your email app is opening with the application ready.";

/// Registration post plus the mode the page's email check settled on
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistrationPost {
    #[serde(flatten)]
    input: RegistrationInput,
    mode: Option<String>,
}

/// Decode urlencoded fields into a typed input
fn decode<T: DeserializeOwned>(fields: HashMap<String, String>) -> WebResult<T> {
    let value = serde_json::to_value(fields).map_err(|e| WebError::Validation(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| WebError::Validation(e.to_string()))
}

fn is_ticked(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some(v) if !v.is_empty() && v != "off" && v != "false")
}

/// POST /{brand}/contact
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Path(site): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> WebResult<Response> {
    let Ok(site) = site.parse::<SiteKey>() else {
        return Ok(not_found(&state, &format!("/{}/contact", site), false));
    };

    if uses_registration(site) {
        return register(&state, site, decode(fields)?).await;
    }

    let input: ContactInput = decode(fields)?;
    let mut form = ContactForm::with_input(site, state.contact.inbox.clone(), input);

    match form.submit() {
        Ok(link) => {
            tracing::info!(site = %site, "Contact email composed");
            form.reset()?;
            let view = FormView::Contact(form, Some(link));
            Ok(render_page(&state, site, Page::Contact, false, Some(view), Some(Notice::success(MAIL_READY)))
                .into_response())
        }
        Err(FormError::Invalid(errors)) => {
            tracing::debug!(site = %site, fields = errors.len(), "Contact form rejected");
            let view = FormView::Contact(form, None);
            let page = render_page(&state, site, Page::Contact, false, Some(view), Some(Notice::warning(FIX_FIELDS)));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Registration variant of the contact form
///
/// The page reports which mode its debounced email check settled on. A
/// follow-up claim is confirmed with the backend before the short form is
/// accepted; otherwise the full form is validated without any network call.
async fn register(state: &AppState, site: SiteKey, post: RegistrationPost) -> WebResult<Response> {
    let mut form = RegistrationForm::with_input(post.input);
    if form.input.website_source.trim().is_empty() {
        form.input.website_source = site.to_string();
    }

    let email = form.input.email.trim().to_string();
    if post.mode.as_deref() == Some("follow_up") && is_checkable(&email) {
        let status = match state
            .email_lookup
            .check_email(&email, &form.input.website_source)
            .await
        {
            Ok(check) if check.exists => EmailStatus::Exists,
            Ok(_) => EmailStatus::New,
            Err(e) => {
                tracing::warn!(error = %e, "Email check failed, keeping the page's mode");
                EmailStatus::Exists
            }
        };
        form.apply_email_status(status);
    }

    match form.submit(state.intake.as_ref()).await {
        Ok(notice) => {
            tracing::info!(site = %site, mode = ?form.mode(), severity = ?notice.severity, "Registration handled");
            let view = FormView::Registration(form);
            Ok(render_page(state, site, Page::Contact, false, Some(view), Some(notice)).into_response())
        }
        Err(FormError::Invalid(errors)) => {
            tracing::debug!(site = %site, fields = errors.len(), "Registration rejected");
            let view = FormView::Registration(form);
            let page = render_page(state, site, Page::Contact, false, Some(view), Some(Notice::warning(FIX_FIELDS)));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /{brand}/careers/apply
pub async fn apply(
    State(state): State<Arc<AppState>>,
    Path(site): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> WebResult<Response> {
    let site = match site.parse::<SiteKey>() {
        Ok(site) if state.routes.contains(site, Page::Careers) => site,
        _ => return Ok(not_found(&state, &format!("/{}/careers/apply", site), false)),
    };

    let input: ApplicationInput = decode(fields)?;
    let posting = careers::posting(input.position_id.trim()).cloned();
    let consent = is_ticked(input.consent.as_deref());
    let now = chrono::Utc::now();

    let mut form = ApplicationForm::new(state.contact.careers_inbox.clone(), posting).with_input(input);
    if consent {
        form.accept_consent(now);
    }

    match form.submit(now) {
        Ok(link) => {
            form.reset()?;
            let view = FormView::Application(form, Some(link));
            Ok(render_page(&state, site, Page::Careers, false, Some(view), Some(Notice::success(APPLICATION_READY)))
                .into_response())
        }
        Err(e @ (FormError::ConsentRequired | FormError::Invalid(_))) => {
            tracing::debug!(site = %site, error = %e, "Application rejected");
            let message = match e {
                FormError::ConsentRequired => e.to_string(),
                _ => FIX_FIELDS.to_string(),
            };
            let view = FormView::Application(form, None);
            let page = render_page(&state, site, Page::Careers, false, Some(view), Some(Notice::warning(message)));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
