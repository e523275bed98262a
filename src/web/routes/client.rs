//! Backend Proxy Routes
//!
//! JSON endpoints the registration page calls directly.
//!
//! - GET /api/check-email/{email}?website_source= - Email-existence check
//! - POST /api/client - Validated registration or follow-up

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::backend::{ClientSubmission, EmailCheck, SubmitOutcome};
use crate::forms::{EmailStatus, RegistrationForm, RegistrationInput};
use crate::web::dto::CheckEmailQuery;
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;

/// GET /api/check-email/{email}
pub async fn check_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Query(query): Query<CheckEmailQuery>,
) -> WebResult<Json<EmailCheck>> {
    let email = email.trim();
    if email.is_empty() {
        return Err(WebError::Validation("Email is required".to_string()));
    }

    let source = query
        .website_source
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "default".to_string());

    let check = state.email_lookup.check_email(email, &source).await?;
    tracing::debug!(source = %source, exists = check.exists, "Email checked");
    Ok(Json(check))
}

/// POST /api/client
///
/// A body without name, country code or mobile is treated as a follow-up
/// and only needs a valid email and query.
pub async fn submit_client(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ClientSubmission>,
) -> WebResult<(StatusCode, Json<SubmitOutcome>)> {
    let follow_up = submission.is_follow_up();
    let mut form = RegistrationForm::with_input(RegistrationInput {
        clientfname: submission.clientfname.unwrap_or_default(),
        clientlname: submission.clientlname.unwrap_or_default(),
        email: submission.email,
        countrycode: submission.countrycode.unwrap_or_default(),
        mobile: submission.mobile.unwrap_or_default(),
        query: submission.query,
        website_source: submission.website_source,
    });
    if follow_up {
        form.apply_email_status(EmailStatus::Exists);
    }

    let prepared = form.prepare()?;
    let outcome = state.intake.submit_client(&prepared).await?;

    tracing::info!(
        source = %prepared.website_source,
        follow_up,
        new_client = ?outcome.is_new_client,
        "Client submission accepted"
    );
    Ok((StatusCode::CREATED, Json(outcome)))
}
