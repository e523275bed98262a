//! Backend REST client
//!
//! HTTP client for the lead-capture backend: email-existence checks and
//! contact registrations. Single attempt per call, no retries.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::BackendError;
use super::normalize::normalize_error_text;
use super::service::{ClientIntake, EmailLookup};
use super::types::{ClientSubmission, EmailCheck, SubmitOutcome};

/// Lead-capture backend client
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BackendError::Config("backend base URL is empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend answers at all
    pub async fn health_check(&self) -> Result<(), BackendError> {
        let url = format!("{}/", self.base_url);
        self.client
            .get(&url)
            .send()
            .await
            .map_err(BackendError::from_transport)?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(BackendError::Request);
        }

        let text = response.text().await.unwrap_or_default();
        Err(BackendError::Rejected {
            status: status.as_u16(),
            message: normalize_error_text(&text),
        })
    }
}

#[async_trait]
impl EmailLookup for BackendClient {
    async fn check_email(&self, email: &str, website_source: &str) -> Result<EmailCheck, BackendError> {
        let url = format!(
            "{}/api/check-email/{}",
            self.base_url,
            urlencoding::encode(email)
        );

        tracing::debug!(%url, website_source, "Checking email");

        let mut request = self.client.get(&url);
        if !website_source.is_empty() {
            request = request.query(&[("website_source", website_source)]);
        }

        let response = request.send().await.map_err(BackendError::from_transport)?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ClientIntake for BackendClient {
    async fn submit_client(&self, submission: &ClientSubmission) -> Result<SubmitOutcome, BackendError> {
        let url = format!("{}/api/client", self.base_url);

        tracing::debug!(
            %url,
            website_source = %submission.website_source,
            follow_up = submission.is_follow_up(),
            "Submitting client"
        );

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::decode(response).await
    }
}
