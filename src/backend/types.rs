//! Wire types exchanged with the lead-capture backend

use serde::{Deserialize, Serialize};

/// Result of an email-existence lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCheck {
    #[serde(default)]
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload of `POST /api/client`
///
/// A follow-up from a known email carries only `email`, `query` and
/// `website_source`; the optional fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientfname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientlname: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countrycode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub query: String,
    #[serde(default = "default_source")]
    pub website_source: String,
}

fn default_source() -> String {
    "default".to_string()
}

impl ClientSubmission {
    /// Whether this carries only the follow-up fields
    pub fn is_follow_up(&self) -> bool {
        self.clientfname.is_none()
            && self.clientlname.is_none()
            && self.countrycode.is_none()
            && self.mobile.is_none()
    }
}

/// Successful submission response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new_client: Option<bool>,
}
