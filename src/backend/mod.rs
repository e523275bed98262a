//! Lead-capture backend integration
//!
//! The backend owns client records and notification emails. This crate only
//! sees its HTTP interface:
//!
//! - `GET /api/check-email/{email}?website_source=`
//! - `POST /api/client`

#[cfg(feature = "ssr")]
mod client;
mod error;
mod normalize;
mod service;
mod types;

#[cfg(feature = "ssr")]
pub use client::BackendClient;
pub use service::{ClientIntake, EmailLookup};
pub use error::BackendError;
pub use normalize::{normalize_error_body, normalize_error_text, GENERIC_ERROR, NETWORK_ERROR};
pub use types::{ClientSubmission, EmailCheck, SubmitOutcome};
