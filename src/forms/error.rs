//! Form error types

use thiserror::Error;

use super::state::{FormEvent, FormPhase};
use super::validate::FieldErrors;

/// Errors raised while driving a form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Event not accepted in the current phase
    #[error("Illegal form transition: {event:?} while {from:?}")]
    Transition { from: FormPhase, event: FormEvent },

    /// One or more fields failed client-side checks
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// Submission attempted before the consent box was ticked
    #[error("You must accept the GDPR agreement to apply.")]
    ConsentRequired,
}

impl FormError {
    /// Field errors, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
