//! Form lifecycle
//!
//! ```text
//! Editing --Submit--> Validating --Valid--> Submitting --Succeeded--> Success
//!                          |                     |                        |
//!                       Invalid               Failed                    Reset
//!                          v                     v                        v
//!                      Rejected --Edit-->     Error --Reset-->         Editing
//! ```

use serde::Serialize;

use super::error::FormError;

/// Phase of a single form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Rejected,
    Success,
    Error,
}

/// Input driving a phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Valid,
    Invalid,
    Succeeded,
    Failed,
    Edit,
    Reset,
}

impl FormPhase {
    /// Apply an event, rejecting anything the lifecycle does not allow
    pub fn transition(self, event: FormEvent) -> Result<FormPhase, FormError> {
        use FormEvent::*;
        use FormPhase::*;

        match (self, event) {
            (Editing, Submit) => Ok(Validating),
            (Validating, Valid) => Ok(Submitting),
            (Validating, Invalid) => Ok(Rejected),
            (Submitting, Succeeded) => Ok(Success),
            (Submitting, Failed) => Ok(Error),
            (Rejected, Edit) | (Editing, Edit) => Ok(Editing),
            (Success, Reset) | (Error, Reset) | (Rejected, Reset) => Ok(Editing),
            (from, event) => Err(FormError::Transition { from, event }),
        }
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }
}
