//! Contact and Application Forms
//!
//! Each form is a small state machine over [`FormPhase`]. Forms either compose
//! a `mailto:` link ([`ContactForm`], [`ApplicationForm`]) or post to the
//! lead-capture backend ([`RegistrationForm`]).

pub mod apply;
pub mod contact;
#[cfg(feature = "ssr")]
pub mod debounce;
pub mod email_check;
mod error;
pub mod mailto;
pub mod registration;
pub mod state;
pub mod validate;

pub use apply::{ApplicationForm, ApplicationInput, JobPosting};
pub use contact::{ContactForm, ContactInput};
#[cfg(feature = "ssr")]
pub use debounce::EmailCheckDebouncer;
pub use email_check::{is_checkable, EmailStatus, DEBOUNCE_WINDOW};
pub use error::FormError;
pub use mailto::MailtoLink;
pub use registration::{RegistrationForm, RegistrationInput, RegistrationMode};
pub use state::{FormEvent, FormPhase};
pub use validate::FieldErrors;
