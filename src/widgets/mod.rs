//! Interactive widgets
//!
//! Pages are rendered on the server. The browser build mounts the chat
//! widget, the registration email check and the mailto result over their
//! server-rendered placeholders, and talks to the server functions in
//! [`api`].

pub mod api;

#[cfg(feature = "hydrate")]
mod mount;

#[cfg(feature = "hydrate")]
pub use mount::hydrate;

/// Prefix the server functions are registered under
pub const SERVER_FN_PREFIX: &str = "/fn";

pub const CHAT_ROOT: &str = "chat-root";
pub const REGISTRATION_ROOT: &str = "registration-root";
pub const MAILTO_ROOT: &str = "mailto-root";
pub const CONSENT_ROOT: &str = "consent-root";

/// JSON carried in a mount root's `data-props`
pub fn props_json<T: serde::Serialize>(props: &T) -> String {
    match serde_json::to_string(props) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Could not encode widget props");
            String::new()
        }
    }
}
