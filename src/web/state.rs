//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::backend::{BackendClient, ClientIntake, EmailLookup};
use crate::chat::{ChatBackend, ChatClient, ChatSessions, SessionsConfig};
use crate::config::Config;
use crate::pages::ContactDetails;
use crate::router::RouteTable;
use crate::site::SiteRegistry;
use crate::theme::ThemeResolver;

use super::error::WebError;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Per-request theme resolution over the brand registry
    pub resolver: ThemeResolver,
    /// Concrete routes derived from the registry
    pub routes: Arc<RouteTable>,
    /// Inboxes and numbers shown on the pages
    pub contact: Arc<ContactDetails>,
    /// Email-existence lookups
    pub email_lookup: Arc<dyn EmailLookup>,
    /// Contact registrations
    pub intake: Arc<dyn ClientIntake>,
    /// Remote chat service
    pub chat: Arc<dyn ChatBackend>,
    /// Open chat widget sessions
    pub sessions: Arc<ChatSessions>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state over explicit collaborators
    pub fn new(
        registry: Arc<SiteRegistry>,
        contact: ContactDetails,
        email_lookup: Arc<dyn EmailLookup>,
        intake: Arc<dyn ClientIntake>,
        chat: Arc<dyn ChatBackend>,
        sessions: SessionsConfig,
    ) -> Self {
        let routes = Arc::new(RouteTable::from_registry(&registry));
        Self {
            resolver: ThemeResolver::new(registry),
            routes,
            contact: Arc::new(contact),
            email_lookup,
            intake,
            chat,
            sessions: Arc::new(ChatSessions::new(sessions)),
            start_time: Instant::now(),
        }
    }

    /// Create state with HTTP clients built from configuration
    pub fn from_config(config: &Config) -> Result<Self, WebError> {
        let backend = Arc::new(BackendClient::new(
            config.backend.url.clone(),
            config.backend.timeout(),
        )?);
        let chat = Arc::new(ChatClient::new(&config.chat.url, config.chat.timeout())?);

        tracing::info!(
            backend = %backend.base_url(),
            chat = %chat.endpoint(),
            "Collaborator clients configured"
        );

        Ok(Self::new(
            Arc::new(SiteRegistry::builtin()),
            config.contact.details(),
            backend.clone(),
            backend,
            chat,
            config.chat.sessions(),
        ))
    }

    pub fn registry(&self) -> &SiteRegistry {
        self.resolver.registry()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
