//! # Nordisk Sites
//!
//! One server rendering four co-hosted marketing brands: software, study
//! guidance, IT support and flow/hygiene support. The first path segment
//! selects the brand; every page shares the same navigation shell, themed
//! per request.
//!
//! ## Modules
//!
//! - [`site`]: brand keys and their static configuration
//! - [`theme`]: per-request theme resolution
//! - [`shell`]: header, sidebar, footer, notices and the page document
//! - [`router`]: route table derived from the registry
//! - [`pages`]: page bodies and form components
//! - [`widgets`]: server functions and browser mounting of the interactive parts
//! - [`forms`]: contact, registration and application form logic
//! - [`backend`]: lead-capture backend client
//! - [`chat`]: chat widget sessions and the remote chat relay
//! - [`web`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Features
//!
//! - `ssr` (default): the server, its collaborator clients and rendering
//! - `hydrate`: the browser build that mounts the widgets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nordisk_sites::{Config, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::from_config(&config)?;
//!     nordisk_sites::serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod forms;
pub mod pages;
pub mod router;
pub mod shell;
pub mod site;
pub mod theme;
#[cfg(feature = "ssr")]
pub mod web;
pub mod widgets;

// Re-export top-level types for convenience
pub use site::{IconKey, NavLink, SiteConfig, SiteKey, SiteRegistry};

pub use theme::{ResolvedTheme, ThemeResolver, ThemeTokens};

pub use router::{Page, RouteMatch, RouteTable};

pub use forms::{
    ApplicationForm, ContactForm, EmailStatus, FormError, FormPhase, MailtoLink, RegistrationForm,
};
#[cfg(feature = "ssr")]
pub use forms::EmailCheckDebouncer;

pub use backend::{BackendError, ClientIntake, EmailLookup};
#[cfg(feature = "ssr")]
pub use backend::BackendClient;

pub use chat::{ChatError, ChatSession, WidgetModel};
#[cfg(feature = "ssr")]
pub use chat::{ChatBackend, ChatClient, ChatSessions};

#[cfg(feature = "ssr")]
pub use web::{build_router, serve, AppState, WebError};

#[cfg(feature = "ssr")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

#[cfg(feature = "hydrate")]
pub use widgets::hydrate;
