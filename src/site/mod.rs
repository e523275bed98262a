//! Site Registry
//!
//! The four co-hosted brands and their static configuration.
//!
//! - **types**: brand keys, configuration records, navigation links
//! - **registry**: key → configuration lookup with a single default brand

mod registry;
mod types;

pub use registry::{RegistryError, SiteRegistry};
pub use types::{
    IconKey, NavLink, SiteConfig, SiteKey, UnknownSite, DEFAULT_BODY_BG, DEFAULT_HEADER_HEIGHT,
    DEFAULT_HEADER_TEXT, DEFAULT_LOGO_SIZE,
};
