//! Request and response bodies for the JSON endpoints

use serde::{Deserialize, Serialize};

use crate::router::RouteEntry;
use crate::site::{IconKey, SiteKey};
use crate::theme::{ResolvedTheme, ThemeTokens};

/// Query of the page routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` expands the sidebar
    pub menu: Option<String>,
    /// Careers posting to preselect
    pub position: Option<String>,
}

impl PageQuery {
    pub fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckEmailQuery {
    pub website_source: Option<String>,
}

/// Body of the chat endpoints
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Navigation link with its absolute path
#[derive(Debug, Serialize)]
pub struct NavLinkDto {
    pub label: String,
    pub path: String,
    pub icon: IconKey,
}

/// Resolved theme as JSON
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub key: SiteKey,
    pub matched: bool,
    pub name: String,
    pub logo: String,
    pub tokens: ThemeTokens,
    pub nav_links: Vec<NavLinkDto>,
}

impl From<&ResolvedTheme> for ThemeResponse {
    fn from(theme: &ResolvedTheme) -> Self {
        Self {
            key: theme.key,
            matched: theme.matched,
            name: theme.config.name.clone(),
            logo: theme.config.logo.clone(),
            tokens: theme.tokens.clone(),
            nav_links: theme
                .config
                .nav_links
                .iter()
                .map(|link| NavLinkDto {
                    label: link.label.clone(),
                    path: theme.key.path(&link.href),
                    icon: link.icon,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub root_redirect: String,
    pub routes: Vec<RouteEntry>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sites: usize,
    pub routes: usize,
    pub chat_sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
