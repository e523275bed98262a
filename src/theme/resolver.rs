//! Theme Resolver
//!
//! Maps the current URL path to the active brand and its tokens. A new
//! [`ResolvedTheme`] is computed for every request; nothing is cached or
//! mutated between navigations.

use std::sync::Arc;

use super::tokens::ThemeTokens;
use crate::site::{SiteConfig, SiteKey, SiteRegistry};

/// Theme resolved for one request path
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    /// Active brand
    pub key: SiteKey,
    /// Whether the path named this brand (false when the fallback was used)
    pub matched: bool,
    /// Configuration of the active brand
    pub config: Arc<SiteConfig>,
    /// Visual tokens with defaults applied
    pub tokens: ThemeTokens,
}

impl ResolvedTheme {
    /// Stylesheet fragment to embed in the page head
    pub fn style_block(&self) -> String {
        self.tokens.style_block(self.key)
    }

    /// Body class selecting the brand stylesheet
    pub fn body_class(&self) -> String {
        format!("theme-{}", self.key.as_str())
    }
}

/// Resolves themes against a shared registry
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    registry: Arc<SiteRegistry>,
}

impl ThemeResolver {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Resolve the theme for a URL path
    ///
    /// Unknown or missing brand segments resolve to [`SiteKey::DEFAULT`].
    pub fn resolve(&self, path: &str) -> ResolvedTheme {
        let segment = first_segment(path);
        let parsed = segment.and_then(|s| s.parse::<SiteKey>().ok());
        let key = parsed.unwrap_or(SiteKey::DEFAULT);

        if parsed.is_none() {
            tracing::debug!(path = %path, "No brand segment, using default theme");
        }

        self.resolve_key(key, parsed.is_some())
    }

    /// Resolve the theme of a known brand
    pub fn resolve_key(&self, key: SiteKey, matched: bool) -> ResolvedTheme {
        let config = self.registry.get(key);
        let tokens = ThemeTokens::from_config(&config);

        ResolvedTheme {
            key,
            matched,
            config,
            tokens,
        }
    }
}

/// First non-empty segment of a path, ignoring any query string
pub fn first_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').find(|s| !s.is_empty())
}
