//! Theme tokens
//!
//! CSS custom properties derived from a brand configuration, with every
//! default already applied.

use serde::Serialize;

use crate::site::{SiteConfig, SiteKey, DEFAULT_BODY_BG};

/// Visual tokens of a resolved brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub primary: String,
    pub header_bg: String,
    pub header_text: String,
    pub header_height: u32,
    pub logo_width: u32,
    pub logo_height: u32,
    pub sidebar_bg: String,
    pub body_bg: String,
}

impl ThemeTokens {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            primary: config.primary_color.clone(),
            header_bg: config.header_bg().to_string(),
            header_text: config.header_text().to_string(),
            header_height: config.header_height(),
            logo_width: config.logo_width(),
            logo_height: config.logo_height(),
            sidebar_bg: config.sidebar_bg().to_string(),
            body_bg: DEFAULT_BODY_BG.to_string(),
        }
    }

    /// Ordered `(name, value)` pairs of the CSS custom properties
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--primary", self.primary.clone()),
            ("--header-bg", self.header_bg.clone()),
            ("--header-text", self.header_text.clone()),
            ("--header-height", format!("{}px", self.header_height)),
            ("--logo-width", format!("{}px", self.logo_width)),
            ("--logo-height", format!("{}px", self.logo_height)),
            ("--sidebar-bg", self.sidebar_bg.clone()),
            ("--body-bg", self.body_bg.clone()),
        ]
    }

    /// Value of a single custom property
    pub fn variable(&self, name: &str) -> Option<String> {
        self.css_variables()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Global stylesheet fragment for native markup
    ///
    /// The body is padded by the header height so the fixed header never
    /// overlaps page content.
    pub fn style_block(&self, key: SiteKey) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  {}: {};\n", name, sanitize_css_value(&value)));
        }
        css.push_str("}\n");
        css.push_str(&format!(
            "body.theme-{} {{ padding-top: {}px; background: var(--body-bg); }}\n",
            key.as_str(),
            self.header_height
        ));
        css
    }
}

/// Strip characters that could terminate the declaration or the style element
fn sanitize_css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect()
}
