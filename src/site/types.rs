//! Site configuration types
//!
//! Defines the brand key, the per-brand configuration record, and the
//! navigation entries rendered by the sidebar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default header height when a brand does not specify one (px)
pub const DEFAULT_HEADER_HEIGHT: u32 = 64;

/// Default logo edge length when a brand does not specify one (px)
pub const DEFAULT_LOGO_SIZE: u32 = 80;

/// Default header text color
pub const DEFAULT_HEADER_TEXT: &str = "#fff";

/// Page background shared by all brands
pub const DEFAULT_BODY_BG: &str = "#f7f7f7";

/// Identifies one of the co-hosted brands.
///
/// The serialized form doubles as the URL path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKey {
    Software,
    Guidance,
    ItSupport,
    FlowSupport,
}

impl SiteKey {
    /// Every brand, in registry order
    pub const ALL: [SiteKey; 4] = [
        SiteKey::Software,
        SiteKey::Guidance,
        SiteKey::ItSupport,
        SiteKey::FlowSupport,
    ];

    /// Brand used whenever a path segment names no known brand
    pub const DEFAULT: SiteKey = SiteKey::Software;

    /// URL path segment for this brand
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKey::Software => "software",
            SiteKey::Guidance => "guidance",
            SiteKey::ItSupport => "itsupport",
            SiteKey::FlowSupport => "flowsupport",
        }
    }

    /// Root-relative path of a sub-page of this brand
    pub fn path(&self, href: &str) -> String {
        format!("/{}/{}", self.as_str(), href)
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteKey {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "software" => Ok(SiteKey::Software),
            "guidance" => Ok(SiteKey::Guidance),
            "itsupport" => Ok(SiteKey::ItSupport),
            "flowsupport" => Ok(SiteKey::FlowSupport),
            other => Err(UnknownSite(other.to_string())),
        }
    }
}

/// Returned when a string names no known brand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown site: {0:?}")]
pub struct UnknownSite(pub String);

/// Icon shown next to a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKey {
    Home,
    Info,
    Computer,
    Code,
    Mail,
    Devices,
    Checklist,
    Business,
    Storage,
    Career,
    /// Any icon name this build does not know
    #[serde(other)]
    Unknown,
}

impl FromStr for IconKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Home" => IconKey::Home,
            "Info" => IconKey::Info,
            "Computer" => IconKey::Computer,
            "Code" => IconKey::Code,
            "Mail" => IconKey::Mail,
            "Devices" => IconKey::Devices,
            "Checklist" => IconKey::Checklist,
            "Business" => IconKey::Business,
            "Storage" => IconKey::Storage,
            "Career" => IconKey::Career,
            _ => IconKey::Unknown,
        })
    }
}

/// One entry of a brand's sidebar navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display text
    pub label: String,
    /// Path segment relative to the brand prefix (e.g. "about")
    pub href: String,
    /// Icon key
    pub icon: IconKey,
    /// Shown in the top-level menu as well as the sidebar
    #[serde(default)]
    pub top_level: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>, icon: IconKey) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon,
            top_level: false,
        }
    }

    pub fn top_level(mut self) -> Self {
        self.top_level = true;
        self
    }
}

/// Static configuration of a single brand
///
/// Records are built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub key: SiteKey,
    pub name: String,
    pub logo: String,
    pub primary_color: String,
    #[serde(default)]
    pub header_bg_shade: Option<String>,
    #[serde(default)]
    pub header_text_color: Option<String>,
    #[serde(default)]
    pub sidebar_color: Option<String>,
    #[serde(default)]
    pub header_height: Option<u32>,
    #[serde(default)]
    pub logo_width: Option<u32>,
    #[serde(default)]
    pub logo_height: Option<u32>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
}

impl SiteConfig {
    /// Header height with the default applied
    pub fn header_height(&self) -> u32 {
        self.header_height.unwrap_or(DEFAULT_HEADER_HEIGHT)
    }

    /// Logo width with the default applied
    pub fn logo_width(&self) -> u32 {
        self.logo_width.unwrap_or(DEFAULT_LOGO_SIZE)
    }

    /// Logo height with the default applied
    pub fn logo_height(&self) -> u32 {
        self.logo_height.unwrap_or(DEFAULT_LOGO_SIZE)
    }

    /// Header background, falling back to the primary color
    pub fn header_bg(&self) -> &str {
        self.header_bg_shade.as_deref().unwrap_or(&self.primary_color)
    }

    /// Header text color, falling back to white
    pub fn header_text(&self) -> &str {
        self.header_text_color.as_deref().unwrap_or(DEFAULT_HEADER_TEXT)
    }

    /// Sidebar background, falling back to the primary color
    pub fn sidebar_bg(&self) -> &str {
        self.sidebar_color.as_deref().unwrap_or(&self.primary_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_key_round_trips_through_path_segment() {
        for key in SiteKey::ALL {
            assert_eq!(key.as_str().parse::<SiteKey>().unwrap(), key);
        }
        assert!("ITSUPPORT".parse::<SiteKey>().is_err());
        assert!("".parse::<SiteKey>().is_err());
    }

    #[test]
    fn test_site_key_serializes_as_segment() {
        let json = serde_json::to_string(&SiteKey::FlowSupport).unwrap();
        assert_eq!(json, "\"flowsupport\"");
    }

    #[test]
    fn test_unknown_icon_deserializes_to_fallback() {
        let link: NavLink =
            serde_json::from_str(r#"{"label":"X","href":"x","icon":"Rocket"}"#).unwrap();
        assert_eq!(link.icon, IconKey::Unknown);
        assert_eq!("Rocket".parse::<IconKey>().unwrap(), IconKey::Unknown);
    }

    #[test]
    fn test_defaults_apply_when_fields_absent() {
        let config = SiteConfig {
            key: SiteKey::Software,
            name: "Test".to_string(),
            logo: "/logo.png".to_string(),
            primary_color: "#123456".to_string(),
            header_bg_shade: None,
            header_text_color: None,
            sidebar_color: None,
            header_height: None,
            logo_width: None,
            logo_height: None,
            nav_links: Vec::new(),
            hero_title: String::new(),
            hero_subtitle: String::new(),
        };

        assert_eq!(config.header_height(), 64);
        assert_eq!(config.logo_width(), 80);
        assert_eq!(config.logo_height(), 80);
        assert_eq!(config.header_bg(), "#123456");
        assert_eq!(config.header_text(), "#fff");
        assert_eq!(config.sidebar_bg(), "#123456");
    }
}
