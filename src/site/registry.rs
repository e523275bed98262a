//! Site Registry
//!
//! Single source of truth mapping a brand key to its configuration.
//! Lookups never fail: unknown segments resolve to [`SiteKey::DEFAULT`].

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use super::types::{IconKey, NavLink, SiteConfig, SiteKey};

const SHARED_LOGO: &str = "/logos/nordisklogo.png";

/// Immutable mapping from brand key to configuration
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: HashMap<SiteKey, Arc<SiteConfig>>,
}

/// Errors raised while assembling a custom registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No configuration for site {0}")]
    MissingSite(SiteKey),

    #[error("Site {0} configured more than once")]
    DuplicateSite(SiteKey),
}

impl SiteRegistry {
    /// The four built-in brands
    pub fn builtin() -> Self {
        let sites = [software(), guidance(), itsupport(), flowsupport()]
            .into_iter()
            .map(|config| (config.key, Arc::new(config)))
            .collect();

        Self { sites }
    }

    /// Build a registry from explicit records
    ///
    /// Every [`SiteKey`] must be covered exactly once so that lookups can
    /// never produce an undefined configuration.
    pub fn from_configs(configs: Vec<SiteConfig>) -> Result<Self, RegistryError> {
        let mut sites = HashMap::new();

        for config in configs {
            let key = config.key;
            if sites.insert(key, Arc::new(config)).is_some() {
                return Err(RegistryError::DuplicateSite(key));
            }
        }

        if let Some(missing) = SiteKey::ALL.iter().find(|k| !sites.contains_key(*k)) {
            return Err(RegistryError::MissingSite(*missing));
        }

        Ok(Self { sites })
    }

    /// Configuration for a known brand
    pub fn get(&self, key: SiteKey) -> Arc<SiteConfig> {
        // from_configs guarantees every key is present
        Arc::clone(&self.sites[&key])
    }

    /// Resolve a raw path segment, falling back to the default brand
    pub fn lookup(&self, segment: &str) -> Arc<SiteConfig> {
        self.get(segment.parse().unwrap_or(SiteKey::DEFAULT))
    }

    /// All configurations in registry order
    pub fn iter(&self) -> impl Iterator<Item = Arc<SiteConfig>> + '_ {
        SiteKey::ALL.iter().map(|key| self.get(*key))
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn software() -> SiteConfig {
    SiteConfig {
        key: SiteKey::Software,
        name: "Digital Software Solutions".to_string(),
        logo: SHARED_LOGO.to_string(),
        primary_color: "#757575".to_string(),
        header_bg_shade: Some("#616161".to_string()),
        header_text_color: Some("#FFFFFF".to_string()),
        sidebar_color: Some("#616161".to_string()),
        header_height: Some(120),
        logo_width: Some(180),
        logo_height: Some(180),
        nav_links: vec![
            NavLink::new("Home", "home", IconKey::Home),
            NavLink::new("About Us", "about", IconKey::Info),
            NavLink::new("Services", "services", IconKey::Devices),
            NavLink::new("Facilities", "facilities", IconKey::Business),
            NavLink::new("Contact", "contact", IconKey::Mail),
        ],
        hero_title: "Innovative Software Solutions for Your Business".to_string(),
        hero_subtitle: "Custom software development, cloud services, and digital transformation."
            .to_string(),
    }
}

fn guidance() -> SiteConfig {
    SiteConfig {
        key: SiteKey::Guidance,
        name: "Student Admission Guidance".to_string(),
        logo: SHARED_LOGO.to_string(),
        primary_color: "#757575".to_string(),
        header_bg_shade: Some("cadetblue".to_string()),
        header_text_color: Some("#FFFFFF".to_string()),
        sidebar_color: Some("cadetblue".to_string()),
        header_height: Some(80),
        logo_width: Some(180),
        logo_height: Some(180),
        nav_links: vec![
            NavLink::new("Home", "home", IconKey::Home),
            NavLink::new("Requirements", "require", IconKey::Checklist),
            NavLink::new("Facilities", "facilities", IconKey::Business),
            NavLink::new("About Us", "about", IconKey::Info),
            NavLink::new("Contact", "contact", IconKey::Mail),
        ],
        hero_title: "Study and Build Your Future in Denmark".to_string(),
        hero_subtitle: "Guidance for admission, visa, and job opportunities.".to_string(),
    }
}

fn itsupport() -> SiteConfig {
    SiteConfig {
        key: SiteKey::ItSupport,
        name: "Where Technology Meets Reliability".to_string(),
        logo: "/logos/nordisk.png".to_string(),
        primary_color: "#3c3c3c".to_string(),
        header_bg_shade: Some("cadetblue".to_string()),
        header_text_color: Some("#FFFFFF".to_string()),
        sidebar_color: Some("white".to_string()),
        header_height: Some(90),
        logo_width: Some(85),
        logo_height: Some(85),
        nav_links: vec![
            NavLink::new("Home", "home", IconKey::Home).top_level(),
            NavLink::new("IT Support", "itservices", IconKey::Computer).top_level(),
            NavLink::new("Software Solutions", "swservices", IconKey::Code).top_level(),
            NavLink::new("Data Engineering", "dataservices", IconKey::Storage).top_level(),
            NavLink::new("Contact", "contact", IconKey::Mail).top_level(),
            NavLink::new("Careers", "careers", IconKey::Career).top_level(),
            NavLink::new("About Us", "about", IconKey::Info).top_level(),
        ],
        hero_title: "Professional IT & Network Support".to_string(),
        hero_subtitle: "Reliable, affordable, and fast tech support for your business."
            .to_string(),
    }
}

fn flowsupport() -> SiteConfig {
    SiteConfig {
        key: SiteKey::FlowSupport,
        name: "Flow & Hygiene Support Services".to_string(),
        logo: SHARED_LOGO.to_string(),
        primary_color: "#0D9488".to_string(),
        header_bg_shade: Some("cadetblue".to_string()),
        header_text_color: Some("#FFFFFF".to_string()),
        sidebar_color: Some("white".to_string()),
        header_height: Some(90),
        logo_width: Some(180),
        logo_height: Some(180),
        nav_links: vec![
            NavLink::new("Home", "home", IconKey::Home),
            NavLink::new("Services", "services", IconKey::Devices),
            NavLink::new("About", "about", IconKey::Info),
            NavLink::new("Contact", "contact", IconKey::Mail),
        ],
        hero_title: "Restaurant & Facility Hygiene Operations".to_string(),
        hero_subtitle: "Professional dishwashing, cleaning, and back-of-house flow support."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_key() {
        let registry = SiteRegistry::builtin();
        for key in SiteKey::ALL {
            assert_eq!(registry.get(key).key, key);
        }
    }

    #[test]
    fn test_lookup_known_segment() {
        let registry = SiteRegistry::builtin();
        let config = registry.lookup("itsupport");
        assert_eq!(config.key, SiteKey::ItSupport);
        assert_eq!(config.name, "Where Technology Meets Reliability");
        assert_eq!(config.nav_links.len(), 7);
    }

    #[test]
    fn test_lookup_unknown_segment_falls_back_to_software() {
        let registry = SiteRegistry::builtin();
        assert_eq!(registry.lookup("bogus").key, SiteKey::Software);
        assert_eq!(registry.lookup("").key, SiteKey::Software);
        assert_eq!(registry.lookup("Software").key, SiteKey::Software);
    }

    #[test]
    fn test_from_configs_requires_every_site() {
        let configs = vec![software(), guidance(), itsupport()];
        assert_eq!(
            SiteRegistry::from_configs(configs).unwrap_err(),
            RegistryError::MissingSite(SiteKey::FlowSupport)
        );
    }

    #[test]
    fn test_from_configs_rejects_duplicates() {
        let configs = vec![software(), software(), guidance(), itsupport(), flowsupport()];
        assert_eq!(
            SiteRegistry::from_configs(configs).unwrap_err(),
            RegistryError::DuplicateSite(SiteKey::Software)
        );
    }

    #[test]
    fn test_iter_preserves_registry_order() {
        let registry = SiteRegistry::builtin();
        let keys: Vec<_> = registry.iter().map(|c| c.key).collect();
        assert_eq!(keys, SiteKey::ALL.to_vec());
    }
}
