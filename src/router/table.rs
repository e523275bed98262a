//! Route Table
//!
//! Concrete paths are derived from the registry's brand list plus a fixed
//! per-brand page set, so adding a brand cannot silently omit a route.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::site::{SiteKey, SiteRegistry};

/// Pages every brand serves regardless of its navigation
pub const BASE_PAGES: [Page; 4] = [Page::Home, Page::About, Page::Services, Page::Contact];

/// A page component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
    Facilities,
    Requirements,
    ItServices,
    SwServices,
    DataServices,
    Careers,
    WebDevelop,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Contact,
        Page::Facilities,
        Page::Requirements,
        Page::ItServices,
        Page::SwServices,
        Page::DataServices,
        Page::Careers,
        Page::WebDevelop,
    ];

    /// Path segment of the page below the brand prefix
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
            Page::Facilities => "facilities",
            Page::Requirements => "require",
            Page::ItServices => "itservices",
            Page::SwServices => "swservices",
            Page::DataServices => "dataservices",
            Page::Careers => "careers",
            Page::WebDevelop => "webdevelop",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "home" => Page::Home,
            "about" => Page::About,
            "services" => Page::Services,
            "contact" => Page::Contact,
            "facilities" => Page::Facilities,
            "require" => Page::Requirements,
            "itservices" => Page::ItServices,
            "swservices" => Page::SwServices,
            "dataservices" => Page::DataServices,
            "careers" => Page::Careers,
            "webdevelop" => Page::WebDevelop,
            _ => return Err(()),
        })
    }
}

/// Outcome of matching a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Page { site: SiteKey, page: Page },
    Redirect(String),
    NotFound,
}

/// One concrete route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub site: SiteKey,
    pub page: Page,
}

/// Static set of routes for all brands
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: BTreeSet<(SiteKey, Page)>,
    default_site: SiteKey,
}

impl RouteTable {
    /// Derive the table from the registry
    ///
    /// Each brand gets [`BASE_PAGES`] plus every navigation link whose href
    /// names a known page. The software brand also keeps its web development
    /// landing page.
    pub fn from_registry(registry: &SiteRegistry) -> Self {
        let mut routes = BTreeSet::new();

        for config in registry.iter() {
            for page in BASE_PAGES {
                routes.insert((config.key, page));
            }

            for link in &config.nav_links {
                match link.href.parse::<Page>() {
                    Ok(page) => {
                        routes.insert((config.key, page));
                    }
                    Err(()) => {
                        tracing::warn!(
                            site = %config.key,
                            href = %link.href,
                            "Navigation link names no known page"
                        );
                    }
                }
            }
        }

        routes.insert((SiteKey::Software, Page::WebDevelop));

        Self {
            routes,
            default_site: SiteKey::DEFAULT,
        }
    }

    /// Path the root redirects to
    pub fn root_redirect(&self) -> String {
        self.default_site.path(Page::Home.slug())
    }

    /// Whether a brand serves a page
    pub fn contains(&self, site: SiteKey, page: Page) -> bool {
        self.routes.contains(&(site, page))
    }

    /// Match a request path (query string excluded)
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            return RouteMatch::Redirect(self.root_redirect());
        }

        let mut parts = trimmed.splitn(2, '/');
        let Some(site) = parts.next().and_then(|s| s.parse::<SiteKey>().ok()) else {
            return RouteMatch::NotFound;
        };

        match parts.next() {
            None | Some("") => RouteMatch::Redirect(site.path(Page::Home.slug())),
            Some(slug) => match slug.parse::<Page>() {
                Ok(page) if self.contains(site, page) => RouteMatch::Page { site, page },
                _ => RouteMatch::NotFound,
            },
        }
    }

    /// Every concrete route, grouped by brand
    pub fn entries(&self) -> Vec<RouteEntry> {
        self.routes
            .iter()
            .map(|(site, page)| RouteEntry {
                path: site.path(page.slug()),
                site: *site,
                page: *page,
            })
            .collect()
    }

    /// Number of concrete routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_registry(&SiteRegistry::builtin())
    }

    #[test]
    fn test_every_page_parses_from_its_slug() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_root_redirects_to_default_home() {
        assert_eq!(table().resolve("/"), RouteMatch::Redirect("/software/home".into()));
        assert_eq!(table().resolve(""), RouteMatch::Redirect("/software/home".into()));
    }

    #[test]
    fn test_bare_prefix_redirects_to_brand_home() {
        let table = table();
        for key in SiteKey::ALL {
            let expected = RouteMatch::Redirect(format!("/{}/home", key));
            assert_eq!(table.resolve(&format!("/{}", key)), expected);
            assert_eq!(table.resolve(&format!("/{}/", key)), expected);
        }
    }

    #[test]
    fn test_every_brand_has_base_pages() {
        let table = table();
        for key in SiteKey::ALL {
            for page in BASE_PAGES {
                assert!(table.contains(key, page), "{key} missing {page}");
            }
        }
    }

    #[test]
    fn test_nav_links_become_routes() {
        let table = table();
        assert_eq!(
            table.resolve("/guidance/require"),
            RouteMatch::Page { site: SiteKey::Guidance, page: Page::Requirements }
        );
        assert_eq!(
            table.resolve("/itsupport/careers"),
            RouteMatch::Page { site: SiteKey::ItSupport, page: Page::Careers }
        );
        assert_eq!(table.resolve("/flowsupport/careers"), RouteMatch::NotFound);
    }

    #[test]
    fn test_every_nav_link_resolves_to_a_page() {
        let registry = SiteRegistry::builtin();
        let table = RouteTable::from_registry(&registry);
        for config in registry.iter() {
            for link in &config.nav_links {
                let path = config.key.path(&link.href);
                assert!(
                    matches!(table.resolve(&path), RouteMatch::Page { .. }),
                    "{path} not routed"
                );
            }
        }
    }

    #[test]
    fn test_unknown_paths_not_found() {
        let table = table();
        assert_eq!(table.resolve("/pricing"), RouteMatch::NotFound);
        assert_eq!(table.resolve("/software/nope"), RouteMatch::NotFound);
        assert_eq!(table.resolve("/software/home/extra"), RouteMatch::NotFound);
    }

    #[test]
    fn test_entries_are_concrete_paths() {
        let table = table();
        let entries = table.entries();
        assert_eq!(entries.len(), table.len());
        assert!(entries.iter().any(|e| e.path == "/software/webdevelop"));
        assert!(entries.iter().all(|e| e.path.starts_with(&format!("/{}/", e.site))));
    }
}
