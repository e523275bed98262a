//! Header
//!
//! Brand logo, brand name and the highlighted contact link. Colors bind to
//! the theme's CSS variables so a brand switch restyles the header.

use leptos::*;

use crate::theme::ResolvedTheme;

/// Fixed page header
#[component]
pub fn SiteHeader(theme: ResolvedTheme) -> impl IntoView {
    let style = format!(
        "background-color: var(--header-bg); color: var(--header-text); height: {}px;",
        theme.tokens.header_height
    );

    view! {
        <header class="site-header" style=style>
            <a class="brand" href=theme.key.path("home")>
                <img
                    class="brand-logo"
                    src=theme.config.logo.clone()
                    alt="Logo"
                    width=theme.tokens.logo_width.to_string()
                    height=theme.tokens.logo_height.to_string()
                />
                <span class="brand-name">{theme.config.name.clone()}</span>
            </a>
            <span class="company-name">"Nordisk Support"</span>
            <a class="header-contact" href=theme.key.path("contact")>"Contact"</a>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::shell::render_html;
    use crate::site::SiteRegistry;
    use crate::theme::ThemeResolver;
    use std::sync::Arc;

    fn header_for(path: &str) -> String {
        let resolver = ThemeResolver::new(Arc::new(SiteRegistry::builtin()));
        let theme = resolver.resolve(path);
        render_html(move || view! { <SiteHeader theme=theme /> })
    }

    #[test]
    fn test_header_shows_brand_and_sized_logo() {
        let html = header_for("/itsupport/home");

        assert!(html.contains("Where Technology Meets Reliability"));
        assert!(html.contains(r#"src="/logos/nordisk.png""#));
        assert!(html.contains(r#"width="85""#));
        assert!(html.contains(r#"height="85""#));
        assert!(html.contains(r#"href="/itsupport/contact""#));
        assert!(html.contains("height: 90px"));
    }

    #[test]
    fn test_header_escapes_brand_name() {
        let html = header_for("/flowsupport/home");

        assert!(html.contains("Flow &amp; Hygiene Support Services"));
        assert!(!html.contains("Flow & Hygiene"));
    }
}
