//! Footer with social links and copyright

use leptos::*;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "https://facebook.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://instagram.com"),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <a class="social" href=*href target="_blank" rel="noopener noreferrer">
                            {*label}
                        </a>
                    })
                    .collect_view()}
            </div>
            <p class="copyright">
                "©2025 Nordisk Support. All rights reserved."
                <br/>
                "Technology Solutions | IT Support | Software Development | Data Engineering"
            </p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_open_new_context() {
        let html = crate::shell::render_html(|| view! { <SiteFooter /> });
        assert_eq!(html.matches(r#"target="_blank""#).count(), 3);
        assert!(html.contains("Nordisk Support"));
    }
}
