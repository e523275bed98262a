//! Sidebar
//!
//! Collapsible brand navigation. Links are rendered in configuration order;
//! a link is active only when the request path equals its path exactly.

use leptos::*;
use serde::Serialize;

use super::icons::NavIcon;
use crate::site::IconKey;
use crate::theme::ResolvedTheme;

/// Sidebar width when expanded (px)
pub const OPEN_WIDTH: u32 = 240;

/// Sidebar width when collapsed (px)
pub const CLOSED_WIDTH: u32 = 56;

/// A navigation entry with its computed path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub label: String,
    pub path: String,
    pub icon: IconKey,
    pub active: bool,
}

/// Compute the sidebar entries for a request path
pub fn links(theme: &ResolvedTheme, current_path: &str) -> Vec<SidebarLink> {
    theme
        .config
        .nav_links
        .iter()
        .map(|link| {
            let path = theme.key.path(&link.href);
            SidebarLink {
                label: link.label.clone(),
                active: current_path == path,
                path,
                icon: link.icon,
            }
        })
        .collect()
}

/// Collapsible navigation; `open` comes from the `menu=open` query
#[component]
pub fn Sidebar(theme: ResolvedTheme, #[prop(into)] path: String, open: bool) -> impl IntoView {
    let toggle_href = if open {
        path.clone()
    } else {
        format!("{}?menu=open", path)
    };
    let (nav_class, toggle_label, toggle_title) = if open {
        ("sidebar open", "✕", "Collapse Menu")
    } else {
        ("sidebar closed", "☰", "Expand Menu")
    };
    let style = format!(
        "width: {}px; margin-top: {}px; background-color: var(--sidebar-bg);",
        content_offset(open),
        theme.tokens.header_height
    );

    let items = links(&theme, &path)
        .into_iter()
        .map(|link| {
            let class = if link.active { "nav-link active" } else { "nav-link" };
            let title = link.label.clone();
            view! {
                <li>
                    <a class=class href=link.path title=title>
                        <NavIcon icon=link.icon />
                        {open.then(|| view! { <span class="nav-label">{link.label}</span> })}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=nav_class style=style>
            <a class="sidebar-toggle" href=toggle_href title=toggle_title>{toggle_label}</a>
            <ul class="nav-list">{items}</ul>
        </nav>
    }
}

/// Width of the main content margin for a sidebar state
pub fn content_offset(open: bool) -> u32 {
    if open {
        OPEN_WIDTH
    } else {
        CLOSED_WIDTH
    }
}
