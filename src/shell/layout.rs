//! Page layout
//!
//! The full HTML document: theme style block, header, sidebar, page content,
//! footer and the chat widget's mount point.

use leptos::*;

use super::chat_widget::ChatWidget;
use super::footer::SiteFooter;
use super::header::SiteHeader;
use super::notice::{Notice, NoticeBanner};
use super::sidebar::{content_offset, Sidebar};
use crate::theme::ResolvedTheme;
use crate::widgets::CHAT_ROOT;

/// Loads the browser build and mounts the widgets
const HYDRATION_LOADER: &str = "import init, { hydrate } from '/pkg/nordisk_sites.js'; \
init('/pkg/nordisk_sites_bg.wasm').then(hydrate);";

#[component]
pub fn Document(
    theme: ResolvedTheme,
    /// Request path without query string
    #[prop(into)]
    path: String,
    #[prop(into)] title: String,
    #[prop(optional)] sidebar_open: bool,
    #[prop(optional_no_strip)] notice: Option<Notice>,
    children: Children,
) -> impl IntoView {
    let full_title = format!("{} | {}", title, theme.config.name);
    let style = theme.style_block();
    let body_class = theme.body_class();
    let main_style = format!("margin-left: {}px;", content_offset(sidebar_open));

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{full_title}</title>
                <link rel="stylesheet" href="/static/global.css" />
                <style inner_html=style></style>
                <script type="module" inner_html=HYDRATION_LOADER></script>
            </head>
            <body class=body_class>
                <SiteHeader theme=theme.clone() />
                <Sidebar theme=theme path=path open=sidebar_open />
                <main class="content" style=main_style>
                    {notice.map(|notice| view! { <NoticeBanner notice=notice /> })}
                    {children()}
                </main>
                <SiteFooter />
                <div id=CHAT_ROOT>
                    <ChatWidget />
                </div>
            </body>
        </html>
    }
}

/// Render a [`Document`] view as a complete HTML page
#[cfg(feature = "ssr")]
pub fn render_document<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    format!("<!DOCTYPE html>\n{}", super::render_html(view))
}
