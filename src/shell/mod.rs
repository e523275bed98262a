//! Navigation Shell
//!
//! Shared chrome rendered around every page. The components consume a
//! [`ResolvedTheme`](crate::theme::ResolvedTheme) and own no brand logic.
//!
//! - **header**: logo, brand name, contact link
//! - **sidebar**: collapsible brand navigation with exact-path highlighting
//! - **footer**: social links and copyright
//! - **notice**: transient status banners
//! - **chat_widget**: the floating assistant
//! - **layout**: the full HTML document

pub mod chat_widget;
pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;
pub mod notice;
pub mod sidebar;

pub use chat_widget::ChatWidget;
pub use layout::Document;
#[cfg(feature = "ssr")]
pub use layout::render_document;
pub use notice::{Notice, NoticeBanner, Severity};
pub use sidebar::SidebarLink;

/// Render a view to an HTML string outside any request
#[cfg(feature = "ssr")]
pub fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
