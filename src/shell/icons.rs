//! Navigation icons
//!
//! Typed lookup from [`IconKey`] to the glyph rendered in the sidebar.

use leptos::*;

use crate::site::IconKey;

/// Glyph rendered for keys this build does not know
pub const FALLBACK_GLYPH: &str = "•";

/// Glyph for an icon key
pub fn glyph(icon: IconKey) -> &'static str {
    match icon {
        IconKey::Home => "🏠",
        IconKey::Info => "ℹ",
        IconKey::Computer => "💻",
        IconKey::Code => "⌨",
        IconKey::Mail => "✉",
        IconKey::Devices => "📱",
        IconKey::Checklist => "☑",
        IconKey::Business => "🏢",
        IconKey::Storage => "🗄",
        IconKey::Career => "💼",
        IconKey::Unknown => FALLBACK_GLYPH,
    }
}

/// Icon element for a navigation entry
#[component]
pub fn NavIcon(icon: IconKey) -> impl IntoView {
    let class = match icon {
        IconKey::Unknown => "nav-icon nav-icon-unknown",
        _ => "nav-icon",
    };

    view! {
        <span class=class aria-hidden="true">{glyph(icon)}</span>
    }
}
