//! Theme Resolution
//!
//! Derives the active brand from the first path segment and turns its
//! configuration into CSS custom properties. The resolved theme is passed
//! explicitly to the navigation shell instead of living in global state.

mod resolver;
mod tokens;

pub use resolver::{first_segment, ResolvedTheme, ThemeResolver};
pub use tokens::ThemeTokens;
