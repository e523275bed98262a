//! Router Table
//!
//! Maps request paths to brand pages, with redirect rules for the root and
//! bare brand prefixes.

mod table;

pub use table::{Page, RouteEntry, RouteMatch, RouteTable, BASE_PAGES};
