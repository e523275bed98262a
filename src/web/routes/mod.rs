//! Route handlers organized by functionality.

pub mod chat;
pub mod client;
pub mod forms;
pub mod health;
pub mod pages;
pub mod theme;
pub mod widgets;
