//! stall — a terminal product-management dashboard.
//!
//! Loads a product list and category list from a REST API, filters them
//! client-side by title search and category, and creates, updates, and
//! deletes products through a form-and-table TUI. Local state is the source
//! of truth for rendering: server responses are merged in place and the
//! list is never re-fetched after a mutation.

pub mod api;
pub mod app;
pub mod config;
pub mod ui;
