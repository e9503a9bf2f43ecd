//! Terminal User Interface module.
//!
//! This module provides the TUI for the product dashboard, including:
//! - Main event loop (`run`)
//! - Input handling per focused panel
//! - Rendering for the filter bar, form, product table, and status bar
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and render dispatch
//! - `helpers` - Network task spawn helpers
//! - `filter` - Search input and category selector widgets
//! - `form` - Create/edit form widget
//! - `table` - Product table widget
//! - `status` - Status bar widget

mod events;
mod filter;
mod form;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;
mod table;

// Re-export the public API
pub use loop_runner::{run, Action};
