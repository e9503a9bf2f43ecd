//! Render functions for the TUI.
//!
//! This module owns the overall layout and dispatches each region to its
//! widget module. Layout, top to bottom: filter bar (search + category),
//! create/edit form, product table, status line.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{filter, form, status, table};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 50;
pub(super) const MIN_HEIGHT: u16 = 14;

/// Main render dispatch function.
///
/// Handles terminal size validation before rendering; the UI must render
/// gracefully with empty collections while the initial fetches are pending.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar: search + category selector
            Constraint::Length(5), // Create/edit form: 3 fields
            Constraint::Min(0),    // Product table
            Constraint::Length(1), // Status line
        ])
        .split(area);

    filter::render(f, app, chunks[0]);
    form::render(f, app, chunks[1]);
    table::render(f, app, chunks[2]);
    status::render(f, app, chunks[3]);
}
