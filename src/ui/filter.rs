//! Search input and category selector widgets.

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter bar: search box on the left, category selector right.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_search(f, app, chunks[0]);
    render_category(f, app, chunks[1]);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    // Trailing underscore marks the cursor position while focused
    let text = if focused {
        format!("{}_", app.search_input)
    } else if app.search_input.is_empty() {
        "Search by title".to_string()
    } else {
        app.search_input.clone()
    };

    let style = if !focused && app.search_input.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title("Search"),
    );
    f.render_widget(widget, area);
}

fn render_category(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filter;
    let label = app.category_filter_label().unwrap_or("All Categories");
    let text = if focused {
        format!("◀ {} ▶", label)
    } else {
        label.to_string()
    };

    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title("Category"),
    );
    f.render_widget(widget, area);
}
