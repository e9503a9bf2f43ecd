//! Product table widget.
//!
//! Shows the visible (filtered) product list with title, price, and
//! category columns. The selected row is highlighted; Edit and Delete act
//! on it via the table keybindings shown in the status bar.

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Table;
    let visible = app.visible_products();

    let rows: Vec<Row> = if visible.is_empty() {
        vec![Row::new(vec![Cell::from("No products")])]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let style = if focused && i == app.selected_row {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else if !focused && i == app.selected_row {
                    Style::default().add_modifier(Modifier::DIM)
                } else {
                    Style::default()
                };

                let mut title = product.title.clone();
                // Leave room for the other columns on narrow terminals
                let max_title = area.width.saturating_sub(26) as usize;
                if title.chars().count() > max_title && max_title > 3 {
                    title = title.chars().take(max_title - 3).collect::<String>() + "...";
                }

                Row::new(vec![
                    Cell::from(title),
                    Cell::from(format!("${:.2}", product.price)),
                    Cell::from(product.category.clone()),
                ])
                .style(style)
            })
            .collect()
    };

    let header = Row::new(vec!["Title", "Price", "Category"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let title = format!("Products ({}/{})", visible.len(), app.products.len());
    let widget = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(widget, area);
}
