//! Create/edit form widget.
//!
//! Three required fields mirroring a product's editable data. The block
//! title toggles between "Add Product" and "Edit Product", and the submit
//! hint between "Add" and "Update", depending on the editing marker.

use crate::app::{App, Focus, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS: [(FormField, &str); 3] = [
    (FormField::Title, "Title"),
    (FormField::Price, "Price"),
    (FormField::Category, "Category"),
];

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;

    let lines: Vec<Line> = FIELDS
        .iter()
        .map(|&(field, label)| {
            let active = focused && app.form_field == field;
            let marker = if active { "> " } else { "  " };
            let value = app.form.field(field);

            let label_style = if active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{:<9}", format!("{}:", label)), label_style),
                Span::raw(value.to_string()),
            ];
            if active {
                spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let title = format!("{} (Enter: {})", app.form_heading(), app.submit_label());
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(widget, area);
}
