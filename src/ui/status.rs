//! Status bar widget: transient messages or key hints.

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status_message {
        Some((msg, _)) => (msg.to_string(), Style::default().fg(Color::Yellow)),
        None => (hints(app.focus).to_string(), Style::default().fg(Color::DarkGray)),
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => "Type to search · Esc clear · Tab next panel",
        Focus::Filter => "←/→ cycle category · Esc all · Tab next panel",
        Focus::Form => "↑/↓ field · Enter submit · Esc cancel · Tab next panel",
        Focus::Table => "j/k move · e edit · d delete · a add · / search · q quit",
    }
}
