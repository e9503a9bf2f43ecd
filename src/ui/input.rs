//! Input handling for the TUI.
//!
//! This module processes keyboard input and dispatches to the appropriate
//! handler based on which panel has focus.

use crate::app::{App, AppEvent, Focus};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::{spawn_create, spawn_delete, spawn_update};
use super::Action;

/// Maximum accepted search input length (UI layer validation).
const MAX_SEARCH_LENGTH: usize = 256;

/// Main input dispatch function.
///
/// Global keys (quit, focus cycling) are handled first; everything else is
/// routed to the focused panel's handler.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Ctrl+C always quits, regardless of focus
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Tab / Shift+Tab cycle panel focus everywhere
    match code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Action::Continue;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Action::Continue;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => handle_search_input(app, code),
        Focus::Filter => handle_filter_input(app, code),
        Focus::Form => handle_form_input(app, code, event_tx),
        Focus::Table => handle_table_input(app, code, event_tx),
    }
}

/// Handle input while the search box has focus.
///
/// Every keystroke narrows the visible list immediately; there is no
/// debouncing — filtering is a linear scan of the in-memory list.
fn handle_search_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char(c) => {
            if app.search_input.len() < MAX_SEARCH_LENGTH {
                app.search_input.push(c);
                app.clamp_selection();
            }
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.clamp_selection();
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.clamp_selection();
        }
        KeyCode::Enter | KeyCode::Down => {
            app.focus = Focus::Table;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the category selector has focus.
fn handle_filter_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.cycle_category_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_category_next(),
        KeyCode::Esc => {
            app.category_filter = None;
            app.clamp_selection();
        }
        KeyCode::Enter | KeyCode::Down => {
            app.focus = Focus::Table;
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the create/edit form has focus.
fn handle_form_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Char(c) => {
            app.form.field_mut(app.form_field).push(c);
        }
        KeyCode::Backspace => {
            app.form.field_mut(app.form_field).pop();
        }
        KeyCode::Down => {
            app.form_field = app.form_field.next();
        }
        KeyCode::Up => {
            app.form_field = app.form_field.prev();
        }
        KeyCode::Esc => {
            // Cancel an in-progress edit, or clear a draft
            app.cancel_edit();
        }
        KeyCode::Enter => submit_form(app, event_tx),
        _ => {}
    }
    Action::Continue
}

/// Validate the form and spawn the create or update request.
///
/// A form that fails validation blocks submission with a status message and
/// issues no network call. The form itself is only reset when the server
/// confirms the mutation (see `events`).
fn submit_form(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let draft = match app.form.to_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            app.set_status(msg);
            return;
        }
    };

    match app.editing_id {
        Some(id) => {
            tracing::debug!(id, title = %draft.title, "Submitting update");
            spawn_update(app.api.clone(), id, draft, event_tx.clone());
            app.set_status("Updating…");
        }
        None => {
            tracing::debug!(title = %draft.title, "Submitting create");
            spawn_create(app.api.clone(), draft, event_tx.clone());
            app.set_status("Adding…");
        }
    }
}

/// Handle input while the product table has focus.
fn handle_table_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('a') => {
            // Jump to the form in create mode
            app.cancel_edit();
            app.focus = Focus::Form;
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if app.begin_edit_selected() {
                app.focus = Focus::Form;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(product) = app.selected_product() {
                let id = product.id;
                tracing::debug!(id, "Submitting delete");
                spawn_delete(app.api.clone(), id, event_tx.clone());
                app.set_status("Deleting…");
            }
        }
        _ => {}
    }
    Action::Continue
}
