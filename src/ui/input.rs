use crate::ui::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.toggle_favorite();
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.toggle_favorites_view();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.retry();
        return;
    }

    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Enter => app.open_selected(),
        _ => match app.view().clone() {
            View::Listing => handle_listing_key(app, key),
            View::Detail { .. } => {
                if matches!(key.code, KeyCode::Char('f')) && key.modifiers.is_empty() {
                    app.toggle_favorite();
                }
            }
            View::Favorites => {}
        },
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'o') {
        app.cycle_sort();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.clear_filters();
        return;
    }

    match key.code {
        KeyCode::Tab => app.cycle_category(true),
        KeyCode::BackTab => app.cycle_category(false),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.push_search_char(ch),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
