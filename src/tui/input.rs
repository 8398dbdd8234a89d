use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Mode};
use super::window::NoteHit;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.clear_stale_notice();

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor_up(),
        KeyCode::Char('g') => {
            app.cursor = 0;
            app.ensure_cursor_visible();
        }
        KeyCode::Char('G') => {
            app.cursor = app.store.len().saturating_sub(1);
            app.ensure_cursor_visible();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => app.store.toggle(app.cursor),
        KeyCode::Char('v') => app.toggle_select(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Insert,
        KeyCode::Char('s') => app.save_tasks(),
        KeyCode::Char('p') => {
            app.window.toggle_pin();
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            // Esc backs out of the selection first, then the app
            if app.selected.is_empty() {
                app.should_quit = true;
            } else {
                app.selected.clear();
            }
        }
        _ => {}
    }
}

fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_input(),
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Backspace => {
            if app.input_cursor > 0 {
                let start = prev_char_start(&app.input, app.input_cursor);
                app.input.remove(start);
                app.input_cursor = start;
            }
        }
        KeyCode::Delete => {
            if app.input_cursor < app.input.len() {
                app.input.remove(app.input_cursor);
            }
        }
        KeyCode::Left => {
            app.input_cursor = prev_char_start(&app.input, app.input_cursor);
        }
        KeyCode::Right => {
            if let Some(c) = app.input[app.input_cursor..].chars().next() {
                app.input_cursor += c.len_utf8();
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            app.input_cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Byte offset of the char boundary before `cursor`
fn prev_char_start(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().next_back().map_or(0, |(i, _)| i)
}

/// Handle a mouse event: title-bar dragging, glyph clicks, row clicks
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_press(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => {
            app.window.drag_to(mouse.column, mouse.row, app.screen);
        }
        MouseEventKind::Up(MouseButton::Left) => app.window.end_drag(),
        MouseEventKind::ScrollUp => app.move_cursor_up(),
        MouseEventKind::ScrollDown => app.move_cursor_down(),
        _ => {}
    }
}

fn handle_left_press(app: &mut App, column: u16, row: u16) {
    app.clear_stale_notice();
    match app.window.hit(column, row) {
        Some(NoteHit::Pin) => {
            app.window.toggle_pin();
        }
        Some(NoteHit::Close) => app.should_quit = true,
        Some(NoteHit::TitleBar) => app.window.begin_drag(column, row),
        Some(NoteHit::Row { slot, checkbox }) => {
            let index = app.scroll + slot;
            if index < app.store.len() {
                app.cursor = index;
                app.mode = Mode::Navigate;
                if checkbox {
                    app.store.toggle(index);
                } else {
                    // plain click selects exactly this row
                    app.selected.clear();
                    app.selected.insert(index);
                }
            }
        }
        Some(NoteHit::Input) => app.mode = Mode::Insert,
        Some(NoteHit::Body) | None => {}
    }
}
