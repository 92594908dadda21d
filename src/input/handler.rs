use crate::app::AppState;
use crate::domain::{TimeField, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should exit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always asks to quit, whatever has focus
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return Ok(app.should_quit);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Typing => handle_typing_mode(app, key),
        UiMode::EditingTimer(field) => handle_timer_mode(app, field, key),
        UiMode::Notice => handle_notice_mode(app, key),
        UiMode::ConfirmLeave => handle_confirm_leave_mode(app, key),
    }
    Ok(app.should_quit)
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Add / edit / delete
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_input(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.begin_edit_selected(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),

        // Timer
        KeyCode::Char('t') | KeyCode::Char('T') => app.begin_timer_edit(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.start_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),

        // Pages
        KeyCode::Tab | KeyCode::BackTab => app.navigate_next(),

        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),

        _ => {}
    }
}

/// Handle keys while the input bar has focus
fn handle_typing_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

/// Handle keys while a countdown field has focus
fn handle_timer_mode(app: &mut AppState, field: TimeField, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_timer_digit(field, c),
        KeyCode::Backspace => app.pop_timer_digit(field),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char(':') => {
            app.ui_mode = UiMode::EditingTimer(field.next());
        }
        KeyCode::Left | KeyCode::BackTab => {
            app.ui_mode = UiMode::EditingTimer(field.prev());
        }
        KeyCode::Enter => app.start_timer(),
        KeyCode::Esc => app.ui_mode = UiMode::Normal,
        _ => {}
    }
}

/// Handle keys while a notice is shown
fn handle_notice_mode(app: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
}

/// Handle keys in the leave-while-running prompt
fn handle_confirm_leave_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_leave(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_leave(),
        _ => {}
    }
}
