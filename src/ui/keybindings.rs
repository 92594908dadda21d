use crate::app::AppState;
use crate::domain::{TimerState, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode and page
fn hints(app: &AppState) -> &'static str {
    match app.ui_mode {
        UiMode::Typing => " Enter submit   Esc cancel   Ctrl+C quit",
        UiMode::EditingTimer(_) => " 0-9 type   ←/→ field   Backspace erase   Enter start   Esc done",
        UiMode::Notice => " Enter dismiss",
        UiMode::ConfirmLeave => " y leave   n stay",
        UiMode::Normal => match app.page.as_ref() {
            None => " Tab home   q quit",
            Some(page) => match (page.timer().map(|t| t.state()), page.kind().editable()) {
                (Some(TimerState::Active { .. }), _) => " Tab switch page   q quit",
                (Some(TimerState::Completed), _) => " r refresh   Tab switch page   q quit",
                (Some(TimerState::Idle), true) => {
                    " ↑/↓ select   Space toggle   a add   e edit   x delete   t timer   s start   Tab page   q quit"
                }
                _ => " ↑/↓ select   Space toggle   a add   x delete   Tab page   q quit",
            },
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}
