use crate::app::AppState;
use crate::domain::UiMode;
use crate::page::ListPage;
use crate::ui::styles::{border_style, focus_border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the add/edit input bar
pub fn render_input_bar(f: &mut Frame, app: &AppState, page: &ListPage, area: Rect) {
    let focused = app.ui_mode == UiMode::Typing;
    let editing = page.list().session().enabled();

    let title = if editing { " Edit item " } else { " Add item " };
    let submit_hint = if editing { "Enter save" } else { "Enter add" };

    let line = if app.input.is_empty() && !focused {
        Line::from(vec![
            Span::styled(page.kind().placeholder(), hint_style()),
            Span::styled("  (press a)", hint_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.clone(), modal_title_style()),
            if focused {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
            Span::styled(format!("   {} · Esc cancel", submit_hint), hint_style()),
        ])
    };

    let border = if focused {
        focus_border_style()
    } else {
        border_style()
    };
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
