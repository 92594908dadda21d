use crate::app::{AppState, PendingLeave};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking notice (validation messages)
pub fn render_notice_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(message) = &app.notice else {
        return;
    };
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::styled(format!("  {}", message), error_style()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Notice ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the prompt shown when leaving while the countdown runs
pub fn render_confirm_leave_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let action = match &app.pending_leave {
        Some(PendingLeave::Navigate(route)) => format!("open {}", route.path()),
        Some(PendingLeave::Quit) => String::from("quit"),
        None => return,
    };
    let modal_area = create_modal_area(area);

    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("  A timer is running."),
        Line::raw(format!("  Leaving to {} stops it and unlocks the list.", action)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Leave  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Stay"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Leave page? ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Fallback content for an unknown route
pub fn render_not_found(f: &mut Frame, path: &str, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(format!("  Page not found: {}", path), error_style()),
        Line::raw(""),
        Line::styled("  Press Tab to go to the to-do list", hint_style()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" 404 ", title_style())),
    );

    f.render_widget(paragraph, area);
}
