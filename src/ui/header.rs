use crate::app::AppState;
use crate::domain::{ListKind, Route};
use crate::ui::styles::{border_style, selected_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Banner line for a route
fn banner(route: &Route, use_emoji: bool) -> String {
    let mark = match (route, use_emoji) {
        (Route::Todo, true) => "🏁",
        (Route::Checklist, true) => "🏠",
        (Route::NotFound(_), true) => "🚧",
        (_, false) => "*",
    };
    format!(" {} Too Fast ToDorious ", mark)
}

/// Render the title bar with page tabs
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let titles = [ListKind::Todo, ListKind::Checklist]
        .iter()
        .map(|kind| Line::raw(kind.title()))
        .collect::<Vec<_>>();
    let selected = match app.route {
        Route::Todo => Some(0),
        Route::Checklist => Some(1),
        Route::NotFound(_) => None,
    };

    let date = Local::now().format("%a %b %d");
    let title = format!("{}({}) ", banner(&app.route, app.config.use_emoji), date);

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .divider("|");
    if let Some(index) = selected {
        tabs = tabs.select(index).highlight_style(selected_style());
    }

    f.render_widget(tabs, area);
}
