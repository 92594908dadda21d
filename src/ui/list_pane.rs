use crate::app::AppState;
use crate::domain::{check_glyph, Item, ListKind, TimerState};
use crate::page::ListPage;
use crate::ui::styles::{
    border_style, default_style, done_style, expired_style, locked_style, selected_style,
    struck_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Text style for an item given the list kind and timer state
fn item_style(item: &Item, kind: ListKind, state: &TimerState) -> Style {
    match (item.completed, state) {
        (true, _) if kind.strikethrough() => struck_style(),
        (true, _) => done_style(),
        (false, TimerState::Completed) => expired_style(),
        (false, TimerState::Active { .. }) => locked_style(),
        (false, TimerState::Idle) => default_style(),
    }
}

/// Create a single line for an item
/// Format: [x] buy milk
fn create_item_line(item: &Item, kind: ListKind, state: &TimerState, use_emoji: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {} ", check_glyph(item.completed, use_emoji))),
        Span::styled(item.text.clone(), item_style(item, kind, state)),
    ])
}

/// Render the item list
pub fn render_list_pane(f: &mut Frame, app: &AppState, page: &ListPage, area: Rect) {
    let kind = page.kind();
    let state = page.timer_state();
    let done = page.items().iter().filter(|i| i.completed).count();
    let lock = if page.is_timer_active() {
        " · locked"
    } else if page.is_timer_completed() {
        " · read-only"
    } else {
        ""
    };
    let title = format!(" {} ({}/{}){} ", kind.title(), done, page.items().len(), lock);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if page.items().is_empty() {
        let empty = Paragraph::new(Line::styled(" Nothing here yet", locked_style())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = page
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let line = create_item_line(item, kind, &state, app.config.use_emoji);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
