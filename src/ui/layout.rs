use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub timer_area: Option<Rect>,
    pub input_area: Option<Rect>,
    pub content_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title and page tabs
/// - Timer pane (to-do page only)
/// - Input bar (while the list accepts new items)
/// - List fills the rest
pub fn create_layout(area: Rect, show_timer: bool, show_input: bool) -> MainLayout {
    let mut constraints = vec![
        Constraint::Length(1), // Keybindings bar
        Constraint::Length(3), // Header
    ];
    if show_timer {
        constraints.push(Constraint::Length(5));
    }
    if show_input {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut rest = chunks.iter().skip(2).copied();
    let timer_area = if show_timer { rest.next() } else { None };
    let input_area = if show_input { rest.next() } else { None };
    let content_area = rest.next().unwrap_or_default();

    MainLayout {
        keybindings_area: chunks[0],
        header_area: chunks[1],
        timer_area,
        input_area,
        content_area,
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
