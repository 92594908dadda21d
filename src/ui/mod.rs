pub mod header;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use header::render_header;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_leave_modal, render_not_found, render_notice_modal};
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    let show_timer = app.page.as_ref().is_some_and(|p| p.timer().is_some());
    let show_input = app
        .page
        .as_ref()
        .is_some_and(|p| p.allowed_ops().can_show_input || app.ui_mode == UiMode::Typing);
    let layout = create_layout(size, show_timer, show_input);

    render_keybindings(f, app, layout.keybindings_area);
    render_header(f, app, layout.header_area);

    match &app.page {
        Some(page) => {
            if let (Some(area), Some(timer)) = (layout.timer_area, page.timer()) {
                timer_pane::render_timer_pane(f, app, timer, area);
            }
            if let Some(area) = layout.input_area {
                render_input_bar(f, app, page, area);
            }
            render_list_pane(f, app, page, layout.content_area);
        }
        None => render_not_found(f, app.route.path(), layout.content_area),
    }

    // Modals draw last
    match app.ui_mode {
        UiMode::Notice => render_notice_modal(f, app, size),
        UiMode::ConfirmLeave => render_confirm_leave_modal(f, app, size),
        _ => {}
    }
}
