use crate::domain::{clamp_selection, Route, TimeField, TimerEvent, UiMode};
use crate::notifications;
use crate::page::ListPage;
use crate::persistence::{AppConfig, KeyValueStore};
use std::time::Instant;

/// What to do once the user confirms abandoning a running timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingLeave {
    Navigate(Route),
    Quit,
}

/// Main application state
pub struct AppState {
    pub config: AppConfig,
    store: Box<dyn KeyValueStore>,
    pub route: Route,
    /// Page for the current route; None on NotFound
    pub page: Option<ListPage>,
    pub ui_mode: UiMode,
    /// Mode to return to when a notice is dismissed
    pub notice_return: UiMode,
    pub notice: Option<String>,
    pub pending_leave: Option<PendingLeave>,
    pub selected_index: usize,
    /// Input bar text
    pub input: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, store: Box<dyn KeyValueStore>, route: Route) -> Self {
        let mut app = Self {
            config,
            store,
            route: Route::Todo,
            page: None,
            ui_mode: UiMode::Normal,
            notice_return: UiMode::Normal,
            notice: None,
            pending_leave: None,
            selected_index: 0,
            input: String::new(),
            should_quit: false,
        };
        app.mount(route);
        app
    }

    fn mount(&mut self, route: Route) {
        self.page = route
            .list_kind()
            .map(|kind| ListPage::mount(kind, self.store.as_ref(), self.config.completion_delay()));
        if self.page.is_none() {
            log::warn!("No page for route {}", route.path());
        }
        self.route = route;
        self.selected_index = 0;
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    fn unmount(&mut self) {
        if let Some(mut page) = self.page.take() {
            page.unmount(self.store.as_mut());
        }
    }

    fn timer_active(&self) -> bool {
        self.page.as_ref().is_some_and(ListPage::is_timer_active)
    }

    /// Show a blocking notification
    pub fn show_notice(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Notice: {}", message);
        self.notice = Some(message);
        if self.ui_mode != UiMode::Notice {
            self.notice_return = self.ui_mode;
        }
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = self.notice_return;
        self.notice_return = UiMode::Normal;
    }

    /// Switch to another page. Asks first while the timer runs.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if self.timer_active() {
            self.pending_leave = Some(PendingLeave::Navigate(route));
            self.ui_mode = UiMode::ConfirmLeave;
            return;
        }
        self.switch_to(route);
    }

    fn switch_to(&mut self, route: Route) {
        self.unmount();
        self.mount(route);
    }

    pub fn navigate_next(&mut self) {
        let next = self.route.next();
        self.navigate(next);
    }

    /// Quit, asking first while the timer runs
    pub fn request_quit(&mut self) {
        if self.timer_active() {
            self.pending_leave = Some(PendingLeave::Quit);
            self.ui_mode = UiMode::ConfirmLeave;
        } else {
            self.should_quit = true;
        }
    }

    pub fn confirm_leave(&mut self) {
        self.ui_mode = UiMode::Normal;
        match self.pending_leave.take() {
            Some(PendingLeave::Navigate(route)) => {
                log::info!("Abandoning running countdown to open {}", route.path());
                self.switch_to(route);
            }
            Some(PendingLeave::Quit) => {
                log::info!("Abandoning running countdown to quit");
                self.should_quit = true;
            }
            None => {}
        }
    }

    pub fn cancel_leave(&mut self) {
        self.pending_leave = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.page.as_ref().map_or(0, |p| p.items().len());
        self.selected_index = clamp_selection(self.selected_index + 1, len);
    }

    fn selected_id(&self) -> Option<String> {
        self.page.as_ref()?.id_at(self.selected_index)
    }

    /// Focus the input bar if the page shows it
    pub fn focus_input(&mut self) {
        if let Some(page) = &self.page {
            if page.allowed_ops().can_show_input {
                self.ui_mode = UiMode::Typing;
            }
        }
    }

    /// Submit the input bar: add, or save the item being edited
    pub fn submit_input(&mut self) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        match page.submit(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.ui_mode = UiMode::Normal;
                let len = page.items().len();
                self.selected_index = clamp_selection(self.selected_index, len);
            }
            Err(e) => self.show_notice(e.to_string()),
        }
    }

    /// Leave the input bar, dropping an unfinished edit
    pub fn cancel_input(&mut self) {
        if let Some(page) = self.page.as_mut() {
            if page.cancel_edit() {
                self.input.clear();
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if let Some(text) = page.begin_edit(&id) {
            self.input = text;
            self.ui_mode = UiMode::Typing;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(page) = self.page.as_mut() {
                page.toggle(&id);
            }
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if page.delete(&id) {
            let len = page.items().len();
            self.selected_index = clamp_selection(self.selected_index, len);
        }
    }

    /// Focus the countdown fields on a page with an idle timer
    pub fn begin_timer_edit(&mut self) {
        let idle = self
            .page
            .as_ref()
            .and_then(ListPage::timer)
            .is_some_and(|t| t.state().is_idle());
        if idle {
            self.ui_mode = UiMode::EditingTimer(TimeField::Hours);
        }
    }

    /// Type a digit into a countdown field (two digits max, as typed)
    pub fn push_timer_digit(&mut self, field: TimeField, digit: char) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let Some(current) = page.timer_fields().map(|f| f.get(field).to_string()) else {
            return;
        };
        let mut raw = if current.len() >= 2 { String::new() } else { current };
        raw.push(digit);
        // Non-digits are rejected and leave the field as it was
        let _ = page.set_timer_field(field, &raw);
    }

    pub fn pop_timer_digit(&mut self, field: TimeField) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let Some(mut raw) = page.timer_fields().map(|f| f.get(field).to_string()) else {
            return;
        };
        raw.pop();
        let _ = page.set_timer_field(field, &raw);
    }

    pub fn start_timer(&mut self) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        match page.start_timer(Instant::now()) {
            Ok(()) => {
                if self.ui_mode != UiMode::Notice {
                    self.ui_mode = UiMode::Normal;
                }
            }
            Err(e) => self.show_notice(e.to_string()),
        }
    }

    pub fn refresh(&mut self) {
        if let Some(page) = self.page.as_mut() {
            if page.refresh() {
                self.selected_index = 0;
                self.input.clear();
            }
        }
    }

    /// Drive the page timer and react to its events
    pub fn tick(&mut self, now: Instant) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        for event in page.poll(now) {
            match event {
                TimerEvent::Started { .. } => {
                    self.input.clear();
                    if self.ui_mode == UiMode::Typing {
                        self.ui_mode = UiMode::Normal;
                    }
                }
                TimerEvent::Ended => {
                    if self.config.notify_on_end {
                        notifications::notify_timer_done(page.items().len());
                    }
                }
                TimerEvent::Refreshed => {}
            }
        }
    }

    /// Persist any pending change
    pub fn save(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.flush(self.store.as_mut());
        }
    }

    /// Tear down the current page before exit
    pub fn shutdown(&mut self) {
        self.unmount();
    }
}
