use serde::{Deserialize, Serialize};

/// Which list a page hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Timer-gated to-do list
    Todo,
    /// Home checklist (no timer)
    Checklist,
}

impl ListKind {
    /// Storage key for this list's persisted items
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Todo => "app_cachedTasks",
            Self::Checklist => "app_checklist_items",
        }
    }

    /// Message shown when submitting empty text
    pub fn empty_prompt(&self) -> &'static str {
        match self {
            Self::Todo => "Please enter something to do...",
            Self::Checklist => "Please enter something to check...",
        }
    }

    /// Placeholder for the input bar
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Todo => "Add something to do...",
            Self::Checklist => "Add something to check...",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Todo => "Todo List",
            Self::Checklist => "Home Checkups",
        }
    }

    /// Whether this list carries a countdown timer
    pub fn has_timer(&self) -> bool {
        matches!(self, Self::Todo)
    }

    /// Whether item text can be edited after creation
    pub fn editable(&self) -> bool {
        matches!(self, Self::Todo)
    }

    /// Whether completed items render struck through
    pub fn strikethrough(&self) -> bool {
        matches!(self, Self::Todo)
    }
}

/// Page route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Todo,
    Checklist,
    NotFound(String),
}

impl Route {
    /// Resolve a path like "/" or "/checkups"
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "" | "/" | "todo" => Self::Todo,
            "/checkups" | "checkups" => Self::Checklist,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Todo => "/",
            Self::Checklist => "/checkups",
            Self::NotFound(path) => path,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::Todo => Some(ListKind::Todo),
            Self::Checklist => Some(ListKind::Checklist),
            Self::NotFound(_) => None,
        }
    }

    /// Route reached by the page-switch key
    pub fn next(&self) -> Self {
        match self {
            Self::Todo => Self::Checklist,
            Self::Checklist | Self::NotFound(_) => Self::Todo,
        }
    }
}

/// One of the three countdown input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    /// Largest accepted value
    pub fn max(&self) -> u32 {
        match self {
            Self::Hours => 23,
            Self::Minutes | Self::Seconds => 59,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Hours,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Hours => Self::Seconds,
            Self::Minutes => Self::Hours,
            Self::Seconds => Self::Minutes,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Input bar focused (adding or editing an item)
    Typing,
    /// Countdown fields focused
    EditingTimer(TimeField),
    /// Blocking notification shown
    Notice,
    /// Asking whether to abandon a running timer
    ConfirmLeave,
}
