use super::timer::TimerState;

/// Collection operations and affordances allowed in a timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedOps {
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_toggle: bool,
    pub can_show_input: bool,
}

impl AllowedOps {
    /// Everything allowed (also the policy for lists without a timer)
    pub fn unrestricted() -> Self {
        Self {
            can_add: true,
            can_edit: true,
            can_delete: true,
            can_toggle: true,
            can_show_input: true,
        }
    }

    /// Nothing allowed
    pub fn locked() -> Self {
        Self {
            can_add: false,
            can_edit: false,
            can_delete: false,
            can_toggle: false,
            can_show_input: false,
        }
    }
}

/// Map the timer state to what the list may do
pub fn allowed_ops(state: &TimerState) -> AllowedOps {
    match state {
        TimerState::Idle => AllowedOps::unrestricted(),
        // Completed is read-only until refreshed
        TimerState::Active { .. } | TimerState::Completed => AllowedOps::locked(),
    }
}
