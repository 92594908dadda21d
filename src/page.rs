use crate::domain::{
    allowed_ops, format_clock, AllowedOps, CountdownTimer, FieldError, Item, ItemList, ListKind,
    TimeField, TimerEvent, TimerFields, TimerState, ValidationError,
};
use crate::persistence::{KeyValueStore, Persisted};
use std::time::{Duration, Instant};

/// A mounted list page: its persisted items plus, for the to-do list, the countdown that gates them.
///
/// Dropping the page drops the timer, which releases its tick schedule.
#[derive(Debug)]
pub struct ListPage {
    kind: ListKind,
    list: Persisted<ItemList>,
    timer: Option<CountdownTimer>,
}

impl ListPage {
    /// Load the list for `kind` from the store
    pub fn mount(kind: ListKind, store: &dyn KeyValueStore, completion_delay: Duration) -> Self {
        let list: Persisted<ItemList> = Persisted::mount(store, kind.storage_key());
        log::info!("Mounted {:?} page with {} items", kind, list.get().len());
        Self {
            kind,
            list,
            timer: kind.has_timer().then(|| CountdownTimer::new(completion_delay)),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn items(&self) -> &[Item] {
        self.list.get().items()
    }

    pub fn list(&self) -> &ItemList {
        self.list.get()
    }

    pub fn timer(&self) -> Option<&CountdownTimer> {
        self.timer.as_ref()
    }

    /// Timer state, Idle for pages without a timer
    pub fn timer_state(&self) -> TimerState {
        self.timer
            .as_ref()
            .map_or(TimerState::Idle, CountdownTimer::state)
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer_state().is_active()
    }

    pub fn is_timer_completed(&self) -> bool {
        self.timer_state().is_completed()
    }

    pub fn allowed_ops(&self) -> AllowedOps {
        match &self.timer {
            Some(timer) => allowed_ops(&timer.state()),
            None => AllowedOps::unrestricted(),
        }
    }

    fn edit_ops(&self) -> AllowedOps {
        let mut ops = self.allowed_ops();
        ops.can_edit &= self.kind.editable();
        ops
    }

    /// Item id at a row index
    pub fn id_at(&self, index: usize) -> Option<String> {
        self.items().get(index).map(|item| item.id.clone())
    }

    /// Add, or commit the open edit session
    pub fn submit(&mut self, text: &str) -> Result<bool, ValidationError> {
        let ops = self.edit_ops();
        let kind = self.kind;
        self.list.update(|list| match list.submit(&ops, kind, text) {
            Ok(changed) => (changed, Ok(changed)),
            Err(e) => (false, Err(e)),
        })
    }

    /// Open an edit session, returning the text for the input bar
    pub fn begin_edit(&mut self, id: &str) -> Option<String> {
        let ops = self.edit_ops();
        self.list.update_transient(|list| list.begin_edit(&ops, id))
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.list.update_transient(ItemList::cancel_edit)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let ops = self.allowed_ops();
        self.list.update(|list| {
            let changed = list.toggle_completed(&ops, id);
            (changed, changed)
        })
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let ops = self.allowed_ops();
        self.list.update(|list| {
            let changed = list.delete(&ops, id);
            (changed, changed)
        })
    }

    pub fn set_timer_field(&mut self, field: TimeField, raw: &str) -> Result<(), FieldError> {
        match self.timer.as_mut() {
            Some(timer) => timer.set_field(field, raw),
            None => Ok(()),
        }
    }

    /// Raw countdown fields, None without a timer
    pub fn timer_fields(&self) -> Option<&TimerFields> {
        self.timer.as_ref().map(CountdownTimer::fields)
    }

    pub fn start_timer(&mut self, now: Instant) -> Result<(), ValidationError> {
        let Some(timer) = self.timer.as_mut() else {
            return Ok(());
        };
        timer.start(now)?;
        log::debug!("Locking {:?} list for {}", self.kind, format_clock(timer.fields()));
        Ok(())
    }

    /// Completed -> Idle and clear the list. Returns false when not Completed.
    pub fn refresh(&mut self) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.refresh() {
            return false;
        }
        let ops = self.allowed_ops();
        self.list.update(|list| {
            let changed = list.clear(&ops);
            (changed, ())
        });
        true
    }

    /// Drive the countdown and react to its events
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        let Some(timer) = self.timer.as_mut() else {
            return Vec::new();
        };
        timer.poll(now);
        let events = timer.drain_events();

        for event in &events {
            if let TimerEvent::Started { .. } = event {
                // Input is hidden while the timer runs, so a half-done edit is dropped
                self.list.update_transient(ItemList::cancel_edit);
            }
        }
        events
    }

    pub fn flush(&mut self, store: &mut dyn KeyValueStore) {
        self.list.flush(store);
    }

    /// Release the countdown schedule before the page goes away
    pub fn unmount(&mut self, store: &mut dyn KeyValueStore) {
        if let Some(timer) = self.timer.as_mut() {
            if timer.is_scheduled() {
                log::info!("Countdown dropped with the {:?} page", self.kind);
            }
            timer.cancel_on_unmount();
        }
        self.flush(store);
    }
}
