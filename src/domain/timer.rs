use super::enums::TimeField;
use super::error::{FieldError, ValidationError};
use crate::ticker::{Interval, COUNTDOWN_PERIOD};
use std::time::{Duration, Instant};

/// Countdown lifecycle. Durations are whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Active { remaining: u32, total: u32 },
    Completed,
}

impl TimerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Fraction of the countdown elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        match *self {
            Self::Idle => 0.0,
            Self::Active { remaining, total } => {
                if total == 0 {
                    return 1.0;
                }
                let elapsed = total.saturating_sub(remaining) as f64;
                (elapsed / total as f64).clamp(0.0, 1.0)
            }
            Self::Completed => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Active { .. } => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Notifications for the owning page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started { total: u32 },
    Ended,
    Refreshed,
}

/// Raw text of the three countdown fields. Each is empty or up to two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Default for TimerFields {
    fn default() -> Self {
        Self {
            hours: "00".to_string(),
            minutes: "00".to_string(),
            seconds: "00".to_string(),
        }
    }
}

impl TimerFields {
    pub fn get(&self, field: TimeField) -> &str {
        match field {
            TimeField::Hours => &self.hours,
            TimeField::Minutes => &self.minutes,
            TimeField::Seconds => &self.seconds,
        }
    }

    fn get_mut(&mut self, field: TimeField) -> &mut String {
        match field {
            TimeField::Hours => &mut self.hours,
            TimeField::Minutes => &mut self.minutes,
            TimeField::Seconds => &mut self.seconds,
        }
    }

    /// Store raw input for a field. Empty is kept as-is, digits are clamped to range.
    pub fn set(&mut self, field: TimeField, raw: &str) -> Result<(), FieldError> {
        if raw.is_empty() {
            self.get_mut(field).clear();
            return Ok(());
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::NotDigits {
                field,
                input: raw.to_string(),
            });
        }

        // Leading digits beyond u32 still mean "too large"
        let value = raw.parse::<u32>().unwrap_or(u32::MAX).min(field.max());
        *self.get_mut(field) = value.to_string();
        Ok(())
    }

    /// Numeric value of a field, empty counts as zero
    pub fn value(&self, field: TimeField) -> u32 {
        self.get(field).parse::<u32>().unwrap_or(0).min(field.max())
    }

    /// Pad every field to two digits ("" -> "00", "5" -> "05")
    pub fn normalize(&mut self) {
        for field in [TimeField::Hours, TimeField::Minutes, TimeField::Seconds] {
            let value = self.value(field);
            *self.get_mut(field) = format!("{:02}", value);
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.value(TimeField::Hours) * 3600
            + self.value(TimeField::Minutes) * 60
            + self.value(TimeField::Seconds)
    }

    /// Fields showing a number of seconds as HH:MM:SS
    pub fn from_seconds(secs: u32) -> Self {
        Self {
            hours: format!("{:02}", secs / 3600),
            minutes: format!("{:02}", (secs % 3600) / 60),
            seconds: format!("{:02}", secs % 60),
        }
    }
}

/// Countdown timer owned by a page.
///
/// `Completed` is entered on the tick that reaches zero. The `Ended` event can
/// be held back by `end_delay` so the progress display settles at 100% first.
#[derive(Debug)]
pub struct CountdownTimer {
    state: TimerState,
    fields: TimerFields,
    schedule: Option<Interval>,
    end_delay: Duration,
    pending_end: Option<Instant>,
    events: Vec<TimerEvent>,
}

impl CountdownTimer {
    pub fn new(end_delay: Duration) -> Self {
        Self {
            state: TimerState::Idle,
            fields: TimerFields::default(),
            schedule: None,
            end_delay,
            pending_end: None,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// Whether an `Ended` event is still being held back
    pub fn end_pending(&self) -> bool {
        self.pending_end.is_some()
    }

    /// Raw input fields (meaningful while Idle)
    pub fn fields(&self) -> &TimerFields {
        &self.fields
    }

    /// What the countdown display should show right now
    pub fn display_fields(&self) -> TimerFields {
        match self.state {
            TimerState::Active { remaining, .. } => TimerFields::from_seconds(remaining),
            TimerState::Completed => TimerFields::from_seconds(0),
            TimerState::Idle => self.fields.clone(),
        }
    }

    /// Update one field. Ignored outside Idle.
    pub fn set_field(&mut self, field: TimeField, raw: &str) -> Result<(), FieldError> {
        if !self.state.is_idle() {
            return Ok(());
        }
        self.fields.set(field, raw)
    }

    /// Test helper: set all three fields at once. Ignored outside Idle; nothing
    /// changes if any field is rejected. The app goes through `set_field`.
    #[cfg(test)]
    pub fn configure(&mut self, hours: &str, minutes: &str, seconds: &str) -> Result<(), FieldError> {
        if !self.state.is_idle() {
            return Ok(());
        }
        let mut fields = self.fields.clone();
        fields.set(TimeField::Hours, hours)?;
        fields.set(TimeField::Minutes, minutes)?;
        fields.set(TimeField::Seconds, seconds)?;
        self.fields = fields;
        Ok(())
    }

    /// Idle -> Active. Fails when the configured total is zero.
    pub fn start(&mut self, now: Instant) -> Result<(), ValidationError> {
        if !self.state.is_idle() {
            return Ok(());
        }

        self.fields.normalize();
        let total = self.fields.total_seconds();
        if total == 0 {
            return Err(ValidationError::NonPositiveDuration);
        }

        self.state = TimerState::Active {
            remaining: total,
            total,
        };
        self.schedule = Some(Interval::start(now, COUNTDOWN_PERIOD));
        self.events.push(TimerEvent::Started { total });
        log::info!("Countdown started: {}s", total);
        Ok(())
    }

    /// Advance the countdown by one second. Ignored unless Active.
    pub fn tick(&mut self, now: Instant) {
        let TimerState::Active { remaining, total } = self.state else {
            return;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.state = TimerState::Active { remaining, total };
            return;
        }

        self.state = TimerState::Completed;
        self.schedule = None;
        if self.end_delay.is_zero() {
            self.emit_end();
        } else {
            self.pending_end = Some(now + self.end_delay);
        }
    }

    /// Fire every due tick in order, then release a held-back end event
    pub fn poll(&mut self, now: Instant) {
        while let Some(schedule) = self.schedule.as_mut() {
            if !schedule.next_due(now) {
                break;
            }
            self.tick(now);
        }

        if let Some(at) = self.pending_end {
            if now >= at {
                self.pending_end = None;
                self.emit_end();
            }
        }
    }

    fn emit_end(&mut self) {
        self.events.push(TimerEvent::Ended);
        log::info!("Countdown completed");
    }

    /// Completed -> Idle, clearing the fields. Returns false outside Completed.
    pub fn refresh(&mut self) -> bool {
        if !self.state.is_completed() {
            return false;
        }
        // A held-back end still fires before the reset
        if self.pending_end.take().is_some() {
            self.emit_end();
        }
        self.state = TimerState::Idle;
        self.fields = TimerFields::default();
        self.events.push(TimerEvent::Refreshed);
        log::info!("Countdown refreshed");
        true
    }

    /// Release the tick schedule and any held-back end event, whatever the state
    pub fn cancel_on_unmount(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("Countdown schedule cancelled in state {}", self.state.label());
        }
        self.pending_end = None;
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<TimerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel_on_unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn timer() -> CountdownTimer {
        CountdownTimer::new(Duration::ZERO)
    }

    #[test]
    fn test_start_with_zero_total_fails() {
        let mut t = timer();
        let result = t.start(Instant::now());
        assert_eq!(result, Err(ValidationError::NonPositiveDuration));
        assert_eq!(t.state(), TimerState::Idle);
        assert!(!t.is_scheduled());
        assert!(t.drain_events().is_empty());
    }

    #[test]
    fn test_five_second_countdown_completes() {
        let mut t = timer();
        t.configure("00", "00", "05").unwrap();
        let now = Instant::now();
        t.start(now).unwrap();
        assert_eq!(t.state(), TimerState::Active { remaining: 5, total: 5 });
        assert_eq!(t.drain_events(), vec![TimerEvent::Started { total: 5 }]);

        for _ in 0..5 {
            t.tick(now);
        }
        assert_eq!(t.state(), TimerState::Completed);
        assert_eq!(t.progress(), 1.0);
        assert!(!t.is_scheduled());
        assert_eq!(t.drain_events(), vec![TimerEvent::Ended]);
    }

    #[test]
    fn test_remaining_is_monotonic_and_hits_zero_once() {
        let mut t = timer();
        t.configure("", "1", "30").unwrap();
        let now = Instant::now();
        t.start(now).unwrap();
        t.drain_events();

        let mut last = u32::MAX;
        let mut ticks = 0;
        while let TimerState::Active { remaining, .. } = t.state() {
            assert!(remaining <= last);
            assert!(remaining > 0);
            last = remaining;
            t.tick(now);
            ticks += 1;
        }
        assert_eq!(ticks, 90);
        assert_eq!(t.state(), TimerState::Completed);

        // Extra ticks never re-finalize
        t.tick(now);
        t.tick(now);
        assert_eq!(t.drain_events(), vec![TimerEvent::Ended]);
    }

    #[test]
    fn test_progress_fraction() {
        let state = TimerState::Active { remaining: 3, total: 4 };
        assert_eq!(state.progress(), 0.25);
        assert_eq!(TimerState::Idle.progress(), 0.0);
        assert_eq!(TimerState::Completed.progress(), 1.0);
    }

    #[test]
    fn test_poll_drives_ticks_from_schedule() {
        let mut t = timer();
        t.configure("0", "0", "3").unwrap();
        let start = Instant::now();
        t.start(start).unwrap();

        t.poll(start + Duration::from_millis(500));
        assert_eq!(t.state(), TimerState::Active { remaining: 3, total: 3 });

        t.poll(start + Duration::from_millis(1000));
        assert_eq!(t.state(), TimerState::Active { remaining: 2, total: 3 });

        // A late poll catches up without overshooting
        t.poll(start + Duration::from_secs(10));
        assert_eq!(t.state(), TimerState::Completed);
        assert_eq!(
            t.drain_events(),
            vec![TimerEvent::Started { total: 3 }, TimerEvent::Ended]
        );
    }

    #[test]
    fn test_end_event_held_back_by_delay() {
        let mut t = CountdownTimer::new(Duration::from_secs(1));
        t.configure("0", "0", "1").unwrap();
        let start = Instant::now();
        t.start(start).unwrap();
        t.drain_events();

        let reached_zero = start + Duration::from_secs(1);
        t.poll(reached_zero);
        assert_eq!(t.state(), TimerState::Completed);
        assert_eq!(t.progress(), 1.0);
        assert!(t.end_pending());
        assert!(t.drain_events().is_empty());

        t.poll(reached_zero + Duration::from_millis(999));
        assert!(t.drain_events().is_empty());

        t.poll(reached_zero + Duration::from_secs(1));
        assert!(!t.end_pending());
        assert_eq!(t.drain_events(), vec![TimerEvent::Ended]);
    }

    #[test]
    fn test_refresh_during_end_delay_still_ends() {
        let mut t = CountdownTimer::new(Duration::from_secs(1));
        t.configure("0", "0", "1").unwrap();
        let start = Instant::now();
        t.start(start).unwrap();
        t.drain_events();

        t.poll(start + Duration::from_secs(1));
        assert!(t.end_pending());

        assert!(t.refresh());
        assert!(!t.end_pending());
        t.poll(start + Duration::from_secs(5));
        assert_eq!(
            t.drain_events(),
            vec![TimerEvent::Ended, TimerEvent::Refreshed]
        );
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn test_refresh_only_from_completed() {
        let mut t = timer();
        assert!(!t.refresh());

        t.configure("0", "0", "1").unwrap();
        let now = Instant::now();
        t.start(now).unwrap();
        assert!(!t.refresh());

        t.tick(now);
        assert!(t.refresh());
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.fields(), &TimerFields::default());
        assert_eq!(t.progress(), 0.0);
        assert_eq!(
            t.drain_events(),
            vec![
                TimerEvent::Started { total: 1 },
                TimerEvent::Ended,
                TimerEvent::Refreshed
            ]
        );
    }

    #[test]
    fn test_no_idle_to_completed_or_completed_to_active() {
        let mut t = timer();
        let now = Instant::now();
        t.tick(now);
        assert_eq!(t.state(), TimerState::Idle);

        t.configure("0", "0", "1").unwrap();
        t.start(now).unwrap();
        t.tick(now);
        assert_eq!(t.state(), TimerState::Completed);

        t.start(now).unwrap();
        assert_eq!(t.state(), TimerState::Completed);
    }

    #[test]
    fn test_cancel_on_unmount_releases_schedule() {
        let mut t = timer();
        t.configure("0", "1", "0").unwrap();
        let start = Instant::now();
        t.start(start).unwrap();
        assert!(t.is_scheduled());

        t.cancel_on_unmount();
        assert!(!t.is_scheduled());

        t.poll(start + Duration::from_secs(5));
        assert_eq!(t.state(), TimerState::Active { remaining: 60, total: 60 });
    }

    #[test]
    fn test_fields_clamp_and_reject() {
        let mut fields = TimerFields::default();
        fields.set(TimeField::Hours, "99").unwrap();
        assert_eq!(fields.hours, "23");
        fields.set(TimeField::Minutes, "75").unwrap();
        assert_eq!(fields.minutes, "59");
        fields.set(TimeField::Seconds, "").unwrap();
        assert_eq!(fields.seconds, "");

        let err = fields.set(TimeField::Seconds, "1a").unwrap_err();
        assert!(matches!(err, FieldError::NotDigits { field: TimeField::Seconds, .. }));
        assert_eq!(fields.seconds, "");
    }

    #[test]
    fn test_normalize_pads_empty_and_single_digits() {
        let mut fields = TimerFields {
            hours: String::new(),
            minutes: "5".to_string(),
            seconds: "07".to_string(),
        };
        fields.normalize();
        assert_eq!(
            fields,
            TimerFields {
                hours: "00".to_string(),
                minutes: "05".to_string(),
                seconds: "07".to_string(),
            }
        );
        assert_eq!(fields.total_seconds(), 307);
    }

    #[test]
    fn test_configure_ignored_while_active() {
        let mut t = timer();
        t.configure("0", "0", "9").unwrap();
        t.start(Instant::now()).unwrap();
        t.configure("1", "1", "1").unwrap();
        assert_eq!(t.fields().total_seconds(), 9);
    }

    #[test]
    fn test_display_fields_show_remaining_while_active() {
        let mut t = timer();
        t.configure("1", "0", "1").unwrap();
        let now = Instant::now();
        t.start(now).unwrap();
        t.tick(now);
        t.tick(now);
        assert_eq!(t.display_fields(), TimerFields::from_seconds(3599));
        assert_eq!(t.display_fields().seconds, "59");
    }

    #[test]
    fn test_display_fields_read_zero_once_completed() {
        let mut t = timer();
        t.configure("0", "0", "5").unwrap();
        let now = Instant::now();
        t.start(now).unwrap();
        for _ in 0..5 {
            t.tick(now);
        }
        assert_eq!(t.state(), TimerState::Completed);
        assert_eq!(t.display_fields(), TimerFields::from_seconds(0));
        assert_eq!(t.fields().seconds, "05");
    }
}
