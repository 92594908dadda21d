use std::time::{Duration, Instant};

/// Default event-poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown period: one tick per second
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Get event-poll duration for a configured rate (0 falls back to the default)
pub fn tick_duration(tick_rate_ms: u64) -> Duration {
    if tick_rate_ms == 0 {
        Duration::from_millis(DEFAULT_TICK_MS)
    } else {
        Duration::from_millis(tick_rate_ms)
    }
}

/// A repeating schedule anchored at its start instant.
///
/// Owning an `Interval` is holding the schedule; dropping it cancels it.
/// Firings are handed out one at a time by `next_due`, so callers process
/// them strictly in order.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    /// Schedule the first firing one period after `now`
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Take one due firing, if any. Call repeatedly to catch up on missed periods.
    pub fn next_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due += self.period;
            true
        } else {
            false
        }
    }
}
