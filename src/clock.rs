use std::time::{Duration, Instant};

/// The driver's tick scheduler.  At most one tick is ever pending; the
/// deadline is cleared when it fires or when the clock is cancelled, and a
/// new one is armed from the game's current speed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Clock {
    deadline: Option<Instant>,
}

impl Clock {
    pub(crate) fn new() -> Clock {
        Clock::default()
    }

    /// Time between ticks at `speed` ticks per second
    pub(crate) fn period(speed: u32) -> Duration {
        Duration::from_secs(1) / speed.max(1)
    }

    /// Schedule the next tick one period after `now`, unless one is already
    /// scheduled
    pub(crate) fn arm(&mut self, now: Instant, speed: u32) {
        if self.deadline.is_none() {
            self.deadline = Some(now + Clock::period(speed));
        }
    }

    /// Drop any scheduled tick
    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    /// How long to wait from `now` until the next tick, or `None` if no tick
    /// is scheduled
    pub(crate) fn wait(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// If the scheduled tick is due at `now`, consume it and return `true`
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
