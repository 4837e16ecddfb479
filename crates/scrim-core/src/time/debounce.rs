use std::time::{Duration, Instant};

/// Single-shot, restartable deadline.
///
/// Each [`restart`](Self::restart) replaces any deadline already in
/// flight (last-write-wins), which is what makes the scroll decay a
/// debounce rather than a throttle: the timeout only starts counting
/// from the most recent notification.
///
/// The timer never reads the clock itself; callers pass `now` in, so a
/// test can step time forward deterministically.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, deadline: None }
    }

    /// Replaces the interval. Applies from the next restart; a deadline
    /// already in flight keeps its original expiry.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms (or re-arms) the timer to expire `interval` after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarms the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed, and
    /// disarms. Returns `false` while pending or disarmed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
