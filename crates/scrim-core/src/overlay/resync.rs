use std::time::{Duration, Instant};

/// Delay before the follow-up re-sync attempt.
///
/// At the moment a resize/repaint notification arrives, the host's own
/// layout or paint pass may not have finished, so one extra pass runs a
/// frame-ish later. Best-effort convergence, not a guarantee.
const FOLLOW_UP_DELAY: Duration = Duration::from_millis(16);

/// Coalesces overlay re-sync requests and defers them to the next
/// event-loop iterations.
///
/// Any number of [`request`](Self::request) calls within one tick
/// collapse into a single pending pass plus one fixed-delay follow-up —
/// bounded retries instead of hand-scheduled callbacks per triggering
/// event. The work performed per pass (geometry push + restack) is
/// idempotent, so an extra pass is a harmless no-op and there is no
/// cancellation path.
#[derive(Debug, Default)]
pub struct ResyncScheduler {
    /// Deadline of the next immediate pass.
    due: Option<Instant>,
    /// Deadline of the follow-up pass.
    follow_up: Option<Instant>,
}

impl ResyncScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a re-sync for the next tick plus one follow-up.
    /// Requests made while a pass is already pending coalesce into it.
    pub fn request(&mut self, now: Instant) {
        self.due = Some(now);
        self.follow_up = Some(now + FOLLOW_UP_DELAY);
    }

    /// Returns `true` when a re-sync pass should run now. At most one
    /// pass per tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.due.is_some_and(|t| now >= t) {
            self.due = None;
            return true;
        }
        if self.follow_up.is_some_and(|t| now >= t) {
            self.follow_up = None;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.due.is_none() && self.follow_up.is_none()
    }
}
