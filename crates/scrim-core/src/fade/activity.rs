use std::time::{Duration, Instant};

use crate::time::DebounceTimer;

/// Tracks whether a scroll gesture happened within the configured
/// timeout window.
///
/// Created idle. Every scroll notification marks the state active and
/// re-arms a single-shot decay timer; the timer firing drops back to
/// idle. Because each notification replaces the deadline, the tracker
/// debounces rather than throttles — the decay counts from the *last*
/// notification.
///
/// Both [`on_scroll`](Self::on_scroll) and [`tick`](Self::tick) return
/// whether a transition occurred. Each transition must be answered with
/// exactly one repaint request by the owner; the tracker itself holds no
/// host handle.
#[derive(Debug)]
pub struct ScrollActivityTracker {
    active: bool,
    timer: DebounceTimer,
}

impl ScrollActivityTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            active: false,
            timer: DebounceTimer::new(timeout),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Applies to the next restart; an in-flight decay keeps its expiry.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timer.set_interval(timeout);
    }

    /// Scroll-offset-changed notification.
    ///
    /// Marks active and re-arms the decay timer. Returns `true` on the
    /// idle→active transition.
    pub fn on_scroll(&mut self, now: Instant) -> bool {
        self.timer.restart(now);
        let was_idle = !self.active;
        self.active = true;
        if was_idle {
            log::trace!("scroll activity: idle -> active");
        }
        was_idle
    }

    /// Event-loop pump. Fires the decay timer when due. Returns `true`
    /// on the active→idle transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire(now) && self.active {
            self.active = false;
            log::trace!("scroll activity: active -> idle");
            return true;
        }
        false
    }

    /// Immediate idle, cancelling any pending decay. Used when the fade
    /// effect is disabled. Returns `true` on the active→idle transition.
    pub fn force_idle(&mut self) -> bool {
        self.timer.cancel();
        std::mem::replace(&mut self.active, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);
    const TIMEOUT: Duration = Duration::from_millis(250);

    #[test]
    fn starts_idle() {
        let tracker = ScrollActivityTracker::new(TIMEOUT);
        assert!(!tracker.is_active());
    }

    #[test]
    fn activates_then_decays_after_timeout() {
        let t0 = Instant::now();
        let mut tracker = ScrollActivityTracker::new(TIMEOUT);

        assert!(tracker.on_scroll(t0));
        assert!(tracker.is_active());

        assert!(!tracker.tick(t0 + 100 * MS));
        assert!(tracker.is_active());

        assert!(tracker.tick(t0 + 250 * MS));
        assert!(!tracker.is_active());
    }

    #[test]
    fn debounce_many_notifications_two_transitions_total() {
        // N notifications spaced under the timeout: exactly one
        // idle->active transition, then exactly one active->idle after
        // the last notification plus the timeout.
        let t0 = Instant::now();
        let mut tracker = ScrollActivityTracker::new(TIMEOUT);

        let mut transitions = 0;
        let mut last = t0;
        for i in 0..6 {
            let now = t0 + i * 100 * MS;
            if tracker.on_scroll(now) {
                transitions += 1;
            }
            if tracker.tick(now) {
                transitions += 1;
            }
            last = now;
        }
        assert_eq!(transitions, 1);
        assert!(tracker.is_active());

        // Decay has not happened at last + timeout - 1ms...
        assert!(!tracker.tick(last + 249 * MS));
        // ...and happens exactly once at last + timeout.
        assert!(tracker.tick(last + 250 * MS));
        assert!(!tracker.tick(last + 500 * MS));
        assert!(!tracker.is_active());
    }

    #[test]
    fn notification_never_shortens_the_window() {
        let t0 = Instant::now();
        let mut tracker = ScrollActivityTracker::new(TIMEOUT);

        tracker.on_scroll(t0);
        tracker.on_scroll(t0 + 200 * MS);
        // The first deadline (t0 + 250) has passed, but the re-arm moved
        // it to t0 + 450.
        assert!(!tracker.tick(t0 + 300 * MS));
        assert!(tracker.is_active());
        assert!(tracker.tick(t0 + 450 * MS));
    }

    #[test]
    fn force_idle_cancels_pending_decay() {
        let t0 = Instant::now();
        let mut tracker = ScrollActivityTracker::new(TIMEOUT);

        tracker.on_scroll(t0);
        assert!(tracker.force_idle());
        assert!(!tracker.is_active());
        // Cancelled timer must not fire a second transition later.
        assert!(!tracker.tick(t0 + 300 * MS));
        // Idempotent.
        assert!(!tracker.force_idle());
    }
}
