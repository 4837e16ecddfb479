use std::time::Duration;

/// Default gradient extent at each edge, in logical pixels.
pub const DEFAULT_FADE_HEIGHT: f32 = 24.0;

/// Default quiet period after the last scroll notification before the
/// activity flag decays.
pub const DEFAULT_FADE_TIMEOUT: Duration = Duration::from_millis(250);

/// Shortest accepted decay timeout. Zero would fire the decay on the
/// same tick as the notification that armed it.
pub const MIN_FADE_TIMEOUT: Duration = Duration::from_millis(1);

/// The fade knobs, owned and mutated by the wrapping component.
///
/// Setters coerce rather than reject (negative heights clamp to zero,
/// sub-millisecond timeouts round up) and report whether the stored
/// value changed, so the owner knows when a repaint is due. Changes take
/// effect on the next paint.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeConfig {
    fade_height: f32,
    fade_timeout: Duration,
    enabled: bool,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_height: DEFAULT_FADE_HEIGHT,
            fade_timeout: DEFAULT_FADE_TIMEOUT,
            enabled: true,
        }
    }
}

impl FadeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gradient extent. Clamped to ≥ 0.
    ///
    /// Returns `true` when the stored value changed (repaint needed).
    pub fn set_fade_height(&mut self, height: f32) -> bool {
        let height = height.max(0.0);
        if self.fade_height == height {
            return false;
        }
        self.fade_height = height;
        true
    }

    #[inline]
    pub fn fade_height(&self) -> f32 {
        self.fade_height
    }

    /// Enables or disables the effect.
    ///
    /// Returns `true` when the stored value changed. The owner is
    /// responsible for forcing the activity tracker idle on disable.
    pub fn set_fade_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        true
    }

    #[inline]
    pub fn is_fade_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the decay timeout. Coerced to at least [`MIN_FADE_TIMEOUT`];
    /// applies to the next timer restart, not one already in flight.
    pub fn set_fade_timeout(&mut self, timeout: Duration) {
        self.fade_timeout = timeout.max(MIN_FADE_TIMEOUT);
    }

    #[inline]
    pub fn fade_timeout(&self) -> Duration {
        self.fade_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = FadeConfig::new();
        assert_eq!(c.fade_height(), 24.0);
        assert_eq!(c.fade_timeout(), Duration::from_millis(250));
        assert!(c.is_fade_enabled());
    }

    #[test]
    fn set_fade_height_clamps_and_reports_change() {
        let mut c = FadeConfig::new();
        assert!(c.set_fade_height(-5.0));
        assert_eq!(c.fade_height(), 0.0);
        // Same value again is a no-op.
        assert!(!c.set_fade_height(-1.0));
    }

    #[test]
    fn set_fade_enabled_reports_change_once() {
        let mut c = FadeConfig::new();
        assert!(!c.set_fade_enabled(true));
        assert!(c.set_fade_enabled(false));
        assert!(!c.set_fade_enabled(false));
    }

    #[test]
    fn set_fade_timeout_coerces_to_minimum() {
        let mut c = FadeConfig::new();
        c.set_fade_timeout(Duration::ZERO);
        assert_eq!(c.fade_timeout(), MIN_FADE_TIMEOUT);

        c.set_fade_timeout(Duration::from_millis(400));
        assert_eq!(c.fade_timeout(), Duration::from_millis(400));
    }
}
