use std::cell::RefCell;
use std::time::{Duration, Instant};

use scrim_core::coords::Rect;
use scrim_core::fade::{
    evaluate, render_fades, resolve_background, ContentModel, FadeConfig, ScrollActivityTracker,
};
use scrim_core::paint::Color;

use crate::painter::Painter;

/// Fade state owned by a wrapping widget.
///
/// Bundles the config, the activity tracker, and the background hue so
/// both fading containers share one implementation. The tracker sits in
/// a `RefCell` because decay is driven from the paint pass, which takes
/// `&self` (widgets repaint every frame, so paint time is the natural
/// decay pump here — there is no separate retained-host tick).
pub struct EdgeFade {
    config: FadeConfig,
    tracker: RefCell<ScrollActivityTracker>,
    background: Option<Color>,
}

impl EdgeFade {
    pub fn new() -> Self {
        let config = FadeConfig::new();
        let tracker = RefCell::new(ScrollActivityTracker::new(config.fade_timeout()));
        Self { config, tracker, background: None }
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn set_height(&mut self, height: f32) {
        self.config.set_fade_height(height);
    }

    pub fn height(&self) -> f32 {
        self.config.fade_height()
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.set_fade_timeout(timeout);
        self.tracker.borrow_mut().set_timeout(self.config.fade_timeout());
    }

    pub fn timeout(&self) -> Duration {
        self.config.fade_timeout()
    }

    /// Disabling drops the activity flag and cancels its decay timer.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.set_fade_enabled(enabled) && !enabled {
            self.tracker.borrow_mut().force_idle();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_fade_enabled()
    }

    /// The hue the gradients fade from. Unset falls back to opaque white.
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    // ── activity ──────────────────────────────────────────────────────────

    /// Scroll notification from the owning widget. Ignored while the
    /// effect is disabled or the content cannot scroll.
    pub fn notify_scroll(&mut self, scrollable: bool) {
        if !self.config.is_fade_enabled() || !scrollable {
            return;
        }
        self.tracker.get_mut().on_scroll(Instant::now());
    }

    /// Whether a scroll gesture happened within the timeout window.
    /// Hosts that schedule frames lazily keep animating while this holds.
    pub fn is_scrolling(&self) -> bool {
        self.tracker.borrow().is_active()
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Decays the activity flag and paints the fade bands over `rect`
    /// into the painter's overlay z band.
    pub fn paint(&self, painter: &mut Painter, rect: Rect, content: &impl ContentModel) {
        self.tracker.borrow_mut().tick(Instant::now());

        let visibility = evaluate(&self.config, content);
        if !visibility.any() {
            return;
        }

        let background = resolve_background(self.background, None);
        let z = painter.overlay_z();
        render_fades(rect, self.config.fade_height(), background, visibility, z, painter.draw_list);
    }
}

impl Default for EdgeFade {
    fn default() -> Self {
        Self::new()
    }
}
