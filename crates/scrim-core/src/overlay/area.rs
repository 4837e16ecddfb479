use std::time::{Duration, Instant};

use crate::coords::{Rect, Vec2};
use crate::fade::{
    evaluate, render_fades, resolve_background, ContentModel, FadeConfig, ScrollActivityTracker,
};
use crate::scene::{DrawList, ZIndex};

use super::host::{OverlayParent, OverlaySurface, ViewportHost};
use super::resync::ResyncScheduler;
use super::surface::OverlaySurfaceManager;

/// The wrapping component for retained hosts.
///
/// Owns the fade knobs, the activity tracker, and the overlay
/// bookkeeping, and turns the host's notifications into the right
/// combination of repaint requests and deferred re-syncs. Everything the
/// host needs to do in return sits behind the [`ViewportHost`] and
/// [`OverlaySurface`] traits.
///
/// Wiring, in host callback order:
/// - scroll offset changed → [`on_scroll_offset_changed`](Self::on_scroll_offset_changed)
/// - viewport resized → [`on_viewport_resized`](Self::on_viewport_resized)
/// - component shown → [`on_shown`](Self::on_shown)
/// - content repainted → [`on_content_repainted`](Self::on_content_repainted)
/// - every event-loop iteration → [`tick`](Self::tick)
/// - overlay paint event → [`paint`](Self::paint)
#[derive(Debug)]
pub struct FadeArea {
    config: FadeConfig,
    tracker: ScrollActivityTracker,
    surface: OverlaySurfaceManager,
    resync: ResyncScheduler,
}

impl FadeArea {
    /// `parent` picks where the host parents the overlay: the viewport
    /// for generic content, the wrapper for virtualized lists.
    pub fn new(parent: OverlayParent) -> Self {
        let config = FadeConfig::new();
        let tracker = ScrollActivityTracker::new(config.fade_timeout());
        let mut surface = OverlaySurfaceManager::new();
        surface.attach(parent);
        Self {
            config,
            tracker,
            surface,
            resync: ResyncScheduler::new(),
        }
    }

    // ── configuration surface ─────────────────────────────────────────────

    pub fn set_fade_height<H>(&mut self, host: &mut H, height: f32)
    where
        H: ViewportHost + OverlaySurface,
    {
        if self.config.set_fade_height(height) {
            host.request_repaint();
        }
    }

    #[inline]
    pub fn fade_height(&self) -> f32 {
        self.config.fade_height()
    }

    /// Disabling forces the activity state idle and cancels any pending
    /// decay immediately.
    pub fn set_fade_enabled<H>(&mut self, host: &mut H, enabled: bool)
    where
        H: ViewportHost + OverlaySurface,
    {
        if !self.config.set_fade_enabled(enabled) {
            return;
        }
        if !enabled {
            self.tracker.force_idle();
        }
        host.request_repaint();
    }

    #[inline]
    pub fn is_fade_enabled(&self) -> bool {
        self.config.is_fade_enabled()
    }

    /// Coerced to ≥ 1 ms; applies from the next scroll notification.
    pub fn set_fade_timeout(&mut self, timeout: Duration) {
        self.config.set_fade_timeout(timeout);
        self.tracker.set_timeout(self.config.fade_timeout());
    }

    #[inline]
    pub fn fade_timeout(&self) -> Duration {
        self.config.fade_timeout()
    }

    /// Whether a scroll gesture happened within the timeout window.
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_active()
    }

    // ── host notifications ────────────────────────────────────────────────

    /// The vertical scroll offset moved.
    ///
    /// Marks activity and asks for a repaint — during a gesture the
    /// overlay repaints on every offset change so the fades track the
    /// content. Ignored while disabled or when the content cannot
    /// scroll at all.
    pub fn on_scroll_offset_changed<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ViewportHost + OverlaySurface,
    {
        if !self.config.is_fade_enabled() || !host.content_state().is_scrollable() {
            return;
        }
        self.tracker.on_scroll(now);
        host.request_repaint();
    }

    /// The viewport's size or position changed.
    pub fn on_viewport_resized(&mut self, now: Instant) {
        self.resync.request(now);
    }

    /// The wrapping component became visible; deferred overlay work can
    /// now proceed.
    pub fn on_shown(&mut self, now: Instant) {
        self.resync.request(now);
    }

    /// The wrapped content repainted.
    ///
    /// Restacks immediately — hosts reset child stacking during their
    /// paint cycle — and schedules a deferred re-sync for the geometry,
    /// since the host's layout pass may still be in flight.
    pub fn on_content_repainted<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ViewportHost + OverlaySurface,
    {
        self.surface.bring_to_front(host);
        self.resync.request(now);
    }

    /// Event-loop pump: decays the activity flag and runs due re-sync
    /// passes. Call once per iteration.
    pub fn tick<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ViewportHost + OverlaySurface,
    {
        if self.tracker.tick(now) {
            host.request_repaint();
        }
        if self.resync.tick(now) {
            self.surface.sync_geometry(host);
            self.surface.bring_to_front(host);
        }
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Emits this frame's fade commands into `out`, in the overlay's
    /// local coordinate space. A silent no-op while the viewport is
    /// unrealized or nothing is off-screen.
    pub fn paint<H>(&self, host: &H, z: ZIndex, out: &mut DrawList)
    where
        H: ViewportHost,
    {
        let Some(frame) = host.viewport_frame() else {
            return;
        };

        let visibility = evaluate(&self.config, &host.content_state());
        if !visibility.any() {
            return;
        }

        let background =
            resolve_background(host.viewport_background(), host.owner_background());
        let surface = Rect::from_origin_size(Vec2::zero(), frame.viewport.size());
        render_fades(surface, self.config.fade_height(), background, visibility, z, out);
    }
}
