use std::cell::Cell;
use std::time::Duration;

use scrim_core::coords::{Rect, Vec2};
use scrim_core::fade::BoundedScrollModel;
use scrim_core::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, Key, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

use super::edge_fade::EdgeFade;

/// A scrollable single-child container with edge fades.
///
/// Clips its child to the visible viewport, translates it by the current
/// scroll offset, and paints opaque→transparent gradients at whichever
/// edges still hide content. The fades live in the painter's overlay z
/// band, so they cover the child no matter what the child draws.
///
/// The child is measured at unbounded height so it can report its
/// natural size; the view reports the smaller of that and the height
/// its parent offers, so short content is not padded out.
///
/// # Example
/// ```rust,ignore
/// FadeScrollView::new(my_rows)
///     .fade_height(32.0)
///     .fade_timeout(Duration::from_millis(300))
///     .background(Color::from_srgb_u8(255, 255, 255, 255))
/// ```
pub struct FadeScrollView {
    child: Element,
    /// Current scroll offset in logical pixels (≥ 0, content shifted up
    /// by this amount).
    pub scroll_offset: f32,
    /// Pixels scrolled per line-delta unit.
    line_height: f32,
    /// Whether to draw the scrollbar thumb.
    show_scrollbar: bool,
    /// Cached content height from the most recent measure/paint pass.
    cached_content_height: Cell<f32>,
    /// Called when the scroll offset changes.
    on_scroll: Option<Box<dyn FnMut(f32)>>,
    fade: EdgeFade,
}

impl FadeScrollView {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            scroll_offset: 0.0,
            line_height: 24.0,
            show_scrollbar: true,
            cached_content_height: Cell::new(0.0),
            on_scroll: None,
            fade: EdgeFade::new(),
        }
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    pub fn show_scrollbar(mut self, v: bool) -> Self {
        self.show_scrollbar = v;
        self
    }

    pub fn on_scroll(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub fn scroll_to(mut self, offset: f32) -> Self {
        self.scroll_offset = offset.max(0.0);
        self
    }

    /// Gradient extent at each edge, in logical pixels.
    pub fn fade_height(mut self, v: f32) -> Self {
        self.fade.set_height(v);
        self
    }

    /// Quiet period after the last scroll before activity decays.
    pub fn fade_timeout(mut self, v: Duration) -> Self {
        self.fade.set_timeout(v);
        self
    }

    pub fn fade_enabled(mut self, on: bool) -> Self {
        self.fade.set_enabled(on);
        self
    }

    /// The hue the fades blend toward at the edges — normally the same
    /// color the content is drawn on.
    pub fn background(mut self, color: Color) -> Self {
        self.fade.set_background(color);
        self
    }

    /// True while a scroll gesture is in flight; hosts that render
    /// on-demand keep scheduling frames while this holds.
    pub fn is_scrolling(&self) -> bool {
        self.fade.is_scrolling()
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn measure_content(&self, viewport_w: f32, ctx: &LayoutCtx) -> Vec2 {
        let c = Constraints::loose(Vec2::new(viewport_w, 0.0)).with_infinite_height();
        self.child.measure(c, ctx)
    }

    fn max_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        (content_h - viewport_h).max(0.0)
    }

    fn clamped_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        self.scroll_offset.clamp(0.0, self.max_offset(content_h, viewport_h))
    }

    fn content_rect(&self, rect: Rect, content_h: f32) -> Rect {
        let offset = self.clamped_offset(content_h, rect.size.y);
        Rect::new(rect.origin.x, rect.origin.y - offset, rect.size.x, content_h)
    }

    /// Snapshot for the visibility predicates, recomputed on demand.
    fn content_model(&self, rect: Rect, content_h: f32) -> BoundedScrollModel {
        BoundedScrollModel::new(
            self.clamped_offset(content_h, rect.size.y),
            self.max_offset(content_h, rect.size.y),
        )
    }

    fn scrollbar_rects(&self, rect: Rect, content_h: f32) -> Option<(Rect, Rect)> {
        if !self.show_scrollbar || content_h <= rect.size.y {
            return None;
        }
        let bar_w: f32 = 6.0;
        let bar_x = rect.origin.x + rect.size.x - bar_w;

        // Track: full height of the viewport.
        let track = Rect::new(bar_x, rect.origin.y, bar_w, rect.size.y);

        // Thumb: proportional to viewport / content ratio.
        let ratio = rect.size.y / content_h;
        let thumb_h = (rect.size.y * ratio).max(24.0);
        let offset = self.clamped_offset(content_h, rect.size.y);
        let scroll_range = content_h - rect.size.y;
        let thumb_y = rect.origin.y + (offset / scroll_range) * (rect.size.y - thumb_h);

        let thumb = Rect::new(bar_x, thumb_y, bar_w, thumb_h);
        Some((track, thumb))
    }

    fn apply_scroll(&mut self, delta: f32, content_h: f32, viewport_h: f32) {
        let max = self.max_offset(content_h, viewport_h);
        let prev = self.scroll_offset;
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max);
        if self.scroll_offset != prev {
            self.fade.notify_scroll(max > 0.0);
            if let Some(f) = &mut self.on_scroll {
                f(self.scroll_offset);
            }
        }
    }
}

impl Widget for FadeScrollView {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let content = self.measure_content(max_w, ctx);
        self.cached_content_height.set(content.y);
        constraints.constrain(content)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Remeasure inside paint so layout is always fresh.
        let ctx = painter.layout_ctx();
        let content_h = self.measure_content(rect.size.x, &ctx).y;
        self.cached_content_height.set(content_h);

        let content_rect = self.content_rect(rect, content_h);

        // Clip child to viewport.
        painter.push_clip(rect);
        self.child.paint(painter, content_rect);
        painter.pop_clip();

        // Scrollbar sits outside the clip so it is always visible.
        if let Some((track, thumb)) = self.scrollbar_rects(rect, content_h) {
            painter.fill_rect(track, Color::from_straight(0.15, 0.15, 0.15, 0.8));
            painter.fill_rect(thumb, Color::from_straight(0.55, 0.55, 0.55, 0.9));
        }

        // Edge fades last, in the overlay z band.
        self.fade.paint(painter, rect, &self.content_model(rect, content_h));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let content_h = self.cached_content_height.get();

        match event {
            UiEvent::ScrollWheel { delta } => {
                // Positive delta = scroll down (reveal content below).
                self.apply_scroll(*delta * self.line_height, content_h, rect.size.y);
                EventResult::Consumed
            }

            UiEvent::KeyPress { key } => {
                // Route to the child first — a focused inner widget may
                // want the arrows for itself.
                let content_rect = self.content_rect(rect, content_h);
                if self.child.on_event(event, content_rect, ctx).is_consumed() {
                    return EventResult::Consumed;
                }
                let page = rect.size.y * 0.9;
                match key {
                    Key::ArrowDown => self.apply_scroll(self.line_height, content_h, rect.size.y),
                    Key::ArrowUp => self.apply_scroll(-self.line_height, content_h, rect.size.y),
                    Key::PageDown => self.apply_scroll(page, content_h, rect.size.y),
                    Key::PageUp => self.apply_scroll(-page, content_h, rect.size.y),
                    Key::Home => self.apply_scroll(f32::NEG_INFINITY, content_h, rect.size.y),
                    Key::End => self.apply_scroll(f32::INFINITY, content_h, rect.size.y),
                }
                EventResult::Consumed
            }
        }
    }
}
