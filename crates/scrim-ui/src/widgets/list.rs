use std::ops::Range;
use std::time::Duration;

use scrim_core::coords::{Rect, Vec2};
use scrim_core::fade::VirtualizedListModel;
use scrim_core::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, Key, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::edge_fade::EdgeFade;

/// A virtualized fixed-row-height list with edge fades.
///
/// Rows are drawn on demand through a row painter closure; only rows
/// intersecting the viewport are realized each frame, so a list with a
/// million rows paints the same handful of rects as one with twenty.
///
/// Because off-screen rows never exist, edge visibility cannot be read
/// off a child rect. It derives from the row geometry instead: the top
/// fade shows while the first visible row starts above the viewport,
/// the bottom fade while the final row ends below it.
pub struct FadeListView {
    row_count: usize,
    row_height: f32,
    row_painter: Box<dyn Fn(&mut Painter, usize, Rect)>,
    /// Current scroll offset in logical pixels (≥ 0).
    pub scroll_offset: f32,
    line_height: f32,
    fade: EdgeFade,
}

impl FadeListView {
    pub fn new(
        row_count: usize,
        row_height: f32,
        row_painter: impl Fn(&mut Painter, usize, Rect) + 'static,
    ) -> Self {
        Self {
            row_count,
            row_height,
            row_painter: Box::new(row_painter),
            scroll_offset: 0.0,
            line_height: row_height.max(1.0),
            fade: EdgeFade::new(),
        }
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    pub fn scroll_to(mut self, offset: f32) -> Self {
        self.scroll_offset = offset.max(0.0);
        self
    }

    pub fn fade_height(mut self, v: f32) -> Self {
        self.fade.set_height(v);
        self
    }

    pub fn fade_timeout(mut self, v: Duration) -> Self {
        self.fade.set_timeout(v);
        self
    }

    pub fn fade_enabled(mut self, on: bool) -> Self {
        self.fade.set_enabled(on);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.fade.set_background(color);
        self
    }

    pub fn is_scrolling(&self) -> bool {
        self.fade.is_scrolling()
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn content_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    fn max_offset(&self, viewport_h: f32) -> f32 {
        (self.content_height() - viewport_h).max(0.0)
    }

    fn clamped_offset(&self, viewport_h: f32) -> f32 {
        self.scroll_offset.clamp(0.0, self.max_offset(viewport_h))
    }

    /// Indices of rows intersecting the viewport at the current offset.
    fn visible_range(&self, viewport_h: f32) -> Range<usize> {
        if self.row_count == 0 || self.row_height <= 0.0 {
            return 0..0;
        }
        let offset = self.clamped_offset(viewport_h);
        let first = (offset / self.row_height).floor() as usize;
        let last = ((offset + viewport_h) / self.row_height).ceil() as usize;
        first.min(self.row_count)..last.min(self.row_count)
    }

    /// Geometry snapshot for the visibility predicates.
    fn content_model(&self, viewport_h: f32) -> VirtualizedListModel {
        let offset = self.clamped_offset(viewport_h);
        let range = self.visible_range(viewport_h);

        let (first_row_top, last_row_bottom) = if range.is_empty() {
            (None, None)
        } else {
            (
                // Top of the first realized row, negative when clipped.
                Some(range.start as f32 * self.row_height - offset),
                // Bottom of the final model row, not the last realized one.
                Some(self.content_height() - offset),
            )
        };

        VirtualizedListModel {
            item_count: self.row_count,
            row_height: self.row_height,
            first_row_top,
            last_row_bottom,
            viewport_height: viewport_h,
            scroll_range: self.max_offset(viewport_h),
        }
    }

    fn apply_scroll(&mut self, delta: f32, viewport_h: f32) {
        let max = self.max_offset(viewport_h);
        let prev = self.scroll_offset;
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max);
        if self.scroll_offset != prev {
            self.fade.notify_scroll(max > 0.0);
        }
    }
}

impl Widget for FadeListView {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        constraints.constrain(Vec2::new(w, self.content_height()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let offset = self.clamped_offset(rect.size.y);
        let range = self.visible_range(rect.size.y);
        log::trace!("list paint: rows {range:?} of {}, offset {offset}", self.row_count);

        painter.push_clip(rect);
        for i in range {
            let row = Rect::new(
                rect.origin.x,
                rect.origin.y + i as f32 * self.row_height - offset,
                rect.size.x,
                self.row_height,
            );
            (self.row_painter)(painter, i, row);
        }
        painter.pop_clip();

        self.fade.paint(painter, rect, &self.content_model(rect.size.y));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::ScrollWheel { delta } => {
                self.apply_scroll(*delta * self.line_height, rect.size.y);
                EventResult::Consumed
            }
            UiEvent::KeyPress { key } => {
                let page = rect.size.y * 0.9;
                match key {
                    Key::ArrowDown => self.apply_scroll(self.line_height, rect.size.y),
                    Key::ArrowUp => self.apply_scroll(-self.line_height, rect.size.y),
                    Key::PageDown => self.apply_scroll(page, rect.size.y),
                    Key::PageUp => self.apply_scroll(-page, rect.size.y),
                    Key::Home => self.apply_scroll(f32::NEG_INFINITY, rect.size.y),
                    Key::End => self.apply_scroll(f32::INFINITY, rect.size.y),
                }
                EventResult::Consumed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::fade::ContentModel;
    use scrim_core::scene::DrawList;

    fn list(rows: usize) -> FadeListView {
        FadeListView::new(rows, 20.0, |p, _i, r| p.fill_rect(r, Color::WHITE))
    }

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 100.0, 200.0);

    // ── virtualization ────────────────────────────────────────────────────

    #[test]
    fn visible_range_covers_partially_clipped_rows() {
        // offset 45 over 20px rows: row 2 starts at -5, row 12 ends at 195.
        let l = list(50).scroll_to(45.0);
        assert_eq!(l.visible_range(200.0), 2..13);
    }

    #[test]
    fn visible_range_at_top_and_bottom() {
        let l = list(50);
        assert_eq!(l.visible_range(200.0), 0..10);
        let l = list(50).scroll_to(f32::INFINITY);
        assert_eq!(l.visible_range(200.0), 40..50);
    }

    #[test]
    fn empty_list_realizes_nothing() {
        let l = list(0);
        assert_eq!(l.visible_range(200.0), 0..0);

        let mut dl = DrawList::new();
        let mut painter = Painter::new(&mut dl, 1.0);
        l.paint(&mut painter, VIEWPORT);
        assert!(dl.is_empty());
    }

    #[test]
    fn paint_realizes_only_visible_rows() {
        let l = list(1_000_000).scroll_to(45.0);
        let mut dl = DrawList::new();
        let mut painter = Painter::new(&mut dl, 1.0);
        l.paint(&mut painter, VIEWPORT);

        // 11 rows + two fade bands (scrolled off both edges).
        assert_eq!(dl.len(), 13);
    }

    // ── content model ─────────────────────────────────────────────────────

    #[test]
    fn model_reports_clipped_first_row() {
        let m = list(50).scroll_to(45.0).content_model(200.0);
        assert_eq!(m.first_row_top, Some(-5.0));
        assert!(m.should_show_top_fade());
        assert!(m.should_show_bottom_fade());
    }

    #[test]
    fn model_at_rest_hides_top_fade() {
        let m = list(50).content_model(200.0);
        assert_eq!(m.first_row_top, Some(0.0));
        assert!(!m.should_show_top_fade());
        assert!(m.should_show_bottom_fade());
    }

    #[test]
    fn model_at_bottom_hides_bottom_fade() {
        let m = list(50).scroll_to(f32::INFINITY).content_model(200.0);
        assert_eq!(m.last_row_bottom, Some(200.0));
        assert!(!m.should_show_bottom_fade());
    }

    #[test]
    fn model_with_flush_first_row_hides_top_fade() {
        // Row-aligned position: the first visible row starts exactly at
        // the viewport top, so nothing is clipped above.
        let m = list(50).scroll_to(40.0).content_model(200.0);
        assert_eq!(m.first_row_top, Some(0.0));
        assert!(!m.should_show_top_fade());
    }

    #[test]
    fn short_list_is_not_scrollable() {
        let m = list(5).content_model(200.0);
        assert!(!m.is_scrollable());
        assert!(!m.should_show_bottom_fade());
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn wheel_scrolls_by_line_height() {
        let mut l = list(50);
        let ctx = LayoutCtx::default();
        l.on_event(&UiEvent::ScrollWheel { delta: 3.0 }, VIEWPORT, &ctx);
        assert_eq!(l.scroll_offset, 60.0);
        assert!(l.is_scrolling());
    }

    #[test]
    fn end_key_clamps_to_last_page() {
        let mut l = list(50);
        let ctx = LayoutCtx::default();
        l.on_event(&UiEvent::KeyPress { key: Key::End }, VIEWPORT, &ctx);
        assert_eq!(l.scroll_offset, 800.0);
    }

    #[test]
    fn scrolling_short_list_keeps_fade_idle() {
        let mut l = list(5);
        let ctx = LayoutCtx::default();
        l.on_event(&UiEvent::ScrollWheel { delta: 3.0 }, VIEWPORT, &ctx);
        assert_eq!(l.scroll_offset, 0.0);
        assert!(!l.is_scrolling());
    }
}
