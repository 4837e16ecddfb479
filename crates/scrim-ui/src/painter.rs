use scrim_core::coords::Rect;
use scrim_core::paint::Paint;
use scrim_core::scene::{DrawList, ZIndex};

use crate::constraints::LayoutCtx;

/// Base of the z band reserved for decorative overlays.
///
/// Content z-indices count up from zero per frame; no realistic widget
/// tree reaches this band, so anything placed in it paints above all
/// content. This is what "bring the overlay to front" means in a
/// draw-stream world: the draw list is rebuilt every frame and the fade
/// bands re-assert their band every time.
const OVERLAY_Z_BASE: i32 = 1 << 20;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the core `DrawList` with per-frame z allocation: ordinary fills
/// stack in paint order, overlay fills stack in a reserved band above
/// everything else.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
    overlay_z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, scale: f32) -> Self {
        Self { draw_list, scale, z: 0, overlay_z: OVERLAY_Z_BASE }
    }

    /// Returns a [`LayoutCtx`] matching this painter's frame state.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        LayoutCtx { scale: self.scale }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Axis-aligned rectangle fill, solid or gradient.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── z allocation ──────────────────────────────────────────────────────

    /// Next z in the overlay band. Commands placed here paint above all
    /// content regardless of paint order.
    #[inline]
    pub fn overlay_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.overlay_z);
        self.overlay_z += 1;
        z
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
