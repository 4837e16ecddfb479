use scrim_core::coords::{Rect, Vec2};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, margin).
#[derive(Debug, Clone, Copy, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`; parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Replace the height constraint with `f32::INFINITY` — scroll
    /// containers measure their child at unbounded height so it reports
    /// its natural size.
    #[inline]
    #[must_use]
    pub fn with_infinite_height(self) -> Self {
        Self { max: Vec2::new(self.max.x, f32::INFINITY), ..self }
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Resources available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy)]
pub struct LayoutCtx {
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
}

impl Default for LayoutCtx {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

// ── rect helper ───────────────────────────────────────────────────────────

/// Shrink a rect by `edges` (padding/inset).
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_into_range() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(50.0, 50.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 100.0)), Vec2::new(10.0, 50.0));
        let v = Vec2::new(20.0, 30.0);
        assert_eq!(c.constrain(v), v);
    }

    #[test]
    fn with_infinite_height_keeps_width() {
        let c = Constraints::loose(Vec2::new(100.0, 80.0)).with_infinite_height();
        assert_eq!(c.max.x, 100.0);
        assert!(c.max.y.is_infinite());
    }

    #[test]
    fn inset_rect_applies_edges_and_clamps() {
        let rect = Rect::new(5.0, 5.0, 100.0, 60.0);
        let inner = inset_rect(rect, Edges::symmetric(4.0, 6.0));
        assert_eq!(inner, Rect::new(11.0, 9.0, 88.0, 52.0));

        let tiny = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Edges::all(20.0));
        assert!(tiny.is_empty());
    }
}
