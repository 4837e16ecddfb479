/// Edge-visibility capability of the wrapped content.
///
/// Implementations are cheap read-only snapshots, recomputed from the
/// live content at query time — never stored, so they cannot go stale.
pub trait ContentModel {
    /// Whether the content extends beyond the viewport at all.
    fn is_scrollable(&self) -> bool;

    /// Whether content hangs off the top edge.
    fn should_show_top_fade(&self) -> bool;

    /// Whether content hangs off the bottom edge.
    fn should_show_bottom_fade(&self) -> bool;
}

/// Content exposing a single scroll offset and a maximum offset —
/// anything hosted in a plain scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedScrollModel {
    scroll_offset: f32,
    max_scroll_offset: f32,
}

impl BoundedScrollModel {
    /// Clamps so that `0 ≤ scroll_offset ≤ max_scroll_offset` holds by
    /// construction.
    pub fn new(scroll_offset: f32, max_scroll_offset: f32) -> Self {
        let max_scroll_offset = max_scroll_offset.max(0.0);
        Self {
            scroll_offset: scroll_offset.clamp(0.0, max_scroll_offset),
            max_scroll_offset,
        }
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[inline]
    pub fn max_scroll_offset(&self) -> f32 {
        self.max_scroll_offset
    }
}

impl ContentModel for BoundedScrollModel {
    fn is_scrollable(&self) -> bool {
        self.max_scroll_offset > 0.0
    }

    fn should_show_top_fade(&self) -> bool {
        self.scroll_offset > 0.0
    }

    fn should_show_bottom_fade(&self) -> bool {
        self.scroll_offset < self.max_scroll_offset
    }
}

/// Content that renders only currently-visible rows.
///
/// A virtualized list exposes no reliable aggregate scroll range, so
/// edge visibility is derived from the geometry of the realized rows
/// instead of an offset/maximum pair. Offsets are in viewport space:
/// negative `first_row_top` means the first visible row is partially
/// clipped above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VirtualizedListModel {
    pub item_count: usize,
    /// Uniform row height; 0 when rows are of unknown or mixed height.
    pub row_height: f32,
    /// Top edge of the first logically-visible row, viewport space.
    /// `None` when row geometry cannot be resolved.
    pub first_row_top: Option<f32>,
    /// Bottom edge of the last row, viewport space. `None` when row
    /// geometry cannot be resolved.
    pub last_row_bottom: Option<f32>,
    pub viewport_height: f32,
    /// Host scrollbar maximum — the fallback signal when uniform-row
    /// arithmetic is unavailable.
    pub scroll_range: f32,
}

impl ContentModel for VirtualizedListModel {
    fn is_scrollable(&self) -> bool {
        if self.item_count > 0 && self.row_height > 0.0 {
            self.row_height * self.item_count as f32 > self.viewport_height
        } else {
            // Rows of non-uniform height: trust the host scrollbar.
            self.scroll_range > 0.0
        }
    }

    fn should_show_top_fade(&self) -> bool {
        self.first_row_top.is_some_and(|top| top < 0.0)
    }

    fn should_show_bottom_fade(&self) -> bool {
        self.last_row_bottom.is_some_and(|bottom| bottom > self.viewport_height)
    }
}

/// Tagged content variant, chosen by the wrapping component at
/// construction time — injected, never discovered by runtime inspection
/// of the widget tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentState {
    Bounded(BoundedScrollModel),
    Virtualized(VirtualizedListModel),
}

impl ContentModel for ContentState {
    fn is_scrollable(&self) -> bool {
        match self {
            ContentState::Bounded(m) => m.is_scrollable(),
            ContentState::Virtualized(m) => m.is_scrollable(),
        }
    }

    fn should_show_top_fade(&self) -> bool {
        match self {
            ContentState::Bounded(m) => m.should_show_top_fade(),
            ContentState::Virtualized(m) => m.should_show_top_fade(),
        }
    }

    fn should_show_bottom_fade(&self) -> bool {
        match self {
            ContentState::Bounded(m) => m.should_show_bottom_fade(),
            ContentState::Virtualized(m) => m.should_show_bottom_fade(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── bounded ───────────────────────────────────────────────────────────

    #[test]
    fn bounded_at_top() {
        let m = BoundedScrollModel::new(0.0, 100.0);
        assert!(m.is_scrollable());
        assert!(!m.should_show_top_fade());
        assert!(m.should_show_bottom_fade());
    }

    #[test]
    fn bounded_mid_scroll() {
        let m = BoundedScrollModel::new(50.0, 100.0);
        assert!(m.should_show_top_fade());
        assert!(m.should_show_bottom_fade());
    }

    #[test]
    fn bounded_at_bottom() {
        let m = BoundedScrollModel::new(100.0, 100.0);
        assert!(m.should_show_top_fade());
        assert!(!m.should_show_bottom_fade());
    }

    #[test]
    fn bounded_unscrollable() {
        let m = BoundedScrollModel::new(0.0, 0.0);
        assert!(!m.is_scrollable());
        assert!(!m.should_show_top_fade());
        assert!(!m.should_show_bottom_fade());
    }

    #[test]
    fn bounded_constructor_clamps_offset() {
        let m = BoundedScrollModel::new(250.0, 100.0);
        assert_eq!(m.scroll_offset(), 100.0);
        let m = BoundedScrollModel::new(-10.0, 100.0);
        assert_eq!(m.scroll_offset(), 0.0);
    }

    // ── virtualized ───────────────────────────────────────────────────────

    fn fifty_rows() -> VirtualizedListModel {
        VirtualizedListModel {
            item_count: 50,
            row_height: 20.0,
            first_row_top: Some(0.0),
            last_row_bottom: Some(1000.0),
            viewport_height: 400.0,
            scroll_range: 600.0,
        }
    }

    #[test]
    fn virtualized_scrollable_from_row_arithmetic() {
        // 50 rows x 20 px = 1000 px of content against a 400 px viewport.
        assert!(fifty_rows().is_scrollable());

        let short = VirtualizedListModel {
            item_count: 10,
            last_row_bottom: Some(200.0),
            scroll_range: 0.0,
            ..fifty_rows()
        };
        assert!(!short.is_scrollable());
    }

    #[test]
    fn virtualized_scrollable_falls_back_to_scroll_range() {
        // Unknown row height: the scrollbar decides.
        let m = VirtualizedListModel { row_height: 0.0, ..fifty_rows() };
        assert!(m.is_scrollable());

        let m = VirtualizedListModel { row_height: 0.0, scroll_range: 0.0, ..fifty_rows() };
        assert!(!m.is_scrollable());
    }

    #[test]
    fn virtualized_top_fade_when_first_row_clipped_above() {
        let m = VirtualizedListModel { first_row_top: Some(-5.0), ..fifty_rows() };
        assert!(m.should_show_top_fade());

        let m = VirtualizedListModel { first_row_top: Some(0.0), ..fifty_rows() };
        assert!(!m.should_show_top_fade());
    }

    #[test]
    fn virtualized_bottom_fade_when_last_row_below_viewport() {
        assert!(fifty_rows().should_show_bottom_fade());

        let m = VirtualizedListModel { last_row_bottom: Some(400.0), ..fifty_rows() };
        assert!(!m.should_show_bottom_fade());
    }

    #[test]
    fn virtualized_unresolved_geometry_shows_nothing() {
        // Empty model / invalid indices degrade to "no fade", not a fault.
        let m = VirtualizedListModel::default();
        assert!(!m.should_show_top_fade());
        assert!(!m.should_show_bottom_fade());
        assert!(!m.is_scrollable());
    }

    // ── tagged variant ────────────────────────────────────────────────────

    #[test]
    fn content_state_dispatches() {
        let b = ContentState::Bounded(BoundedScrollModel::new(50.0, 100.0));
        assert!(b.should_show_top_fade() && b.should_show_bottom_fade());

        let v = ContentState::Virtualized(fifty_rows());
        assert!(v.is_scrollable());
    }
}
