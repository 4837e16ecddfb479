use crate::coords::{Rect, Vec2, Viewport};
use crate::fade::ContentState;
use crate::paint::Color;

/// Where the overlay surface is parented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayParent {
    /// Directly under the viewport. The right choice for generic
    /// content.
    #[default]
    Viewport,
    /// Under the wrapping component itself. Virtualized list widgets
    /// manage their own internal child stacking and would occlude a
    /// viewport-level overlay.
    Wrapper,
}

/// Snapshot of the viewport's frame, taken from the host at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFrame {
    /// Visible-area size.
    pub viewport: Viewport,
    /// Viewport origin in the wrapping component's coordinate space.
    pub origin_in_wrapper: Vec2,
}

impl ViewportFrame {
    pub fn new(viewport: Viewport, origin_in_wrapper: Vec2) -> Self {
        Self { viewport, origin_in_wrapper }
    }
}

/// Read side of the host: geometry, colors, and content state, all
/// queried on demand so nothing cached here can go stale.
///
/// Replaces upward widget-tree traversal and runtime type inspection
/// with explicit injection: the host decides once what it is and hands
/// the answers over.
pub trait ViewportHost {
    /// Current viewport frame, or `None` while the viewport is not yet
    /// realized (not shown). Every overlay operation defers until this
    /// returns `Some`.
    fn viewport_frame(&self) -> Option<ViewportFrame>;

    /// Viewport background color, if the host resolves one.
    fn viewport_background(&self) -> Option<Color>;

    /// Background of the owning component — the fallback hue.
    fn owner_background(&self) -> Option<Color>;

    /// Content state recomputed from the wrapped content right now.
    fn content_state(&self) -> ContentState;
}

/// Write side of the host: the operations invoked on the overlay
/// surface. All of them must be idempotent — re-syncs are issued
/// repeatedly on purpose.
pub trait OverlaySurface {
    /// Positions and sizes the overlay in its parent's space.
    fn set_overlay_bounds(&mut self, bounds: Rect);

    /// Restacks the overlay above its siblings.
    fn raise_overlay(&mut self);

    /// Asks the host to repaint the overlay surface soon.
    fn request_repaint(&mut self);
}
