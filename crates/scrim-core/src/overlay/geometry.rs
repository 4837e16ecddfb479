use crate::coords::{Rect, Vec2};

use super::host::{OverlayParent, ViewportFrame};

/// Derives the overlay bounds for the current viewport frame.
///
/// Pure function of the snapshot: overlay geometry has no source of
/// truth of its own and is recomputed from the viewport on every sync.
///
/// - Parented under the viewport, the overlay covers the viewport's own
///   coordinate space, so its bounds start at the origin.
/// - Parented under the wrapper, the viewport's bounds are carried into
///   the wrapper's space.
pub fn overlay_bounds(frame: ViewportFrame, parent: OverlayParent) -> Rect {
    let local = Rect::from_origin_size(Vec2::zero(), frame.viewport.size());
    match parent {
        OverlayParent::Viewport => local,
        OverlayParent::Wrapper => local.translated(frame.origin_in_wrapper),
    }
}
