use crate::coords::Rect;

use super::geometry::overlay_bounds;
use super::host::{OverlayParent, OverlaySurface, ViewportHost};

/// Keeps the host's overlay surface positioned over the viewport and
/// stacked above the content.
///
/// The manager holds no geometry of its own — every sync re-derives the
/// bounds from a fresh viewport snapshot and pushes them to the host.
/// While the viewport is unrealized, every operation is a deferred
/// no-op; whoever observes the "shown" signal re-requests a sync.
#[derive(Debug, Default)]
pub struct OverlaySurfaceManager {
    parent: OverlayParent,
    attached: bool,
}

impl OverlaySurfaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the overlay under the chosen parent. Called once at
    /// construction of the wrapping component; re-attaching under a
    /// different parent is allowed and takes effect on the next sync.
    pub fn attach(&mut self, parent: OverlayParent) {
        self.parent = parent;
        self.attached = true;
        log::debug!("overlay attached under {parent:?}");
    }

    /// Recomputes overlay bounds from the viewport and pushes them to
    /// the host. Idempotent: repeated calls with an unchanged viewport
    /// push identical bounds. Returns the bounds applied, or `None` when
    /// deferred (unattached or unrealized viewport).
    pub fn sync_geometry<H>(&self, host: &mut H) -> Option<Rect>
    where
        H: ViewportHost + OverlaySurface,
    {
        if !self.attached {
            return None;
        }
        let frame = host.viewport_frame()?;
        if !frame.viewport.is_valid() {
            return None;
        }

        let bounds = overlay_bounds(frame, self.parent);
        log::trace!("overlay sync: bounds {bounds:?}");
        host.set_overlay_bounds(bounds);
        Some(bounds)
    }

    /// Re-asserts the overlay's stacking position.
    ///
    /// Hosts may reset child stacking during their own paint cycle, so
    /// this runs after every content repaint — a repeated re-assertion,
    /// not one-time setup.
    pub fn bring_to_front<H>(&self, host: &mut H)
    where
        H: ViewportHost + OverlaySurface,
    {
        if !self.attached || host.viewport_frame().is_none() {
            return;
        }
        host.raise_overlay();
    }
}
