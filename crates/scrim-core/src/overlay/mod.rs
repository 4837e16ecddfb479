//! Retained-overlay bookkeeping.
//!
//! For hosts that keep a widget tree alive between frames, the fades are
//! painted on a dedicated transparent, input-inert surface stacked above
//! the content. That surface needs constant babysitting: hosts resize
//! viewports, restack children during their own paint cycles, and
//! realize widgets late. This module owns that babysitting:
//!
//! - [`host`] — the narrow traits the host implements; no widget-tree
//!   traversal, no event-filter interception
//! - [`geometry`] — derives overlay bounds from the viewport (always
//!   recomputed, never authoritative state of its own)
//! - [`resync`] — coalesced, bounded-retry deferral of re-syncs to the
//!   next event-loop iterations
//! - [`surface`] — geometry push + stacking re-assertion
//! - [`area`] — [`FadeArea`], the wrapping component tying config,
//!   activity, and the overlay together

pub mod area;
pub mod geometry;
pub mod host;
pub mod resync;
pub mod surface;

pub use area::FadeArea;
pub use geometry::overlay_bounds;
pub use host::{OverlayParent, OverlaySurface, ViewportFrame, ViewportHost};
pub use resync::ResyncScheduler;
pub use surface::OverlaySurfaceManager;
