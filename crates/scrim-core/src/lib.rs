//! Scrim core — decision logic for edge-fade scroll decoration.
//!
//! A "scrim" is a pair of transient gradients at the top and bottom of a
//! scrollable region, hinting that more content lies off-screen and
//! intensifying briefly while the user scrolls. This crate owns everything
//! that can be decided without a live toolkit:
//!
//! - [`fade`] — scroll-activity tracking, per-edge visibility predicates
//!   for bounded and virtualized content, and the gradient draw-command
//!   emitter
//! - [`overlay`] — bookkeeping for a retained, non-interactive overlay
//!   surface: geometry derivation, deferred re-sync scheduling, stacking
//!   re-assertion
//! - [`coords`], [`paint`], [`scene`] — the logical-pixel geometry, color,
//!   and draw-stream primitives the above are expressed in
//!
//! The host toolkit (event loop, widget tree, gradient rasterizer, timers)
//! stays on the other side of the narrow traits in [`overlay::host`]; this
//! crate never blocks and never panics on missing host state — a scrim is
//! decorative, so every degraded path is a silent no-op.

pub mod coords;
pub mod fade;
pub mod logging;
pub mod overlay;
pub mod paint;
pub mod scene;
pub mod time;
