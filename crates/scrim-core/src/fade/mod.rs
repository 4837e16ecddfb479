//! Edge-fade decision logic.
//!
//! Split along the natural seams of the problem:
//! - [`config`] — the mutable knobs the wrapping component owns
//! - [`activity`] — "is the user scrolling right now", with debounced decay
//! - [`content`] — per-strategy predicates for whether content hangs off
//!   the top/bottom edge
//! - [`visibility`] — combines config and content into a paint decision
//! - [`gradient`] — turns that decision into draw commands
//!
//! Everything here is pure state-machine code: no host handles, no
//! clocks of its own, no I/O.

pub mod activity;
pub mod config;
pub mod content;
pub mod gradient;
pub mod visibility;

pub use activity::ScrollActivityTracker;
pub use config::FadeConfig;
pub use content::{BoundedScrollModel, ContentModel, ContentState, VirtualizedListModel};
pub use gradient::{effective_fade_height, render_fades, resolve_background};
pub use visibility::{evaluate, EdgeVisibility};
