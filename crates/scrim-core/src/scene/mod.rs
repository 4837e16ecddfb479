//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands emitted by the fade renderer
//!   and by host widgets
//! - provide deterministic ordering (z-index + insertion order), which is
//!   what "bring the overlay to front" means at the draw-stream level
//! - scope commands to scissor rects for scroll clipping

mod cmd;
mod key;
mod list;
mod z_index;

pub use cmd::{DrawCmd, RectCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
