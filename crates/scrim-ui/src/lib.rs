//! Scrim UI — a retained widget layer around `scrim-core`'s fade logic.
//!
//! Provides the two fading containers the decoration exists for:
//!
//! - [`widgets::scroll::FadeScrollView`] wraps any child widget in a
//!   bounded scroll region and fades its top/bottom edges
//! - [`widgets::list::FadeListView`] hosts a uniform-row virtualized
//!   list, realizing only visible rows and deriving edge visibility from
//!   their geometry
//!
//! # Quick start
//!
//! ```rust,ignore
//! use scrim_ui::prelude::*;
//!
//! let mut root: Element = FadeScrollView::new(my_content)
//!     .fade_height(32.0)
//!     .fade_timeout(Duration::from_millis(300))
//!     .background(Color::from_srgb_u8(255, 255, 255, 255))
//!     .into();
//!
//! // Per frame:
//! let mut painter = Painter::new(&mut draw_list, 1.0);
//! root.paint(&mut painter, viewport_rect);
//! // Pass draw_list to your renderer.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type, then use it anywhere an
//! [`widget::Element`] is accepted:
//!
//! ```rust,ignore
//! pub struct MyRows { /* your fields */ }
//!
//! impl Widget for MyRows {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         Vec2::new(constraints.max.x, 1200.0)
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rect(rect, Color::from_srgb_u8(30, 30, 40, 255));
//!     }
//! }
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod widget;
pub mod widgets;

/// Everything needed to build on the fading containers.
pub mod prelude {
    pub use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, Key, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{list::FadeListView, scroll::FadeScrollView};

    // Re-export the core primitives everyone needs.
    pub use scrim_core::coords::{Rect, Vec2, Viewport};
    pub use scrim_core::paint::{Color, Paint};
    pub use scrim_core::scene::{DrawCmd, DrawList, ZIndex};
}
