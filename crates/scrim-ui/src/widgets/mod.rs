//! The fading containers and their shared wrapper state.

pub mod edge_fade;
pub mod list;
pub mod scroll;

pub use edge_fade::EdgeFade;
pub use list::FadeListView;
pub use scroll::FadeScrollView;
