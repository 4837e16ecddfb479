/// Stacking layer for draw items. Higher layers paint later, so they
/// end up on top.
///
/// A plain `i32` wrapper; the derived integer ordering is all the draw
/// list needs. The overlay band the fade bands live in is just a very
/// high layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
