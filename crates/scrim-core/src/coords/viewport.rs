use super::Vec2;

/// Visible-area size in logical pixels, snapshotted from the host at
/// query time. Not a source of truth — re-read it whenever geometry may
/// have changed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
