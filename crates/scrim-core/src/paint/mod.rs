//! Paint model shared between the fade logic and host renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid fills, linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Paint source for filling geometry.
///
/// Deliberately a two-variant enum: the fade decoration only ever emits
/// solid fills and vertical linear gradients. Hosts with richer paint
/// systems map these onto their own types.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}
