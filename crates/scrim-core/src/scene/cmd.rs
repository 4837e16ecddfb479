use crate::coords::Rect;
use crate::paint::{Color, Paint};

use super::{DrawList, ZIndex};

/// Rectangle fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

/// Renderer-agnostic draw command stream.
///
/// The fade decoration only ever fills axis-aligned rectangles — solid
/// for content placeholders, gradient-painted for the fade bands — so a
/// single variant covers the whole stream. Hosts with richer scenes wrap
/// or translate these.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}

impl DrawList {
    /// Records a rectangle fill.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint)));
    }

    /// Records a solid rectangle fill.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Paint::solid(color));
    }
}
