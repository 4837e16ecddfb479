use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly
/// enforced; rasterizers may clamp or sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as the
/// geometry being filled. Stops hold premultiplied linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Two-stop gradient running straight down from `y0` to `y1` at `x`.
    ///
    /// The shape every edge fade uses: `from` at the outer edge, `to` at
    /// the inner edge.
    pub fn vertical(x: f32, y0: f32, y1: f32, from: Color, to: Color) -> Self {
        Self {
            start: Vec2::new(x, y0),
            end: Vec2::new(x, y1),
            stops: vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            spread: SpreadMode::Pad,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_is_valid_and_axis_aligned() {
        let g = LinearGradient::vertical(0.0, 0.0, 24.0, Color::WHITE, Color::transparent());
        assert!(g.is_valid());
        assert_eq!(g.start.x, g.end.x);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.spread, SpreadMode::Pad);
    }

    #[test]
    fn degenerate_span_is_invalid() {
        let g = LinearGradient::vertical(0.0, 10.0, 10.0, Color::WHITE, Color::transparent());
        assert!(!g.is_valid());
    }
}
