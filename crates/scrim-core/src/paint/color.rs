/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are multiplied by `a` (premultiplied alpha).
/// Source-over compositing of the fade bands relies on this.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue at a different straight alpha.
    ///
    /// `a == 0` on the receiver carries no hue, so the result is fully
    /// transparent regardless of the requested alpha.
    #[inline]
    #[must_use]
    pub fn with_straight_alpha(self, a: f32) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, a)
    }

    /// True when the color contributes nothing when composited.
    #[inline]
    pub fn is_fully_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn to_straight_round_trips_hue() {
        let c = Color::from_straight(0.8, 0.4, 0.2, 0.5);
        let (r, g, b, a) = c.to_straight();
        assert!((r - 0.8).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn with_straight_alpha_keeps_hue() {
        let base = Color::from_srgb_u8(200, 100, 50, 255);
        let faded = base.with_straight_alpha(0.0);
        assert!(faded.is_fully_transparent());

        let half = base.with_straight_alpha(0.5);
        let (r0, g0, b0, _) = base.to_straight();
        let (r1, g1, b1, a1) = half.to_straight();
        assert!((r0 - r1).abs() < 1e-6);
        assert!((g0 - g1).abs() < 1e-6);
        assert!((b0 - b1).abs() < 1e-6);
        assert_eq!(a1, 0.5);
    }

    #[test]
    fn transparent_is_fully_transparent() {
        assert!(Color::transparent().is_fully_transparent());
        assert!(!Color::WHITE.is_fully_transparent());
    }
}
