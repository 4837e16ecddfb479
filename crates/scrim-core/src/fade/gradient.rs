use crate::coords::Rect;
use crate::paint::{Color, LinearGradient, Paint};
use crate::scene::{DrawList, ZIndex};

use super::visibility::EdgeVisibility;

/// Caps the gradient extent so the two bands can never meet or overlap.
#[inline]
pub fn effective_fade_height(fade_height: f32, surface_height: f32) -> f32 {
    fade_height.min(surface_height / 2.0)
}

/// Resolves the hue the gradients fade from.
///
/// Order: viewport background, then the owning component's background,
/// then opaque white. A fully transparent candidate carries no usable
/// hue and is skipped.
pub fn resolve_background(viewport: Option<Color>, owner: Option<Color>) -> Color {
    [viewport, owner]
        .into_iter()
        .flatten()
        .find(|c| !c.is_fully_transparent())
        .unwrap_or(Color::WHITE)
}

/// Emits the edge-fade draw commands for a surface.
///
/// Pure with respect to its inputs: the same arguments always produce
/// the same commands. Both bands are plain source-over rectangle fills
/// with a two-stop vertical gradient — fully opaque at the outer edge,
/// fully transparent at the inner edge — and carry no antialiasing
/// hints.
///
/// `surface` is the overlay's rect in the output coordinate space;
/// retained hosts pass `(0, 0, w, h)`. Nothing is emitted for an empty
/// surface or a non-positive effective fade height.
pub fn render_fades(
    surface: Rect,
    fade_height: f32,
    background: Color,
    visibility: EdgeVisibility,
    z: ZIndex,
    out: &mut DrawList,
) {
    if surface.is_empty() || !surface.is_finite() {
        return;
    }

    let fade = effective_fade_height(fade_height, surface.size.y);
    if fade <= 0.0 {
        return;
    }

    let opaque = background.with_straight_alpha(1.0);
    let transparent = background.with_straight_alpha(0.0);

    let x = surface.origin.x;
    let top = surface.origin.y;
    let bottom = surface.origin.y + surface.size.y;

    if visibility.top {
        out.push_rect(
            z,
            Rect::new(x, top, surface.size.x, fade),
            Paint::LinearGradient(LinearGradient::vertical(x, top, top + fade, opaque, transparent)),
        );
    }

    if visibility.bottom {
        out.push_rect(
            z,
            Rect::new(x, bottom - fade, surface.size.x, fade),
            Paint::LinearGradient(LinearGradient::vertical(x, bottom - fade, bottom, transparent, opaque)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const BOTH: EdgeVisibility = EdgeVisibility { top: true, bottom: true };

    fn rects_of(dl: &DrawList) -> Vec<Rect> {
        dl.items()
            .iter()
            .map(|item| {
                let DrawCmd::Rect(ref rc) = item.cmd;
                rc.rect
            })
            .collect()
    }

    // ── effective height ──────────────────────────────────────────────────

    #[test]
    fn effective_height_caps_at_half_surface() {
        assert_eq!(effective_fade_height(60.0, 40.0), 20.0);
        assert_eq!(effective_fade_height(24.0, 400.0), 24.0);
    }

    // ── background resolution ─────────────────────────────────────────────

    #[test]
    fn background_prefers_viewport() {
        let vp = Color::from_srgb_u8(10, 20, 30, 255);
        let owner = Color::from_srgb_u8(200, 0, 0, 255);
        assert_eq!(resolve_background(Some(vp), Some(owner)), vp);
    }

    #[test]
    fn background_skips_fully_transparent_viewport() {
        let owner = Color::from_srgb_u8(200, 0, 0, 255);
        assert_eq!(resolve_background(Some(Color::transparent()), Some(owner)), owner);
    }

    #[test]
    fn background_falls_back_to_white() {
        assert_eq!(resolve_background(None, None), Color::WHITE);
        assert_eq!(
            resolve_background(Some(Color::transparent()), Some(Color::transparent())),
            Color::WHITE
        );
    }

    // ── command emission ──────────────────────────────────────────────────

    #[test]
    fn emits_both_bands_at_the_edges() {
        let mut dl = DrawList::new();
        render_fades(Rect::new(0.0, 0.0, 100.0, 400.0), 24.0, Color::WHITE, BOTH, ZIndex::new(0), &mut dl);

        let rects = rects_of(&dl);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 100.0, 24.0));
        assert_eq!(rects[1], Rect::new(0.0, 376.0, 100.0, 24.0));
    }

    #[test]
    fn band_gradients_run_opaque_to_transparent_inward() {
        let bg = Color::from_srgb_u8(40, 40, 40, 255);
        let mut dl = DrawList::new();
        render_fades(Rect::new(0.0, 0.0, 100.0, 400.0), 24.0, bg, BOTH, ZIndex::new(0), &mut dl);

        let grads: Vec<&LinearGradient> = dl
            .items()
            .iter()
            .map(|item| {
                let DrawCmd::Rect(ref rc) = item.cmd;
                match rc.paint {
                    Paint::LinearGradient(ref g) => g,
                    _ => panic!("fade bands must be gradient fills"),
                }
            })
            .collect();

        // Top: alpha 1 at y=0 fading to 0 at y=fade.
        assert_eq!(grads[0].stops[0].color.a, 1.0);
        assert_eq!(grads[0].stops[1].color.a, 0.0);
        // Bottom: alpha 0 at the inner edge fading to 1 at the surface edge.
        assert_eq!(grads[1].stops[0].color.a, 0.0);
        assert_eq!(grads[1].stops[1].color.a, 1.0);

        // Hue comes from the resolved background on every stop.
        for g in &grads {
            for stop in &g.stops {
                if stop.color.a > 0.0 {
                    let (r, _, _, _) = stop.color.to_straight();
                    assert!((r - 40.0 / 255.0).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn respects_visibility_flags() {
        let mut dl = DrawList::new();
        render_fades(
            Rect::new(0.0, 0.0, 100.0, 400.0),
            24.0,
            Color::WHITE,
            EdgeVisibility { top: false, bottom: true },
            ZIndex::new(0),
            &mut dl,
        );
        let rects = rects_of(&dl);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].origin.y, 376.0);

        dl.clear();
        render_fades(
            Rect::new(0.0, 0.0, 100.0, 400.0),
            24.0,
            Color::WHITE,
            EdgeVisibility::HIDDEN,
            ZIndex::new(0),
            &mut dl,
        );
        assert!(dl.is_empty());
    }

    #[test]
    fn oversize_fade_height_is_capped() {
        let mut dl = DrawList::new();
        render_fades(Rect::new(0.0, 0.0, 100.0, 40.0), 60.0, Color::WHITE, BOTH, ZIndex::new(0), &mut dl);

        let rects = rects_of(&dl);
        assert_eq!(rects[0].size.y, 20.0);
        assert_eq!(rects[1], Rect::new(0.0, 20.0, 100.0, 20.0));
    }

    #[test]
    fn zero_height_or_empty_surface_emits_nothing() {
        let mut dl = DrawList::new();
        render_fades(Rect::new(0.0, 0.0, 100.0, 400.0), 0.0, Color::WHITE, BOTH, ZIndex::new(0), &mut dl);
        assert!(dl.is_empty());

        render_fades(Rect::new(0.0, 0.0, 0.0, 0.0), 24.0, Color::WHITE, BOTH, ZIndex::new(0), &mut dl);
        assert!(dl.is_empty());
    }

    #[test]
    fn offset_surface_places_bands_in_surface_space() {
        let mut dl = DrawList::new();
        render_fades(Rect::new(10.0, 50.0, 80.0, 200.0), 16.0, Color::WHITE, BOTH, ZIndex::new(0), &mut dl);

        let rects = rects_of(&dl);
        assert_eq!(rects[0], Rect::new(10.0, 50.0, 80.0, 16.0));
        assert_eq!(rects[1], Rect::new(10.0, 234.0, 80.0, 16.0));
    }
}
