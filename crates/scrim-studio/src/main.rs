//! Scrim Studio — headless exercise bench for the fading containers.
//!
//! Runs three scripted scenarios against a fixed viewport, printing the
//! draw stream and overlay traffic each step so the fade behavior can be
//! inspected without a window:
//!
//! 1. `FadeScrollView` over a striped column (bounded content)
//! 2. `FadeListView` with a million virtual rows
//! 3. A retained-host simulation driving `FadeArea` directly
//!
//! Pass a step count to lengthen the scroll script: `scrim-studio 24`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use scrim_core::fade::{BoundedScrollModel, ContentState};
use scrim_core::logging::{init_logging, LoggingConfig};
use scrim_core::overlay::{FadeArea, OverlayParent, OverlaySurface, ViewportFrame, ViewportHost};
use scrim_ui::prelude::*;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 240.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let steps = parse_steps()?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           SCRIM STUDIO v0.1            ║");
    println!("  ║   edge fades  ·  headless draw bench   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    run_scroll_view_demo(steps);
    run_list_view_demo(steps);
    run_retained_host_demo(steps);

    println!("  All scenarios complete.");
    println!();
    Ok(())
}

fn parse_steps() -> Result<u32> {
    let arg = match std::env::args().nth(1) {
        None => return Ok(12),
        Some(arg) => arg,
    };
    let steps: u32 = arg
        .parse()
        .with_context(|| format!("step count must be a number, got {arg:?}"))?;
    anyhow::ensure!(steps > 0, "step count must be at least 1");
    Ok(steps)
}

// ── scenario 1: bounded scroll view ───────────────────────────────────────

/// Alternating-color rows; the kind of content the scroll view wraps.
struct StripedColumn {
    rows: usize,
    row_height: f32,
}

impl Widget for StripedColumn {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        Vec2::new(constraints.max.x, self.rows as f32 * self.row_height)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let pad = Edges::symmetric(2.0, 8.0);
        for i in 0..self.rows {
            let row = Rect::new(
                rect.origin.x,
                rect.origin.y + i as f32 * self.row_height,
                rect.size.x,
                self.row_height,
            );
            let shade = if i % 2 == 0 { 235 } else { 245 };
            painter.fill_rect(inset_rect(row, pad), Color::from_srgb_u8(shade, shade, 250, 255));
        }
    }
}

fn run_scroll_view_demo(steps: u32) {
    println!("  [1] FadeScrollView — 30 striped rows in a 240px viewport");
    println!();

    let mut view = FadeScrollView::new(StripedColumn { rows: 30, row_height: 28.0 })
        .fade_height(32.0)
        .fade_timeout(Duration::from_millis(300))
        .background(Color::from_srgb_u8(250, 250, 250, 255));

    let ctx = LayoutCtx::default();
    let mut dl = DrawList::new();

    for step in 0..steps {
        view.on_event(&UiEvent::ScrollWheel { delta: 1.5 }, VIEWPORT, &ctx);

        dl.clear();
        let mut painter = Painter::new(&mut dl, 1.0);
        view.paint(&mut painter, VIEWPORT);

        report_frame(step, view.scroll_offset, view.is_scrolling(), &dl);
    }

    // End jumps straight to the bottom edge: the bottom fade goes away.
    view.on_event(&UiEvent::KeyPress { key: Key::End }, VIEWPORT, &ctx);
    dl.clear();
    let mut painter = Painter::new(&mut dl, 1.0);
    view.paint(&mut painter, VIEWPORT);
    report_frame(steps, view.scroll_offset, view.is_scrolling(), &dl);
    println!();
}

// ── scenario 2: virtualized list ──────────────────────────────────────────

fn run_list_view_demo(steps: u32) {
    println!("  [2] FadeListView — 50 rows, only visible ones realized");
    println!();

    let mut list = FadeListView::new(50, 24.0, |p, i, row| {
        let shade = if i % 2 == 0 { 40 } else { 48 };
        p.fill_rect(row, Color::from_srgb_u8(shade, shade, 56, 255));
    })
    .fade_height(60.0)
    .fade_timeout(Duration::from_millis(400))
    .background(Color::from_srgb_u8(40, 40, 48, 255));

    let ctx = LayoutCtx::default();
    let mut dl = DrawList::new();

    for step in 0..steps {
        list.on_event(&UiEvent::ScrollWheel { delta: 2.0 }, VIEWPORT, &ctx);

        dl.clear();
        let mut painter = Painter::new(&mut dl, 1.0);
        list.paint(&mut painter, VIEWPORT);

        report_frame(step, list.scroll_offset, list.is_scrolling(), &dl);
    }
    println!();
}

fn report_frame(step: u32, offset: f32, scrolling: bool, dl: &DrawList) {
    let gradients = dl
        .items()
        .iter()
        .filter(|item| {
            let DrawCmd::Rect(ref rc) = item.cmd;
            matches!(rc.paint, Paint::LinearGradient(_))
        })
        .count();

    let activity = if scrolling { "scrolling" } else { "idle" };
    println!(
        "      step {step:>3}  offset {offset:>7.1}  items {:>3}  fades {gradients}  [{activity}]",
        dl.len()
    );
    log::debug!("step {step}: {} draw items, {gradients} fade bands", dl.len());
}

// ── scenario 3: retained host ─────────────────────────────────────────────

/// Stand-in for a retained toolkit: realizes a viewport, tracks a scroll
/// offset, and counts every overlay operation the fade area issues.
struct SimHost {
    frame: Option<ViewportFrame>,
    offset: f32,
    max_offset: f32,
    bounds_syncs: usize,
    raises: usize,
    repaints: usize,
}

impl SimHost {
    fn new() -> Self {
        Self {
            frame: None,
            offset: 0.0,
            max_offset: 600.0,
            bounds_syncs: 0,
            raises: 0,
            repaints: 0,
        }
    }

    fn realize(&mut self, width: f32, height: f32) {
        self.frame = Some(ViewportFrame::new(Viewport::new(width, height), Vec2::new(2.0, 2.0)));
    }
}

impl ViewportHost for SimHost {
    fn viewport_frame(&self) -> Option<ViewportFrame> {
        self.frame
    }
    fn viewport_background(&self) -> Option<Color> {
        Some(Color::from_srgb_u8(250, 250, 250, 255))
    }
    fn owner_background(&self) -> Option<Color> {
        None
    }
    fn content_state(&self) -> ContentState {
        ContentState::Bounded(BoundedScrollModel::new(self.offset, self.max_offset))
    }
}

impl OverlaySurface for SimHost {
    fn set_overlay_bounds(&mut self, bounds: Rect) {
        self.bounds_syncs += 1;
        log::debug!("overlay bounds -> {bounds:?}");
    }
    fn raise_overlay(&mut self) {
        self.raises += 1;
    }
    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}

fn run_retained_host_demo(steps: u32) {
    println!("  [3] FadeArea — scripted retained host");
    println!();

    let mut host = SimHost::new();
    let mut area = FadeArea::new(OverlayParent::Viewport);
    area.set_fade_timeout(Duration::from_millis(250));

    let t0 = Instant::now();
    let ms = Duration::from_millis(1);

    // Shown before the viewport is realized: everything defers.
    area.on_shown(t0);
    area.tick(&mut host, t0);
    println!("      shown unrealized   syncs {:>2}  raises {:>2}", host.bounds_syncs, host.raises);

    // Realize, show again, pump past the follow-up pass.
    host.realize(VIEWPORT.size.x, VIEWPORT.size.y);
    area.on_shown(t0 + ms);
    for i in 1..40 {
        area.tick(&mut host, t0 + i * ms);
    }
    println!("      shown realized     syncs {:>2}  raises {:>2}", host.bounds_syncs, host.raises);

    // A scroll burst, then silence long enough for the activity to decay.
    for i in 0..steps {
        host.offset = (host.offset + 40.0).min(host.max_offset);
        area.on_scroll_offset_changed(&mut host, t0 + (40 + i) * ms);
    }
    println!(
        "      scroll burst       repaints {:>2}  scrolling {}",
        host.repaints,
        area.is_scrolling()
    );

    area.tick(&mut host, t0 + (40 + steps + 300) * ms);
    println!(
        "      after timeout      repaints {:>2}  scrolling {}",
        host.repaints,
        area.is_scrolling()
    );

    // Content repaint restacks immediately and re-syncs on the next ticks.
    let t1 = t0 + (40 + steps + 301) * ms;
    area.on_content_repainted(&mut host, t1);
    for i in 0..40 {
        area.tick(&mut host, t1 + i * ms);
    }
    println!("      content repainted  syncs {:>2}  raises {:>2}", host.bounds_syncs, host.raises);

    // Paint the overlay mid-content: both fades present.
    let mut dl = DrawList::new();
    area.paint(&host, ZIndex::new(0), &mut dl);
    println!("      overlay paint      fade bands {}", dl.len());
    println!();
}
