//! The tangled line data model: dots, anchors, and random generation.
//!
//! A [`TangledLine`] is an ordered sequence of exactly [`DOT_COUNT`] draggable
//! dots strung between two fixed [`Anchors`].  Insertion order is significant:
//! it defines both the drawn wire path and the per-segment hue ramp index.

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

/// Number of dots per tangle generation.  Fixed for the lifetime of a
/// generation; regenerating replaces the whole sequence.
pub const DOT_COUNT: usize = 20;

/// Horizontal margin (px) kept between each anchor and the sampled x range.
pub const X_MARGIN: f32 = 50.0;

/// Vertical half-spread (px) of the sampled y range around the anchor line.
pub const Y_SPREAD: f32 = 300.0;

/// Dot diameter range: uniform in `[MIN_DOT_SIZE, MAX_DOT_SIZE)`.
pub const MIN_DOT_SIZE: f32 = 5.0;
pub const MAX_DOT_SIZE: f32 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Dot
// ─────────────────────────────────────────────────────────────────────────────

/// One draggable dot of the tangled line.
#[derive(Debug, Clone)]
pub struct Dot {
    /// Current position, mutated every tick while solving or shaking and by
    /// drag-move events.
    pub pos: Pos2,
    /// Diameter in pixels, fixed at creation.
    pub size: f32,
    /// Fill color.  Re-randomized every tick (flicker) unless the dot is
    /// static or currently dragged.
    pub color: Color32,
    /// One-way latch set when the solve animation completes; freezes the dot
    /// to white until the next full regeneration.
    pub static_color: bool,
    /// True only while this dot is the one grabbed by the pointer.
    pub dragging: bool,
}

impl Dot {
    fn random(anchors: &Anchors, rng: &mut impl Rng) -> Self {
        Self {
            pos: Pos2::new(
                rng.gen_range(anchors.start.x + X_MARGIN..anchors.end.x - X_MARGIN),
                rng.gen_range(anchors.start.y - Y_SPREAD..anchors.start.y + Y_SPREAD),
            ),
            size: rng.gen_range(MIN_DOT_SIZE..MAX_DOT_SIZE),
            color: random_color(rng),
            static_color: false,
            dragging: false,
        }
    }
}

/// Draw three independent uniform channel values in `[0, 255)`.
pub fn random_color(rng: &mut impl Rng) -> Color32 {
    Color32::from_rgb(
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Anchors
// ─────────────────────────────────────────────────────────────────────────────

/// The two fixed endpoints bounding the drawn wire.
///
/// Computed once from the canvas dimensions and never mutated afterwards;
/// only read as interpolation endpoints.  Callers must keep
/// `start.x + X_MARGIN < end.x - X_MARGIN` or the sampled x range degenerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub start: Pos2,
    pub end: Pos2,
}

impl Anchors {
    /// Place the anchors for a canvas of the given size: 200 px in from each
    /// side, slightly below the vertical midline.
    pub fn for_canvas(size: Vec2) -> Self {
        let y = size.y / 2.0 + 40.0;
        Self {
            start: Pos2::new(200.0, y),
            end: Pos2::new(size.x - 200.0, y),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TangledLine
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered sequence of exactly [`DOT_COUNT`] dots between the anchors.
#[derive(Debug, Clone)]
pub struct TangledLine {
    dots: Vec<Dot>,
}

impl TangledLine {
    /// Generate a fresh random tangle between the given anchors.
    ///
    /// Pure generation from valid anchor geometry; there are no error paths.
    pub fn generate(anchors: &Anchors, rng: &mut impl Rng) -> Self {
        Self {
            dots: (0..DOT_COUNT).map(|_| Dot::random(anchors, rng)).collect(),
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [Dot] {
        &mut self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Latch every dot to static white.  Applied once when the solve
    /// animation completes; only [`TangledLine::generate`] undoes it.
    pub fn freeze_white(&mut self) {
        for dot in &mut self.dots {
            dot.static_color = true;
            dot.color = Color32::WHITE;
        }
    }
}
