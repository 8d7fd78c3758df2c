//! Wire geometry and the animated hue ramp.
//!
//! The wire is one continuous Catmull-Rom curve from the start anchor,
//! through every dot in line order, to the end anchor.  The first and last
//! control points are duplicated so the curve actually touches the anchors.
//! Each segment between consecutive control points gets its own stroke hue,
//! producing the rotating rainbow gradient.

use egui::ecolor::Hsva;
use egui::{Color32, Pos2};

use crate::tangle::{Anchors, TangledLine};

/// Sampled points per curve segment.  Enough for a smooth stroke at typical
/// segment lengths without noticeable tessellation cost.
pub const SEGMENT_SAMPLES: usize = 12;

/// Hue rotation per tick in degrees.
pub const HUE_STEP: f32 = 2.0;

/// Hue in degrees for segment `i`, given `dot_count` dots and the current
/// rotation offset: `(map(i, 0, dot_count, 0, 360) + offset) mod 360`.
/// Independent of solve and drag state.
pub fn segment_hue(i: usize, dot_count: usize, color_offset: f32) -> f32 {
    let ramp = i as f32 * 360.0 / dot_count as f32;
    (ramp + color_offset).rem_euclid(360.0)
}

/// Fully saturated mid-lightness color for the given hue (degrees).
///
/// HSL with S = 100% and L = 50% is the same color as HSV with S = V = 1,
/// which is what egui's color types provide.
pub fn hue_color(hue_deg: f32) -> Color32 {
    Color32::from(Hsva::new(hue_deg.rem_euclid(360.0) / 360.0, 1.0, 1.0, 1.0))
}

/// Control polygon for the wire: `[start, start, dots..., end, end]`.
///
/// With duplicated endpoints a line of `n` dots yields `n + 1` drawable
/// segments (anchor→dot, dot→dot, …, dot→anchor).
pub fn control_points(anchors: &Anchors, line: &TangledLine) -> Vec<Pos2> {
    let mut pts = Vec::with_capacity(line.len() + 4);
    pts.push(anchors.start);
    pts.push(anchors.start);
    pts.extend(line.dots().iter().map(|dot| dot.pos));
    pts.push(anchors.end);
    pts.push(anchors.end);
    pts
}

/// Number of drawable segments for a control polygon from
/// [`control_points`]: one per consecutive pair of interior points.
pub fn segment_count(control: &[Pos2]) -> usize {
    control.len().saturating_sub(3)
}

/// Sample the Catmull-Rom span between `control[seg + 1]` and
/// `control[seg + 2]`, inclusive of both endpoints.
pub fn sample_segment(control: &[Pos2], seg: usize) -> Vec<Pos2> {
    let p0 = control[seg];
    let p1 = control[seg + 1];
    let p2 = control[seg + 2];
    let p3 = control[seg + 3];
    (0..=SEGMENT_SAMPLES)
        .map(|k| catmull_rom(p0, p1, p2, p3, k as f32 / SEGMENT_SAMPLES as f32))
        .collect()
}

/// Uniform Catmull-Rom interpolation between `p1` and `p2` at parameter `t`.
pub fn catmull_rom(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let component = |a: f32, b: f32, c: f32, d: f32| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    Pos2::new(
        component(p0.x, p1.x, p2.x, p3.x),
        component(p0.y, p1.y, p2.y, p3.y),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
