//! The pure painting pass.
//!
//! Consumes the session state that [`crate::session::Session::tick`] already
//! advanced this frame and issues draw primitives only; nothing in here
//! mutates the model.  Layer order: background, quote overlay, instruction
//! text, wire, dots, solved banner.

use eframe::egui;
use egui::{Align2, Color32, CornerRadius, FontFamily, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::assets::Assets;
use crate::session::Session;
use crate::wire;

/// Fallback background fill when no background image is available.
const BACKDROP: Color32 = Color32::from_rgb(0x02, 0x10, 0x24);

const INSTRUCTION: &str = "Click and drag to untangle your thoughts";
const BANNER_TEXT: &str = "Attention is yours";

const FULL_UV: Rect = Rect {
    min: Pos2::new(0.0, 0.0),
    max: Pos2::new(1.0, 1.0),
};

/// Paint one frame.  Returns the quote overlay's hit box when the overlay
/// was drawn, so the next pointer press can test against it.
pub fn draw_frame(
    painter: &Painter,
    canvas: Rect,
    session: &Session,
    assets: &Assets,
    display: &FontFamily,
) -> Option<Rect> {
    match &assets.background {
        Some(tex) => {
            painter.image(tex.id(), canvas, FULL_UV, Color32::WHITE);
        }
        None => {
            painter.rect_filled(canvas, CornerRadius::ZERO, BACKDROP);
        }
    }

    let quote_bounds = draw_quote(painter, canvas, session, assets);
    draw_instruction(painter, canvas, display);
    draw_wire(painter, session);
    draw_dots(painter, session);
    draw_banner(painter, canvas, session, display);
    quote_bounds
}

// ── Quote overlay ────────────────────────────────────────────────────────────

fn draw_quote(painter: &Painter, canvas: Rect, session: &Session, assets: &Assets) -> Option<Rect> {
    if !session.quote_visible() {
        return None;
    }
    let tex = assets.quote.as_ref()?;
    let size = tex.size_vec2();
    painter.image(tex.id(), quote_draw_rect(canvas, size), FULL_UV, Color32::WHITE);
    Some(quote_hit_rect(canvas, size))
}

/// Where the quote image is painted: left of center, in the upper third,
/// slightly shrunk.
pub fn quote_draw_rect(canvas: Rect, quote_size: Vec2) -> Rect {
    let min = Pos2::new(
        canvas.min.x + canvas.width() / 2.0 - quote_size.x / 3.0 - 150.0,
        canvas.min.y + canvas.height() / 4.0 - 180.0,
    );
    Rect::from_min_size(min, quote_size / 1.2)
}

/// Dismissal hit box: presses outside this rect hide the overlay.  Slightly
/// different from the painted rect; centered on the canvas midline.
pub fn quote_hit_rect(canvas: Rect, quote_size: Vec2) -> Rect {
    let cx = canvas.min.x + canvas.width() / 2.0;
    let top = canvas.min.y + canvas.height() / 4.0;
    Rect::from_min_max(
        Pos2::new(cx - quote_size.x / 2.5, top),
        Pos2::new(cx + quote_size.x / 2.5, top + quote_size.y / 1.25),
    )
}

// ── Instruction text ─────────────────────────────────────────────────────────

fn draw_instruction(painter: &Painter, canvas: Rect, display: &FontFamily) {
    let pos = Pos2::new(
        (canvas.min.x + 975.0).min(canvas.max.x - 420.0),
        (canvas.max.y - 550.0).max(canvas.min.y + 40.0),
    );
    let font = FontId::new(25.0, display.clone());
    // Soft glow: translucent copies at small offsets under the solid text.
    let glow = Color32::from_white_alpha(48);
    for offset in [
        Vec2::new(-1.5, -1.5),
        Vec2::new(1.5, -1.5),
        Vec2::new(-1.5, 1.5),
        Vec2::new(1.5, 1.5),
    ] {
        painter.text(pos + offset, Align2::LEFT_CENTER, INSTRUCTION, font.clone(), glow);
    }
    painter.text(pos, Align2::LEFT_CENTER, INSTRUCTION, font, Color32::WHITE);
}

// ── Wire and dots ────────────────────────────────────────────────────────────

fn draw_wire(painter: &Painter, session: &Session) {
    let control = wire::control_points(session.anchors(), session.line());
    let n = session.line().len();
    for seg in 0..wire::segment_count(&control) {
        let hue = wire::segment_hue(seg, n, session.color_offset());
        let stroke = Stroke::new(1.0, wire::hue_color(hue));
        painter.add(egui::Shape::line(wire::sample_segment(&control, seg), stroke));
    }
}

fn draw_dots(painter: &Painter, session: &Session) {
    for dot in session.line().dots() {
        painter.circle_filled(dot.pos, dot.size / 2.0, dot.color);
    }
}

// ── Solved banner ────────────────────────────────────────────────────────────

fn draw_banner(painter: &Painter, canvas: Rect, session: &Session, display: &FontFamily) {
    if session.banner_frames() == 0 {
        return;
    }
    painter.text(
        canvas.center(),
        Align2::CENTER_CENTER,
        BANNER_TEXT,
        FontId::new(48.0, display.clone()),
        Color32::WHITE,
    );
}
