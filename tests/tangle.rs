use egui::{Pos2, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use untangle::tangle::{Anchors, TangledLine, DOT_COUNT, MAX_DOT_SIZE, MIN_DOT_SIZE, X_MARGIN, Y_SPREAD};

fn anchors() -> Anchors {
    Anchors {
        start: Pos2::new(200.0, 440.0),
        end: Pos2::new(1200.0, 440.0),
    }
}

#[test]
fn generate_produces_exactly_twenty_dots() {
    let line = TangledLine::generate(&anchors(), &mut SmallRng::seed_from_u64(1));
    assert_eq!(line.len(), DOT_COUNT);
}

#[test]
fn generated_dots_stay_inside_sampling_bounds() {
    let a = anchors();
    // Several seeds to cover the sampled ranges a little better.
    for seed in 0..16 {
        let line = TangledLine::generate(&a, &mut SmallRng::seed_from_u64(seed));
        for dot in line.dots() {
            assert!(
                dot.pos.x >= a.start.x + X_MARGIN && dot.pos.x < a.end.x - X_MARGIN,
                "x {} outside sampling range",
                dot.pos.x
            );
            assert!(
                dot.pos.y >= a.start.y - Y_SPREAD && dot.pos.y < a.start.y + Y_SPREAD,
                "y {} outside sampling range",
                dot.pos.y
            );
            assert!(
                dot.size >= MIN_DOT_SIZE && dot.size < MAX_DOT_SIZE,
                "size {} outside [{MIN_DOT_SIZE}, {MAX_DOT_SIZE})",
                dot.size
            );
        }
    }
}

#[test]
fn generated_dots_start_unflagged() {
    let line = TangledLine::generate(&anchors(), &mut SmallRng::seed_from_u64(7));
    for dot in line.dots() {
        assert!(!dot.static_color);
        assert!(!dot.dragging);
    }
}

#[test]
fn freeze_white_latches_every_dot() {
    let mut line = TangledLine::generate(&anchors(), &mut SmallRng::seed_from_u64(3));
    line.freeze_white();
    for dot in line.dots() {
        assert!(dot.static_color);
        assert_eq!(dot.color, egui::Color32::WHITE);
    }
}

#[test]
fn anchors_for_canvas_sit_on_the_lowered_midline() {
    let a = Anchors::for_canvas(Vec2::new(1400.0, 800.0));
    assert_eq!(a.start, Pos2::new(200.0, 440.0));
    assert_eq!(a.end, Pos2::new(1200.0, 440.0));
}
