use approx::assert_relative_eq;
use egui::Pos2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use untangle::tangle::{Anchors, TangledLine, DOT_COUNT};
use untangle::wire;

fn anchors() -> Anchors {
    Anchors {
        start: Pos2::new(200.0, 440.0),
        end: Pos2::new(1200.0, 440.0),
    }
}

#[test]
fn segment_hue_follows_the_ramp_plus_offset() {
    // hue = map(i, 0, N, 0, 360) + offset, mod 360
    assert_relative_eq!(wire::segment_hue(0, DOT_COUNT, 0.0), 0.0);
    assert_relative_eq!(wire::segment_hue(10, DOT_COUNT, 14.0), 194.0);
    assert_relative_eq!(wire::segment_hue(20, DOT_COUNT, 0.0), 0.0); // 360 wraps
    assert_relative_eq!(wire::segment_hue(19, DOT_COUNT, 300.0), 282.0);
}

#[test]
fn segment_hue_is_independent_of_everything_but_its_inputs() {
    let a = wire::segment_hue(7, DOT_COUNT, 123.0);
    let b = wire::segment_hue(7, DOT_COUNT, 123.0);
    assert_eq!(a, b);
}

#[test]
fn control_polygon_duplicates_both_anchors() {
    let a = anchors();
    let line = TangledLine::generate(&a, &mut SmallRng::seed_from_u64(11));
    let control = wire::control_points(&a, &line);

    assert_eq!(control.len(), DOT_COUNT + 4);
    assert_eq!(control[0], a.start);
    assert_eq!(control[1], a.start);
    assert_eq!(control[control.len() - 2], a.end);
    assert_eq!(control[control.len() - 1], a.end);
    // One segment per anchor-dot / dot-dot / dot-anchor pair.
    assert_eq!(wire::segment_count(&control), DOT_COUNT + 1);
}

#[test]
fn wire_touches_both_anchors() {
    let a = anchors();
    let line = TangledLine::generate(&a, &mut SmallRng::seed_from_u64(5));
    let control = wire::control_points(&a, &line);

    let first = wire::sample_segment(&control, 0);
    assert_eq!(*first.first().unwrap(), a.start);

    let last = wire::sample_segment(&control, wire::segment_count(&control) - 1);
    let end = *last.last().unwrap();
    assert_relative_eq!(end.x, a.end.x, epsilon = 1e-2);
    assert_relative_eq!(end.y, a.end.y, epsilon = 1e-2);
}

#[test]
fn segments_join_without_gaps() {
    let a = anchors();
    let line = TangledLine::generate(&a, &mut SmallRng::seed_from_u64(13));
    let control = wire::control_points(&a, &line);
    for seg in 0..wire::segment_count(&control) - 1 {
        let here = *wire::sample_segment(&control, seg).last().unwrap();
        let next = *wire::sample_segment(&control, seg + 1).first().unwrap();
        assert!(here.distance(next) < 1e-2, "gap after segment {seg}");
    }
}
