use approx::assert_relative_eq;
use egui::Pos2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use untangle::solve::{SolveAnimation, SolvePhase, BANNER_FRAMES};
use untangle::tangle::{Anchors, DOT_COUNT};
use untangle::Session;

fn anchors() -> Anchors {
    Anchors {
        start: Pos2::new(200.0, 440.0),
        end: Pos2::new(1200.0, 440.0),
    }
}

fn session() -> Session {
    Session::new(anchors(), SmallRng::seed_from_u64(42))
}

#[test]
fn solve_completes_after_exactly_one_hundred_ticks() {
    let mut s = session();
    s.start_solve();
    for tick in 1..=100u32 {
        let report = s.tick();
        if tick < 100 {
            assert!(!report.solve_completed, "completed early at tick {tick}");
            assert!(s.solve().is_solving());
        } else {
            assert!(report.solve_completed, "did not complete at tick 100");
        }
    }
    assert_eq!(s.solve().progress(), 1.0);
    assert!(!s.solve().is_solving());
    assert_eq!(s.solve().phase(), SolvePhase::Solved);
}

#[test]
fn completion_freezes_every_dot_white() {
    let mut s = session();
    s.start_solve();
    for _ in 0..100 {
        s.tick();
    }
    for dot in s.line().dots() {
        assert!(dot.static_color);
        assert_eq!(dot.color, egui::Color32::WHITE);
    }
}

#[test]
fn banner_counts_down_from_its_full_duration() {
    let mut s = session();
    s.start_solve();
    for _ in 0..100 {
        s.tick();
    }
    // Immediately after the completing tick the banner is fully armed.
    assert_eq!(s.banner_frames(), BANNER_FRAMES);
    for _ in 0..BANNER_FRAMES {
        s.tick();
    }
    assert_eq!(s.banner_frames(), 0);
    // No further change once expired.
    s.tick();
    assert_eq!(s.banner_frames(), 0);
}

#[test]
fn targets_are_strictly_between_the_anchors() {
    let a = anchors();
    let n = DOT_COUNT;
    for i in 0..n {
        let t = (i + 1) as f32 / (n + 1) as f32;
        let expected = a.start.lerp(a.end, t);
        let target = SolveAnimation::target(&a, i, n);
        assert_relative_eq!(target.x, expected.x);
        assert_relative_eq!(target.y, expected.y);
        assert!(target.x > a.start.x && target.x < a.end.x);
    }
    // Endpoints belong to the anchors, never to a dot.
    assert_relative_eq!(
        SolveAnimation::target(&a, 0, n).x,
        a.start.x + (a.end.x - a.start.x) / 21.0
    );
    assert_relative_eq!(
        SolveAnimation::target(&a, n - 1, n).x,
        a.start.x + (a.end.x - a.start.x) * 20.0 / 21.0
    );
}

#[test]
fn solved_dots_converge_onto_their_targets() {
    let mut s = session();
    s.start_solve();
    for _ in 0..100 {
        s.tick();
    }
    let a = *s.anchors();
    let n = s.line().len();
    for (i, dot) in s.line().dots().iter().enumerate() {
        let target = SolveAnimation::target(&a, i, n);
        assert_relative_eq!(dot.pos.x, target.x, epsilon = 1e-3);
        assert_relative_eq!(dot.pos.y, target.y, epsilon = 1e-3);
    }
}

#[test]
fn resolving_restarts_progress_but_keeps_the_white_latch() {
    let mut s = session();
    s.start_solve();
    for _ in 0..100 {
        s.tick();
    }
    s.start_solve();
    assert_eq!(s.solve().phase(), SolvePhase::Solving);
    assert_eq!(s.solve().progress(), 0.0);
    // The per-dot latch is one-way; only a regeneration clears it.
    s.tick();
    for dot in s.line().dots() {
        assert!(dot.static_color);
        assert_eq!(dot.color, egui::Color32::WHITE);
    }
}

#[test]
fn reset_yields_colorful_dots_again() {
    let mut s = session();
    s.start_solve();
    for _ in 0..100 {
        s.tick();
    }
    s.reset_tangle();
    assert!(s.line().dots().iter().all(|d| !d.static_color));
}
