//! The session: all mutable toy state plus the per-tick advance step.
//!
//! Per the frame contract, input handlers mutate drag state first, then
//! [`Session::tick`] advances the solve animation and recomputes every dot's
//! displayed position (blend toward the straight-line target, plus jitter
//! while shaking), and finally the app draws the result with a pure painting
//! pass.  Keeping the advance step here, away from any graphics surface,
//! is what makes the animation testable.

use egui::{Pos2, Rect};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::drag::{self, DragState};
use crate::solve::{SolveAnimation, BANNER_FRAMES};
use crate::tangle::{random_color, Anchors, TangledLine};
use crate::wire::HUE_STEP;

/// Per-axis jitter range (px) applied to every dot while shaking.
pub const SHAKE_JITTER: f32 = 3.0;

/// What happened during one [`Session::tick`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// True on the single tick where the solve animation completed.
    pub solve_completed: bool,
}

/// Process-wide mutable state of the toy, owned by the app and mutated only
/// through the tick and input entry points.
pub struct Session {
    anchors: Anchors,
    line: TangledLine,
    solve: SolveAnimation,
    drag: DragState,
    /// Hue rotation offset in degrees; advances every tick.
    color_offset: f32,
    /// Remaining ticks of the "solved" banner.
    banner_frames: u32,
    /// Whole-line jitter flag, set for the duration of a drag.
    shaking: bool,
    /// Quote overlay visibility; dismissed once per session.
    show_quote: bool,
    rng: SmallRng,
}

impl Session {
    /// Create a session with a fresh random tangle between the given anchors.
    pub fn new(anchors: Anchors, mut rng: SmallRng) -> Self {
        let line = TangledLine::generate(&anchors, &mut rng);
        Self {
            anchors,
            line,
            solve: SolveAnimation::default(),
            drag: DragState::default(),
            color_offset: 0.0,
            banner_frames: 0,
            shaking: false,
            show_quote: true,
            rng,
        }
    }

    /// Convenience constructor seeding the RNG from OS entropy.
    pub fn from_entropy(anchors: Anchors) -> Self {
        Self::new(anchors, SmallRng::from_entropy())
    }

    // ── Read accessors ───────────────────────────────────────────────────────

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn line(&self) -> &TangledLine {
        &self.line
    }

    /// Mutable dot access, primarily for tests that need deterministic
    /// positions.
    pub fn line_mut(&mut self) -> &mut TangledLine {
        &mut self.line
    }

    pub fn solve(&self) -> &SolveAnimation {
        &self.solve
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn color_offset(&self) -> f32 {
        self.color_offset
    }

    pub fn banner_frames(&self) -> u32 {
        self.banner_frames
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn quote_visible(&self) -> bool {
        self.show_quote
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// SOLVE command: restart the solve animation from zero.  Valid in every
    /// phase; the per-dot white latch is deliberately left untouched.
    pub fn start_solve(&mut self) {
        log::info!("solve animation started");
        self.solve.start();
    }

    /// TANGLED command: discard the current line and generate a fresh one
    /// with the same anchors.  Any in-flight drag is cleared *before* the
    /// replacement so no dangling index survives; the solve state is not
    /// altered.
    pub fn reset_tangle(&mut self) {
        self.pointer_released();
        self.line = TangledLine::generate(&self.anchors, &mut self.rng);
        log::info!("tangle regenerated");
    }

    // ── Pointer protocol ─────────────────────────────────────────────────────

    /// Pointer press.  `quote_bounds` is the quote overlay's hit box when the
    /// overlay is showing and has known dimensions.
    ///
    /// Returns the index of the grabbed dot, if any; the caller starts the
    /// buzz loop on a grab.
    pub fn pointer_pressed(&mut self, pos: Pos2, quote_bounds: Option<Rect>) -> Option<usize> {
        if self.show_quote {
            if let Some(bounds) = quote_bounds {
                if !bounds.contains(pos) {
                    self.show_quote = false;
                }
            }
        }

        let index = drag::hit_test(&self.line, pos)?;
        self.drag.grab(index);
        self.line.dots_mut()[index].dragging = true;
        self.show_quote = false;
        self.shaking = true;
        log::debug!("dot {index} grabbed at {pos:?}");
        Some(index)
    }

    /// Pointer move while a drag is active: the dragged dot follows the
    /// pointer, clamped componentwise to the canvas.
    pub fn pointer_moved(&mut self, pos: Pos2, canvas: Rect) {
        if let Some(index) = self.drag.grabbed() {
            self.line.dots_mut()[index].pos = drag::clamp_to_canvas(pos, canvas);
        }
    }

    /// Pointer release: clears the drag and the shake flag.  No-op when no
    /// drag is active.  The caller stops the buzz loop.
    pub fn pointer_released(&mut self) {
        if let Some(index) = self.drag.release() {
            if let Some(dot) = self.line.dots_mut().get_mut(index) {
                dot.dragging = false;
            }
            log::debug!("dot {index} released");
        }
        self.shaking = false;
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    /// Advance the simulation by one frame: solve progress, the destructive
    /// per-dot position blend (plus shake jitter), color flicker, hue
    /// rotation, and the banner countdown.
    pub fn tick(&mut self) -> TickReport {
        let completed = self.solve.tick();
        if completed {
            self.line.freeze_white();
            self.banner_frames = BANNER_FRAMES;
            log::info!("solve animation completed");
        } else if self.banner_frames > 0 {
            self.banner_frames -= 1;
        }

        let n = self.line.len();
        let progress = self.solve.progress() as f32;
        for i in 0..n {
            let target = SolveAnimation::target(&self.anchors, i, n);
            let dot = &mut self.line.dots_mut()[i];
            // The blend writes back into the stored position, so the tangle
            // erodes irreversibly while solving.  Intentional one-way effect.
            let mut pos = dot.pos.lerp(target, progress);
            if self.shaking {
                pos.x += self.rng.gen_range(-SHAKE_JITTER..SHAKE_JITTER);
                pos.y += self.rng.gen_range(-SHAKE_JITTER..SHAKE_JITTER);
            }
            dot.pos = pos;
            if !dot.static_color && !dot.dragging {
                dot.color = random_color(&mut self.rng);
            }
        }

        self.color_offset = (self.color_offset + HUE_STEP).rem_euclid(360.0);
        TickReport {
            solve_completed: completed,
        }
    }
}
