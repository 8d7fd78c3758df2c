//! The solve animation state machine.
//!
//! Drives the interpolation of the tangled line toward its straight-line
//! layout.  Progress advances by a fixed per-tick step, so a full solve takes
//! ~100 ticks (~1.7 s at 60 Hz).  Completion latches every dot to static
//! white and arms the banner timer; see [`crate::session::Session::tick`].

use egui::Pos2;

use crate::tangle::Anchors;

/// Per-tick progress increment while solving.
pub const SOLVE_STEP: f64 = 0.01;

/// Banner display duration in ticks (~3 s at 60 Hz).
pub const BANNER_FRAMES: u32 = 180;

/// Observable phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    /// No solve has run since the last restart.
    Idle,
    /// Progress is advancing toward 1.
    Solving,
    /// Progress reached 1; terminal until the next solve command.
    Solved,
}

/// Solve progress state.
///
/// `progress` is monotonically non-decreasing while solving, resets to 0 when
/// a new solve starts, and clamps to 1 exactly once.  It deliberately stays
/// at its last value when not solving: the per-tick position blend keeps
/// using it, which is what makes the solved layout "stick".
#[derive(Debug, Clone, Copy)]
pub struct SolveAnimation {
    solving: bool,
    progress: f64,
}

impl Default for SolveAnimation {
    fn default() -> Self {
        Self {
            solving: false,
            progress: 0.0,
        }
    }
}

impl SolveAnimation {
    pub fn phase(&self) -> SolvePhase {
        if self.solving {
            SolvePhase::Solving
        } else if self.progress >= 1.0 {
            SolvePhase::Solved
        } else {
            SolvePhase::Idle
        }
    }

    pub fn is_solving(&self) -> bool {
        self.solving
    }

    /// Current progress in `[0, 1]`, usable as a lerp weight.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Start (or restart) the solve animation.  Valid in every phase; always
    /// restarts progress from zero.
    pub fn start(&mut self) {
        self.solving = true;
        self.progress = 0.0;
    }

    /// Advance one tick.  Returns `true` exactly once, on the tick where
    /// progress reaches 1 and the animation completes.
    pub fn tick(&mut self) -> bool {
        if !self.solving {
            return false;
        }
        self.progress += SOLVE_STEP;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.solving = false;
            return true;
        }
        false
    }

    /// Straight-line target position for dot `i` of `n`.
    ///
    /// Uses `t = (i + 1) / (n + 1)` so all dots stay strictly between the
    /// anchors; the endpoints themselves belong to the anchors.
    pub fn target(anchors: &Anchors, i: usize, n: usize) -> Pos2 {
        let t = (i + 1) as f32 / (n + 1) as f32;
        anchors.start.lerp(anchors.end, t)
    }
}
