//! Drag state and the pointer hit-test used to grab dots.

use egui::{Pos2, Rect};

use crate::tangle::TangledLine;

/// Tracks which dot, if any, the pointer currently holds.
///
/// The stored index points into the active [`TangledLine`] whenever a drag is
/// active; exactly one dot may be dragged at a time.  The session clears this
/// state before replacing the line so the index can never dangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    grabbed: Option<usize>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.grabbed.is_some()
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn grab(&mut self, index: usize) {
        self.grabbed = Some(index);
    }

    /// Clear the drag, returning the index that was held.  Safe to call with
    /// no active drag.
    pub fn release(&mut self) -> Option<usize> {
        self.grabbed.take()
    }
}

/// Find the dot under the pointer: the first dot in insertion order whose
/// distance from `pos` is less than half its diameter.  The stable scan order
/// makes selection deterministic when dots overlap.
pub fn hit_test(line: &TangledLine, pos: Pos2) -> Option<usize> {
    line.dots()
        .iter()
        .position(|dot| dot.pos.distance(pos) < dot.size / 2.0)
}

/// Clamp a pointer position componentwise to the canvas bounds.
pub fn clamp_to_canvas(pos: Pos2, canvas: Rect) -> Pos2 {
    Pos2::new(
        pos.x.clamp(canvas.min.x, canvas.max.x),
        pos.y.clamp(canvas.min.y, canvas.max.y),
    )
}
