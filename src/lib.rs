//! Untangle crate root: re-exports and module wiring.
//!
//! An interactive animation toy built on egui/eframe: a tangled line of
//! draggable colored dots strung between two anchors, which the user can
//! drag around, solve into a straight line, or reset to a fresh tangle.
//!
//! The implementation is split into cohesive modules:
//! - `tangle`: dots, anchors, and random tangle generation
//! - `solve`: the solve animation state machine
//! - `drag`: drag state and pointer hit-testing
//! - `wire`: Catmull-Rom wire geometry and the animated hue ramp
//! - `session`: all mutable state plus the per-tick advance step
//! - `audio`: the sound cue contract (play / loop / stop)
//! - `assets`: best-effort texture/font/icon loading
//! - `config`: top-level configuration
//! - `app`: the eframe application and run helper

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod drag;
pub mod session;
pub mod solve;
pub mod tangle;
pub mod wire;

// Public re-exports for a compact external API
pub use app::{run_untangle, UntangleApp};
pub use audio::{AudioSink, NullAudio, SoundCue};
pub use config::{AssetPaths, UntangleConfig};
pub use drag::DragState;
pub use session::{Session, TickReport};
pub use solve::{SolveAnimation, SolvePhase, BANNER_FRAMES, SOLVE_STEP};
pub use tangle::{Anchors, Dot, TangledLine, DOT_COUNT};
