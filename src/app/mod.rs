//! Application module for the untangle toy.
//!
//! Split into focused sub-modules so each concern can be reasoned about
//! independently:
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`untangle_app`] | Standalone [`UntangleApp`] (eframe) wrapper: input mapping and per-frame flow |
//! | [`draw`]         | Pure painting pass consuming the advanced session state |
//! | [`run`]          | Top-level [`run_untangle()`] entry point and icon loading |

mod draw;
mod run;
mod untangle_app;

pub use run::run_untangle;
pub use untangle_app::UntangleApp;
