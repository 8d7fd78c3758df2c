//! Configuration for the untangle toy.

use std::path::PathBuf;

use crate::audio::AudioSink;

// ─────────────────────────────────────────────────────────────────────────────
// Asset paths
// ─────────────────────────────────────────────────────────────────────────────

/// File locations of the optional decorative assets.
///
/// Every asset is optional at runtime: a missing file logs a debug line and
/// the app falls back to a flat background, the default font, or no quote
/// overlay.  The animation itself never depends on any asset.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    /// Background image, stretched to the canvas.
    pub background: PathBuf,
    /// Quote image shown until the first press outside it (or the first
    /// grab).
    pub quote: PathBuf,
    /// Display font used for the instruction text and the solved banner.
    pub font: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/background.png"),
            quote: PathBuf::from("assets/quote.png"),
            font: PathBuf::from("assets/display-font.otf"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UntangleConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for [`crate::run_untangle`].
///
/// The dot count and all animation constants are part of the core contract
/// and deliberately not configurable; this struct only covers the window
/// chrome and the external collaborators (assets, audio).
pub struct UntangleConfig {
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Decorative asset locations.
    pub assets: AssetPaths,
    /// Sound sink; `None` falls back to [`crate::audio::NullAudio`].
    pub audio: Option<Box<dyn AudioSink>>,
}

impl Clone for UntangleConfig {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            native_options: self.native_options.clone(),
            assets: self.assets.clone(),
            audio: None, // cannot clone a boxed sink
        }
    }
}

impl Default for UntangleConfig {
    fn default() -> Self {
        Self {
            title: "Untangle".to_string(),
            native_options: None,
            assets: AssetPaths::default(),
            audio: None,
        }
    }
}
