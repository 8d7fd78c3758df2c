//! Decorative asset loading: textures, display font, and the window icon.
//!
//! Everything here is best-effort.  Loaders return `Option` and the app
//! falls back gracefully; the animation core never touches this module.

use std::path::Path;
use std::sync::Arc;

use eframe::egui;
use egui::{ColorImage, FontFamily, TextureHandle, TextureOptions};

use crate::config::AssetPaths;

/// Font family name under which the display font is registered.
pub const DISPLAY_FONT_FAMILY: &str = "untangle-display";

/// Loaded textures for the decorative layers.
pub struct Assets {
    pub background: Option<TextureHandle>,
    pub quote: Option<TextureHandle>,
}

impl Assets {
    /// Decode and upload the background and quote images.
    pub fn load(ctx: &egui::Context, paths: &AssetPaths) -> Self {
        Self {
            background: load_texture(ctx, &paths.background, "background"),
            quote: load_texture(ctx, &paths.quote, "quote"),
        }
    }
}

fn load_texture(ctx: &egui::Context, path: &Path, name: &str) -> Option<TextureHandle> {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(err) => {
            log::debug!("no {name} image at {}: {err}", path.display());
            return None;
        }
    };
    let size = [img.width() as usize, img.height() as usize];
    let color = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Some(ctx.load_texture(name, color, TextureOptions::LINEAR))
}

/// Register the display font file under [`DISPLAY_FONT_FAMILY`].
///
/// Returns the family to use for display text: the custom family when the
/// font file loads, the proportional default otherwise.
pub fn add_display_font(fonts: &mut egui::FontDefinitions, path: &Path) -> FontFamily {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::debug!("no display font at {}: {err}", path.display());
            return FontFamily::Proportional;
        }
    };
    fonts.font_data.insert(
        DISPLAY_FONT_FAMILY.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    let family = FontFamily::Name(DISPLAY_FONT_FAMILY.into());
    fonts
        .families
        .insert(family.clone(), vec![DISPLAY_FONT_FAMILY.to_string()]);
    family
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
pub fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    // Parse and render SVG to RGBA using usvg + resvg.
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
