//! Top-level entry point for running the toy as a native window.

use eframe::egui;

use crate::assets;
use crate::config::UntangleConfig;

use super::untangle_app::UntangleApp;

/// Launch the untangle toy in a native window.
///
/// This is the main entry point for standalone use.  It:
///
/// 1. Resolves window options (icon from `icon.svg` when available, a
///    roomy default size unless the config provides one).
/// 2. Installs the Phosphor icon font and the configured display font.
/// 3. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_untangle(mut cfg: UntangleConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = assets::load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 900.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install fonts before creating the app: Phosphor glyphs for the
            // command buttons plus the configured display font.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            let display = assets::add_display_font(&mut fonts, &cfg.assets.font);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(UntangleApp::new(cc, cfg, display)))
        }),
    )
}
