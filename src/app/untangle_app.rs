//! Standalone eframe application wrapper.
//!
//! Maps egui pointer/button input onto the session's entry points, advances
//! the simulation once per frame, and delegates painting to [`super::draw`].

use std::time::Duration;

use eframe::egui;
use egui::{Color32, CornerRadius, FontFamily, FontId, Rect, RichText, Stroke};

use crate::assets::Assets;
use crate::audio::{AudioSink, NullAudio, SoundCue};
use crate::config::UntangleConfig;
use crate::session::Session;
use crate::tangle::Anchors;

use super::draw;

const BUTTON_FILL: Color32 = Color32::from_rgb(0x02, 0x10, 0x24);

/// The untangle toy as an eframe application.
pub struct UntangleApp {
    /// Created lazily on the first frame, once the canvas size (and thus the
    /// anchor geometry) is known.
    session: Option<Session>,
    assets: Assets,
    audio: Box<dyn AudioSink>,
    display: FontFamily,
    /// Quote hit box from the previous frame's painting pass.
    quote_bounds: Option<Rect>,
}

impl UntangleApp {
    /// Build the app: uploads textures and takes the injected audio sink
    /// (falling back to [`NullAudio`]).
    pub fn new(cc: &eframe::CreationContext<'_>, mut cfg: UntangleConfig, display: FontFamily) -> Self {
        let assets = Assets::load(&cc.egui_ctx, &cfg.assets);
        let audio = cfg
            .audio
            .take()
            .unwrap_or_else(|| Box::new(NullAudio::default()));
        Self {
            session: None,
            assets,
            audio,
            display,
            quote_bounds: None,
        }
    }
}

impl eframe::App for UntangleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut solve_clicked = false;
        let mut tangled_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let canvas = ui.max_rect();
                let response = ui.allocate_rect(canvas, egui::Sense::drag());
                let session = self
                    .session
                    .get_or_insert_with(|| Session::from_entropy(Anchors::for_canvas(canvas.size())));

                // Pointer protocol: press grabs, move drags, release lets go.
                if response.drag_started() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if session.pointer_pressed(pos, self.quote_bounds).is_some() {
                            self.audio.start_loop(SoundCue::Buzz);
                        }
                    }
                } else if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        session.pointer_moved(pos, canvas);
                    }
                }
                if response.drag_stopped() {
                    session.pointer_released();
                    self.audio.stop_loop(SoundCue::Buzz);
                }

                session.tick();

                self.quote_bounds =
                    draw::draw_frame(ui.painter(), canvas, session, &self.assets, &self.display);
            });

        // Command buttons float above the canvas.
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("untangle-controls"))
            .fixed_pos(egui::pos2(
                screen.min.x + 80.0,
                (screen.max.y - 550.0).max(screen.min.y + 20.0),
            ))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.add(self.command_button(egui_phosphor::regular::PLAY, "SOLVE")).clicked() {
                        solve_clicked = true;
                    }
                    if ui
                        .add(self.command_button(egui_phosphor::regular::SHUFFLE, "TANGLED"))
                        .clicked()
                    {
                        tangled_clicked = true;
                    }
                });
            });

        if let Some(session) = self.session.as_mut() {
            if solve_clicked {
                self.audio.play(SoundCue::Solve);
                session.start_solve();
            }
            if tangled_clicked {
                self.audio.play(SoundCue::Pop);
                // Reset stops any in-flight drag, so silence the buzz too.
                self.audio.stop_loop(SoundCue::Buzz);
                session.reset_tangle();
            }
        }

        // Keep ticking at ~60 Hz so the animation feels continuous.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl UntangleApp {
    fn command_button(&self, icon: &str, label: &str) -> egui::Button<'static> {
        let text = RichText::new(format!("{icon} {label}"))
            .font(FontId::new(18.0, self.display.clone()))
            .color(Color32::WHITE);
        egui::Button::new(text)
            .fill(BUTTON_FILL)
            .stroke(Stroke::new(2.0, Color32::WHITE))
            .corner_radius(CornerRadius::same(12))
            .min_size(egui::vec2(110.0, 40.0))
    }
}
