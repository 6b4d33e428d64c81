use std::time::Duration;

use crate::app::SketchpadApp;
use crate::pen::{MAX_WIDTH, MIN_WIDTH};
use crate::renderer;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Pen");

            // Color picker
            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    app.pen_color_mut(),
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    let color = renderer::format_color(*app.pen_color_mut());
                    app.sketchpad_mut().pen_mut().set_color(color);
                }
            });

            let mut width = app.sketchpad().pen().width();
            if ui
                .add(egui::Slider::new(&mut width, MIN_WIDTH..=MAX_WIDTH).text("Width"))
                .changed()
            {
                app.sketchpad_mut().pen_mut().set_width(width);
            }

            let mut opacity = app.sketchpad().pen().opacity();
            if ui
                .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
                .changed()
            {
                app.sketchpad_mut().pen_mut().set_opacity(opacity);
            }

            ui.separator();
            ui.heading("History");

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.sketchpad().undoable();
                let can_redo = app.sketchpad().redoable();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.sketchpad_mut().clear();
                }
            });

            let store = app.sketchpad().store();
            ui.label(format!(
                "Strokes: {}   Undone: {}   Changes: {}",
                store.strokes().len(),
                store.undone().len(),
                app.revision()
            ));

            let mut editing = app.sketchpad().is_editing();
            if ui.checkbox(&mut editing, "Editing").changed() {
                app.sketchpad_mut().set_editing(editing);
            }

            ui.separator();
            ui.heading("Replay");

            ui.add(
                egui::Slider::new(app.replay_interval_ms_mut(), 50..=2000)
                    .text("ms per stroke"),
            );
            ui.horizontal(|ui| {
                if ui.button("Animate").clicked() {
                    let interval = Duration::from_millis(app.replay_interval_ms());
                    app.sketchpad_mut().animate(interval);
                }
                let animating = app.sketchpad().is_animating();
                if ui.add_enabled(animating, egui::Button::new("Stop")).clicked() {
                    app.sketchpad_mut().cancel_animation();
                }
            });

            ui.separator();
            ui.heading("JSON");

            if ui.button("Copy drawing").clicked() {
                let json = app
                    .sketchpad()
                    .mirror()
                    .map_or_else(|| app.sketchpad().json(), |mirror| mirror.value());
                ui.ctx().copy_text(json);
            }

            ui.add(
                egui::TextEdit::multiline(app.import_buffer_mut())
                    .hint_text("Paste a stroke array")
                    .desired_rows(4),
            );
            if ui.button("Load").clicked() {
                app.import();
            }
            if let Some(error) = app.import_error() {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
}
