use std::time::Duration;

use crate::app::SketchpadApp;
use crate::util::time;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Text selection is only suppressed inside the drawing container
        ui.style_mut().interaction.selectable_labels =
            app.sketchpad().container().is_selectable();

        let size = app.sketchpad().paper().size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let canvas_rect = response.rect;
        app.sketchpad_mut().container_mut().set_rect(canvas_rect);

        if response.hovered() {
            ctx.set_cursor_icon(app.sketchpad().container().cursor());
        }

        // Handle input
        app.input_handler_mut().set_canvas_rect(canvas_rect);
        let events = app.input_handler_mut().process_input(ctx);
        for event in &events {
            app.sketchpad_mut().handle_input(event);
        }

        // Advance a replay in flight
        let now = time::current_time_secs();
        if let Some(next_due) = app.sketchpad_mut().tick(now) {
            ctx.request_repaint_after(Duration::from_secs_f64((next_due - now).max(0.0)));
        }

        // Render the canvas
        app.renderer()
            .render(&painter, canvas_rect, app.sketchpad().paper());
    });
}
