use std::cell::Cell;
use std::rc::Rc;

use egui::{Color32, Rect};
use serde::{Deserialize, Serialize};

use crate::error::SketchpadError;
use crate::input::InputHandler;
use crate::options::SketchpadOptions;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::{self, Renderer};
use crate::sketchpad::Sketchpad;

pub const CONTAINER_ID: &str = "sketchpad";
pub const MIRROR_FIELD_ID: &str = "sketchpad_json";
pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

/// What survives a restart: the drawing and the pen settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SavedState {
    strokes: String,
    pen_color: String,
    pen_width: f32,
    pen_opacity: f32,
}

impl Default for SavedState {
    fn default() -> Self {
        let pen = crate::pen::Pen::default();
        Self {
            strokes: String::from("[]"),
            pen_color: pen.color().to_owned(),
            pen_width: pen.width(),
            pen_opacity: pen.opacity(),
        }
    }
}

pub struct SketchpadApp {
    sketchpad: Sketchpad,
    renderer: Renderer,
    input: InputHandler,
    pen_color: Color32,
    replay_interval_ms: u64,
    import_buffer: String,
    import_error: Option<String>,
    revision: Rc<Cell<u64>>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut options: SketchpadOptions,
    ) -> Result<Self, SketchpadError> {
        options.width.get_or_insert(DEFAULT_CANVAS_WIDTH);
        options.height.get_or_insert(DEFAULT_CANVAS_HEIGHT);
        options.input.get_or_insert_with(|| MIRROR_FIELD_ID.to_owned());

        let saved: Option<SavedState> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        let restore_strokes = options.strokes.is_none();

        let mut sketchpad = Sketchpad::new(CONTAINER_ID, options)?;
        if let Some(saved) = saved {
            sketchpad
                .pen_mut()
                .set_color(saved.pen_color)
                .set_width(saved.pen_width)
                .set_opacity(saved.pen_opacity);
            if restore_strokes {
                if let Err(e) = sketchpad.set_json(&saved.strokes) {
                    log::warn!("discarding saved drawing: {e}");
                }
            }
        }

        let revision = Rc::new(Cell::new(0));
        let counter = revision.clone();
        let ctx = cc.egui_ctx.clone();
        sketchpad.on_change(move || {
            counter.set(counter.get() + 1);
            ctx.request_repaint();
        });

        Ok(Self {
            pen_color: renderer::parse_color(sketchpad.pen().color()),
            sketchpad,
            renderer: Renderer::default(),
            input: InputHandler::new(Rect::NOTHING),
            replay_interval_ms: 500,
            import_buffer: String::new(),
            import_error: None,
            revision,
        })
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Number of changes since start-up
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub(crate) fn pen_color_mut(&mut self) -> &mut Color32 {
        &mut self.pen_color
    }

    pub(crate) fn replay_interval_ms_mut(&mut self) -> &mut u64 {
        &mut self.replay_interval_ms
    }

    pub(crate) fn replay_interval_ms(&self) -> u64 {
        self.replay_interval_ms
    }

    pub(crate) fn import_buffer_mut(&mut self) -> &mut String {
        &mut self.import_buffer
    }

    pub(crate) fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }

    /// Load the import buffer as the drawing
    pub(crate) fn import(&mut self) {
        match self.sketchpad.set_json(&self.import_buffer) {
            Ok(()) => {
                log::info!("imported {} strokes", self.sketchpad.strokes().len());
                self.import_error = None;
                self.import_buffer.clear();
            }
            Err(e) => {
                log::warn!("import failed: {e}");
                self.import_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let pen = self.sketchpad.pen();
        let saved = SavedState {
            strokes: self.sketchpad.json(),
            pen_color: pen.color().to_owned(),
            pen_width: pen.width(),
            pen_opacity: pen.opacity(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &saved);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
