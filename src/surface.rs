use egui::{CursorIcon, PointerButton};

use crate::input::InputEvent;
use crate::paper::{Paper, SelectionGuard};
use crate::pen::Pen;
use crate::store::StrokeStore;
use crate::stroke::Stroke;

/// Routes pointer input on the container to the active pen.
///
/// While editing is off every event is ignored. A press inside the container
/// starts a stroke and locks text selection on the container until the
/// matching release; a release anywhere in the window ends it.
#[derive(Debug, Default)]
pub struct SurfaceController {
    editing: bool,
    pen: Pen,
    selection: Option<SelectionGuard>,
}

impl SurfaceController {
    pub fn new(pen: Pen) -> Self {
        Self {
            editing: false,
            pen,
            selection: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Start or stop reacting to input.
    ///
    /// Disabling in the middle of a stroke abandons it.
    pub fn set_editing(&mut self, enabled: bool, paper: &mut Paper) {
        if enabled == self.editing {
            return;
        }
        self.editing = enabled;

        if enabled {
            paper.container_mut().set_cursor(CursorIcon::Crosshair);
        } else {
            self.pen.cancel(paper);
            self.selection = None;
            paper.container_mut().set_cursor(CursorIcon::Default);
        }
        log::debug!(
            "editing {} on #{}",
            if enabled { "enabled" } else { "disabled" },
            paper.container().id()
        );
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }

    /// Swap the active pen, abandoning any stroke the old one was drawing
    pub fn set_pen(&mut self, pen: Pen, paper: &mut Paper) -> Pen {
        self.pen.cancel(paper);
        self.selection = None;
        std::mem::replace(&mut self.pen, pen)
    }

    /// Feed one input event. Returns the stroke a release produced, if any.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        paper: &mut Paper,
        store: &mut StrokeStore,
    ) -> Option<Stroke> {
        if !self.editing {
            return None;
        }

        match event {
            InputEvent::PointerDown { location, button } => {
                if *button == PointerButton::Primary && location.is_in_canvas {
                    self.selection = Some(paper.container().selection_flag().lock());
                    store.clear_redo();
                    self.pen.start(location.position, paper);
                }
                None
            }
            InputEvent::PointerMove { location } => {
                if location.is_in_canvas {
                    self.pen.move_to(location.position, paper);
                }
                None
            }
            InputEvent::PointerUp { button, .. } => {
                if *button != PointerButton::Primary {
                    return None;
                }
                self.selection = None;
                self.pen.finish(paper)
            }
        }
    }
}
