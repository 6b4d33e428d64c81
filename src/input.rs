use std::collections::BTreeSet;

use egui::{Context, PointerButton, Pos2, Rect, TouchId, TouchPhase};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the top-left corner of the drawing surface
    pub position: Pos2,
    /// Whether this position is within the drawing surface
    pub is_in_canvas: bool,
}

/// Pointer input the sketchpad reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Button pressed, or a single finger touched down
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Pointer moved, with or without a button held
    PointerMove { location: InputLocation },
    /// Button released anywhere in the window, or a finger lifted
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
}

/// Converts raw egui input into [`InputEvent`]s for one drawing surface.
///
/// Touch screens report both touch events and emulated pointer events for the
/// first finger. Pointer events drive drawing; touch events are only tracked to
/// notice a second finger, after which presses and moves are dropped until
/// every finger has lifted. Releases are always passed on so a stroke can end.
/// Losing window focus forgets every finger, since their end events may never
/// arrive.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    active_touches: BTreeSet<TouchId>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            active_touches: BTreeSet::new(),
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_multi_touch(&self) -> bool {
        self.active_touches.len() > 1
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process this frame's raw egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.process_events(&input.raw.events))
    }

    pub fn process_events(&mut self, raw: &[egui::Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                egui::Event::Touch { id, phase, .. } => match phase {
                    TouchPhase::Start => {
                        self.active_touches.insert(*id);
                        if self.is_multi_touch() {
                            log::debug!("multi-touch gesture, ignoring drawing input");
                        }
                    }
                    TouchPhase::End | TouchPhase::Cancel => {
                        self.active_touches.remove(id);
                    }
                    TouchPhase::Move => {}
                },
                egui::Event::PointerMoved(pos) => {
                    self.last_pointer_pos = Some(*pos);
                    if !self.is_multi_touch() {
                        events.push(InputEvent::PointerMove {
                            location: self.make_location(*pos),
                        });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let location = self.make_location(*pos);
                    if !*pressed {
                        events.push(InputEvent::PointerUp {
                            location,
                            button: *button,
                        });
                    } else if !self.is_multi_touch() {
                        events.push(InputEvent::PointerDown {
                            location,
                            button: *button,
                        });
                    }
                }
                egui::Event::PointerGone => {
                    self.last_pointer_pos = None;
                }
                egui::Event::WindowFocused(false) => {
                    self.active_touches.clear();
                }
                _ => {}
            }
        }

        events
    }

    pub fn last_pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }
}
