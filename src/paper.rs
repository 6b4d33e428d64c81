//! The retained vector scene strokes are drawn on.
//!
//! egui is immediate mode, so the sketchpad keeps its own list of path
//! elements and the renderer paints them every frame. Pens allocate their live
//! preview here and the sketchpad rebuilds it from the committed strokes on
//! every redraw.

use std::cell::Cell;
use std::rc::Rc;

use egui::{CursorIcon, Rect};

use crate::error::SketchpadError;
use crate::stroke::{Stroke, StrokeStyle};

/// Handle to an element on a [`Paper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

#[derive(Debug, Clone)]
struct Element {
    id: ElementId,
    stroke: Stroke,
}

/// The widget area hosting the paper
#[derive(Debug)]
pub struct Container {
    id: String,
    cursor: CursorIcon,
    selectable: SelectionFlag,
    rect: Option<Rect>,
}

impl Container {
    fn new(id: String) -> Self {
        Self {
            id,
            cursor: CursorIcon::Default,
            selectable: SelectionFlag::default(),
            rect: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cursor shown while hovering the container
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    /// Whether text inside the container may be selected right now
    pub fn is_selectable(&self) -> bool {
        self.selectable.get()
    }

    pub(crate) fn selection_flag(&self) -> SelectionFlag {
        self.selectable.clone()
    }

    /// Screen rect the container was last laid out at
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}

/// Shared "text may be selected" switch for a single container
#[derive(Debug, Clone)]
pub(crate) struct SelectionFlag(Rc<Cell<bool>>);

impl Default for SelectionFlag {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl SelectionFlag {
    pub(crate) fn get(&self) -> bool {
        self.0.get()
    }

    /// Disable selection until the returned guard is dropped
    pub(crate) fn lock(&self) -> SelectionGuard {
        self.0.set(false);
        SelectionGuard { flag: self.clone() }
    }
}

/// Keeps selection disabled on its container while alive
#[derive(Debug)]
pub(crate) struct SelectionGuard {
    flag: SelectionFlag,
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        self.flag.0.set(true);
    }
}

/// A fixed-size drawing surface holding path elements in z-order
#[derive(Debug)]
pub struct Paper {
    width: f32,
    height: f32,
    container: Container,
    elements: Vec<Element>,
    next_id: u64,
}

impl Paper {
    /// Create a paper inside the container named `element_id`.
    ///
    /// A leading `#` is accepted and stripped.
    pub fn new(element_id: &str, width: f32, height: f32) -> Result<Self, SketchpadError> {
        let id = element_id.strip_prefix('#').unwrap_or(element_id);
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(SketchpadError::InvalidSurface(format!(
                "'{element_id}' is not a valid element id"
            )));
        }
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SketchpadError::InvalidSurface(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        Ok(Self {
            width,
            height,
            container: Container::new(id.to_owned()),
            elements: Vec::new(),
            next_id: 1,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub(crate) fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Add an empty path with the given style, returning its handle
    pub fn path(&mut self, style: StrokeStyle) -> ElementId {
        self.add(Stroke::new(String::new(), style))
    }

    /// Add a copy of a stroke
    pub fn add(&mut self, stroke: Stroke) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(Element { id, stroke });
        id
    }

    /// Add every stroke, in order
    pub fn display<'a>(&mut self, strokes: impl IntoIterator<Item = &'a Stroke>) {
        for stroke in strokes {
            self.add(stroke.clone());
        }
    }

    /// Replace the geometry of an element. Returns false if it's gone.
    pub fn set_path(&mut self, id: ElementId, path: String) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.stroke.set_path(path);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Stroke> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index).stroke)
    }

    pub fn get(&self, id: ElementId) -> Option<&Stroke> {
        self.elements.iter().find(|e| e.id == id).map(|e| &e.stroke)
    }

    /// Elements in paint order
    pub fn elements(&self) -> impl Iterator<Item = &Stroke> {
        self.elements.iter().map(|e| &e.stroke)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}
