//! The drawing widget: strokes, undo history, input and replay in one place.
//!
//! ```text
//! input ─► SurfaceController ─► Pen (preview on Paper)
//!                                  │ release
//!                                  ▼
//!                             StrokeStore ─► redraw Paper ─► mirror ─► on_change
//! ```
//!
//! Every mutation goes through [`Sketchpad`] so the paper, the mirror field and
//! the change subscriber never fall out of step with the store.

use std::time::Duration;

use crate::change::ChangeNotifier;
use crate::error::{ParseError, SketchpadError};
use crate::input::InputEvent;
use crate::mirror::FieldMirror;
use crate::options::SketchpadOptions;
use crate::paper::{Container, Paper};
use crate::pen::Pen;
use crate::replay::{self, ReplayStatus, ReplayTask};
use crate::store::StrokeStore;
use crate::stroke::{Stroke, parse_strokes, validate_strokes};
use crate::surface::SurfaceController;
use crate::util::time;

/// What a sketchpad draws on
#[derive(Debug)]
pub enum SurfaceTarget {
    /// An existing paper, used as-is
    Paper(Paper),
    /// A container id; a paper is created with the size from the options
    ElementId(String),
}

impl From<Paper> for SurfaceTarget {
    fn from(paper: Paper) -> Self {
        Self::Paper(paper)
    }
}

impl From<&str> for SurfaceTarget {
    fn from(id: &str) -> Self {
        Self::ElementId(id.to_owned())
    }
}

#[derive(Debug)]
pub struct Sketchpad {
    paper: Paper,
    store: StrokeStore,
    controller: SurfaceController,
    notifier: ChangeNotifier,
    mirror: Option<FieldMirror>,
    replay: Option<ReplayTask>,
}

impl Sketchpad {
    /// Build a sketchpad on `target`.
    ///
    /// Editing starts enabled when the options name a mirror field.
    pub fn new(
        target: impl Into<SurfaceTarget>,
        options: SketchpadOptions,
    ) -> Result<Self, SketchpadError> {
        let paper = match target.into() {
            SurfaceTarget::Paper(paper) => paper,
            SurfaceTarget::ElementId(id) => Paper::new(&id, options.width(), options.height())?,
        };

        let strokes = options.strokes.unwrap_or_default();
        validate_strokes(&strokes)?;

        let mirror = options.input.as_deref().map(FieldMirror::new);
        let editing = mirror.is_some();

        let mut sketchpad = Self {
            paper,
            store: StrokeStore::with_strokes(strokes),
            controller: SurfaceController::new(Pen::new()),
            notifier: ChangeNotifier::new(),
            mirror,
            replay: None,
        };
        sketchpad.redraw();
        sketchpad.set_editing(editing);

        log::info!(
            "sketchpad on #{} ({}x{}) with {} strokes",
            sketchpad.paper.container().id(),
            sketchpad.paper.width(),
            sketchpad.paper.height(),
            sketchpad.store.strokes().len()
        );
        Ok(sketchpad)
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn container(&self) -> &Container {
        self.paper.container()
    }

    pub(crate) fn container_mut(&mut self) -> &mut Container {
        self.paper.container_mut()
    }

    pub fn mirror(&self) -> Option<&FieldMirror> {
        self.mirror.as_ref()
    }

    pub fn pen(&self) -> &Pen {
        self.controller.pen()
    }

    pub fn pen_mut(&mut self) -> &mut Pen {
        self.controller.pen_mut()
    }

    /// Swap the active pen, returning the previous one
    pub fn set_pen(&mut self, pen: Pen) -> Pen {
        self.controller.set_pen(pen, &mut self.paper)
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.store.strokes()
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// Replace every committed stroke. Invalid strokes are rejected and
    /// nothing changes.
    pub fn set_strokes(&mut self, strokes: Vec<Stroke>) -> Result<(), SketchpadError> {
        validate_strokes(&strokes)?;
        self.store.replace_strokes(strokes);
        self.changed();
        Ok(())
    }

    /// The drawing as a JSON array
    pub fn json(&self) -> String {
        self.store.serialize()
    }

    /// Load a drawing from JSON. On error nothing changes.
    pub fn set_json(&mut self, json: &str) -> Result<(), SketchpadError> {
        let strokes = parse_strokes(json)?;
        self.store.replace_strokes(strokes);
        self.changed();
        Ok(())
    }

    pub fn undoable(&self) -> bool {
        self.store.undoable()
    }

    pub fn undo(&mut self) {
        if self.store.undo() {
            self.changed();
        }
    }

    pub fn redoable(&self) -> bool {
        self.store.redoable()
    }

    pub fn redo(&mut self) {
        if self.store.redo() {
            self.changed();
        }
    }

    /// Remove all strokes. Undone strokes remain redoable.
    pub fn clear(&mut self) {
        self.store.clear();
        self.changed();
    }

    /// Subscribe to changes, replacing any previous subscriber
    pub fn on_change(&mut self, callback: impl FnMut() + 'static) {
        self.notifier.subscribe(callback);
    }

    pub fn remove_on_change(&mut self) {
        self.notifier.unsubscribe();
    }

    pub fn is_editing(&self) -> bool {
        self.controller.is_editing()
    }

    pub fn set_editing(&mut self, enabled: bool) {
        self.controller.set_editing(enabled, &mut self.paper);
    }

    /// Feed one input event, committing the stroke a release produces
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(stroke) = self
            .controller
            .handle_event(event, &mut self.paper, &mut self.store)
        {
            if let Err(e) = self.commit(stroke) {
                log::warn!("dropping drawn stroke: {e}");
            }
        }
    }

    /// Append a finished stroke. An invalid stroke is rejected and nothing changes.
    pub fn commit(&mut self, stroke: Stroke) -> Result<(), SketchpadError> {
        let index = self.store.strokes().len();
        stroke
            .validate()
            .map_err(|reason| ParseError::InvalidStroke { index, reason })?;

        log::debug!("committing stroke {}", index + 1);
        self.store.commit(stroke);
        self.changed();
        Ok(())
    }

    /// Replay the drawing with the default interval
    pub fn animate_default(&mut self) {
        self.animate(replay::DEFAULT_INTERVAL);
    }

    /// Replay the drawing one stroke per `interval`, replacing any replay in flight
    pub fn animate(&mut self, interval: Duration) {
        self.animate_at(interval, time::current_time_secs());
    }

    /// [`Sketchpad::animate`] with an explicit start time in seconds
    pub fn animate_at(&mut self, interval: Duration, now: f64) {
        self.paper.clear();
        let mut task = ReplayTask::new(interval, now);
        match task.poll(now, self.store.strokes(), &mut self.paper) {
            ReplayStatus::Pending { .. } => self.replay = Some(task),
            ReplayStatus::Finished => self.replay = None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.replay.is_some()
    }

    /// Stop a replay in flight, leaving the paper as it is
    pub fn cancel_animation(&mut self) {
        if self.replay.take().is_some() {
            log::debug!("replay cancelled");
        }
    }

    /// Advance a replay in flight. Returns when it next needs a tick.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let task = self.replay.as_mut()?;
        match task.poll(now, self.store.strokes(), &mut self.paper) {
            ReplayStatus::Pending { next_due } => Some(next_due),
            ReplayStatus::Finished => {
                self.replay = None;
                None
            }
        }
    }

    fn changed(&mut self) {
        self.cancel_animation();
        self.redraw();
        self.notifier.fire();
    }

    fn redraw(&mut self) {
        self.paper.clear();
        self.paper.display(self.store.strokes());
        if let Some(mirror) = &self.mirror {
            mirror.sync(&self.store.serialize());
        }
    }
}
