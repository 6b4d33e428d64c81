use egui::Pos2;

use crate::paper::{ElementId, Paper};
use crate::path::path_data;
use crate::stroke::{Stroke, StrokeStyle, DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_WIDTH};

pub const MIN_WIDTH: f32 = 1.0;
pub const MAX_WIDTH: f32 = 20.0;

/// Where the pen is in a stroke
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PenState {
    #[default]
    Idle,
    Drawing {
        points: Vec<Pos2>,
        style: StrokeStyle,
        preview: ElementId,
    },
}

/// Turns pointer samples into path strokes.
///
/// Style changes apply from the next [`Pen::start`]; a stroke in progress keeps
/// the style it started with.
#[derive(Debug, Clone)]
pub struct Pen {
    color: String,
    opacity: f32,
    width: f32,
    state: PenState,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            opacity: DEFAULT_OPACITY,
            width: DEFAULT_WIDTH,
            state: PenState::Idle,
        }
    }
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = color.into();
        self
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped to [0, 1]. NaN is ignored.
    pub fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        if opacity.is_nan() {
            log::warn!("ignoring NaN pen opacity");
        } else {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width, clamped to [`MIN_WIDTH`, `MAX_WIDTH`]. NaN is ignored.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        if width.is_nan() {
            log::warn!("ignoring NaN pen width");
        } else {
            self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        }
        self
    }

    /// The style the next stroke will be drawn with
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.clone(),
            opacity: self.opacity,
            width: self.width,
            ..StrokeStyle::default()
        }
    }

    pub fn state(&self) -> &PenState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PenState::Drawing { .. })
    }

    /// Begin a stroke at `pos` with a live preview on the paper
    pub fn start(&mut self, pos: Pos2, paper: &mut Paper) {
        if self.is_drawing() {
            log::debug!("pen restarted without a release, dropping the previous stroke");
            self.cancel(paper);
        }

        let style = self.style();
        let preview = paper.path(style.clone());
        self.state = PenState::Drawing {
            points: vec![pos],
            style,
            preview,
        };
    }

    /// Extend the stroke in progress. Does nothing while idle.
    ///
    /// If the paper was cleared under the stroke, the preview is added again.
    pub fn move_to(&mut self, pos: Pos2, paper: &mut Paper) {
        if let PenState::Drawing {
            points,
            style,
            preview,
        } = &mut self.state
        {
            points.push(pos);
            let path = path_data(points);
            if !paper.set_path(*preview, path.clone()) {
                *preview = paper.add(Stroke::new(path, style.clone()));
            }
        }
    }

    /// End the stroke at the pointer release
    pub fn finish(&mut self, paper: &mut Paper) -> Option<Stroke> {
        self.stop(paper)
    }

    /// End the stroke and return it.
    ///
    /// A stroke with fewer than two samples is a click, not a line: its preview
    /// is removed and nothing is returned.
    pub fn stop(&mut self, paper: &mut Paper) -> Option<Stroke> {
        let PenState::Drawing {
            points,
            style,
            preview,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };

        if points.len() < 2 {
            paper.remove(preview);
            return None;
        }

        Some(Stroke::new(path_data(&points), style))
    }

    /// Abandon the stroke in progress and remove its preview
    pub fn cancel(&mut self, paper: &mut Paper) {
        if let PenState::Drawing { preview, .. } = std::mem::take(&mut self.state) {
            paper.remove(preview);
        }
    }
}
