use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, SketchpadError};
use crate::stroke::{Stroke, validate_strokes};

pub const DEFAULT_SIZE: f32 = 100.0;

/// Construction options for a [`crate::Sketchpad`].
///
/// Every field is optional, so `{}` is a valid options document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadOptions {
    /// Width of a freshly created paper
    pub width: Option<f32>,
    /// Height of a freshly created paper
    pub height: Option<f32>,
    /// Id of the field mirroring the drawing. Its presence enables editing.
    pub input: Option<String>,
    /// Strokes to start with
    pub strokes: Option<Vec<Stroke>>,
}

impl SketchpadOptions {
    pub fn from_json(json: &str) -> Result<Self, SketchpadError> {
        let options: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        if let Some(strokes) = &options.strokes {
            validate_strokes(strokes)?;
        }
        Ok(options)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SketchpadError> {
        let path = path.as_ref();
        log::info!("loading sketchpad options from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_SIZE)
    }

    pub fn height(&self) -> f32 {
        self.height.unwrap_or(DEFAULT_SIZE)
    }
}
