use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::path::parse_path;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_OPACITY: f32 = 1.0;
pub const DEFAULT_WIDTH: f32 = 5.0;

/// Shape discriminant of a stroke record. Only paths are drawn freehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    #[serde(rename = "path")]
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Style applied to a path: everything but its geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    #[serde(rename = "stroke", default = "default_color")]
    pub color: String,
    #[serde(rename = "stroke-opacity", default = "default_opacity")]
    pub opacity: f32,
    #[serde(rename = "stroke-width", default = "default_width")]
    pub width: f32,
    #[serde(rename = "stroke-linecap", default)]
    pub line_cap: LineCap,
    #[serde(rename = "stroke-linejoin", default)]
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: default_color(),
            opacity: DEFAULT_OPACITY,
            width: DEFAULT_WIDTH,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_owned()
}

fn default_opacity() -> f32 {
    DEFAULT_OPACITY
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}

/// A committed freehand stroke.
///
/// Serializes to the flat attribute object used by the JSON export:
/// `{"type":"path","path":"M0,0L1,1","stroke":"#000000",...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type")]
    kind: ShapeKind,
    path: String,
    #[serde(flatten)]
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(path: impl Into<String>, style: StrokeStyle) -> Self {
        Self {
            kind: ShapeKind::Path,
            path: path.into(),
            style,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Path description of the stroke geometry
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }

    /// Check values serde can't: path syntax and style ranges.
    pub fn validate(&self) -> Result<(), String> {
        parse_path(&self.path).map_err(|e| e.to_string())?;

        let StrokeStyle { opacity, width, .. } = self.style;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(format!("opacity {opacity} is outside [0, 1]"));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(format!("width {width} is not a positive number"));
        }
        Ok(())
    }
}

/// Parse a JSON array of stroke records.
///
/// Records of an unknown `type` are rejected by serde; records that parse but
/// carry an unusable path or style are rejected with their index. Attributes
/// the sketchpad doesn't use are ignored.
pub fn parse_strokes(json: &str) -> Result<Vec<Stroke>, ParseError> {
    let strokes: Vec<Stroke> = serde_json::from_str(json)?;
    validate_strokes(&strokes)?;
    Ok(strokes)
}

/// Validate every stroke, reporting the first bad one by index
pub fn validate_strokes(strokes: &[Stroke]) -> Result<(), ParseError> {
    for (index, stroke) in strokes.iter().enumerate() {
        stroke
            .validate()
            .map_err(|reason| ParseError::InvalidStroke { index, reason })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_attributes() {
        let stroke = Stroke::new("M0,0L1,1", StrokeStyle::default());
        let value = serde_json::to_value(&stroke).unwrap();

        assert_eq!(value["type"], "path");
        assert_eq!(value["path"], "M0,0L1,1");
        assert_eq!(value["stroke"], "#000000");
        assert_eq!(value["stroke-opacity"], 1.0);
        assert_eq!(value["stroke-width"], 5.0);
        assert_eq!(value["stroke-linecap"], "round");
        assert_eq!(value["stroke-linejoin"], "round");
    }

    #[test]
    fn missing_style_falls_back_to_defaults() {
        let strokes = parse_strokes(r#"[{"type":"path","path":"M0,0L3,4"}]"#).unwrap();
        assert_eq!(strokes[0].style(), &StrokeStyle::default());
    }

    #[test]
    fn ignores_extra_attributes() {
        let json = r##"[{"type":"path","path":"M0,0L3,4","fill":"none","stroke":"#ff0000"}]"##;
        let strokes = parse_strokes(json).unwrap();
        assert_eq!(strokes[0].style().color, "#ff0000");
    }

    #[test]
    fn rejects_unknown_shapes() {
        let err = parse_strokes(r#"[{"type":"circle","cx":1,"cy":1,"r":2}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_strokes("[{\"type\":").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));

        let err = parse_strokes("alert('hi')").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn rejects_out_of_range_style() {
        let json = r#"[
            {"type":"path","path":"M0,0L1,1"},
            {"type":"path","path":"M0,0L1,1","stroke-opacity":2}
        ]"#;
        match parse_strokes(json).unwrap_err() {
            ParseError::InvalidStroke { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }

        let json = r#"[{"type":"path","path":"M0,0L1,1","stroke-width":0}]"#;
        assert!(matches!(
            parse_strokes(json).unwrap_err(),
            ParseError::InvalidStroke { index: 0, .. }
        ));
    }

    #[test]
    fn rejects_bad_geometry() {
        let json = r#"[{"type":"path","path":"M0,0Q1,1,2,2"}]"#;
        assert!(matches!(
            parse_strokes(json).unwrap_err(),
            ParseError::InvalidStroke { index: 0, .. }
        ));
    }
}
