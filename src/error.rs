use thiserror::Error;

/// Errors raised while building a sketchpad or loading its options
#[derive(Debug, Error)]
pub enum SketchpadError {
    /// The surface target can't be drawn on
    #[error("invalid drawing surface: {0}")]
    InvalidSurface(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing externally supplied stroke data
#[derive(Debug, Error)]
pub enum ParseError {
    /// Not valid JSON, or a record of an unknown shape
    #[error("malformed stroke data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record that parsed but carries unusable values
    #[error("stroke {index} is invalid: {reason}")]
    InvalidStroke { index: usize, reason: String },
}

/// Errors raised while reading a path description
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("unsupported path command '{command}' at byte {offset}")]
    UnsupportedCommand { command: char, offset: usize },

    #[error("expected a number at byte {offset}")]
    ExpectedNumber { offset: usize },

    #[error("path must start with a move command")]
    MissingMove,
}
