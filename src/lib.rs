#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod change;
pub mod error;
pub mod input;
pub mod mirror;
pub mod options;
pub mod panels;
pub mod paper;
pub mod path;
pub mod pen;
pub mod renderer;
pub mod replay;
pub mod sketchpad;
pub mod store;
pub mod stroke;
pub mod surface;
pub mod util;

pub use app::SketchpadApp;
pub use change::ChangeNotifier;
pub use error::{ParseError, PathError, SketchpadError};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use mirror::FieldMirror;
pub use options::SketchpadOptions;
pub use paper::{Container, ElementId, Paper};
pub use pen::{Pen, PenState};
pub use renderer::Renderer;
pub use replay::{ReplayStatus, ReplayTask};
pub use sketchpad::{Sketchpad, SurfaceTarget};
pub use store::StrokeStore;
pub use stroke::{LineCap, LineJoin, ShapeKind, Stroke, StrokeStyle};
pub use surface::SurfaceController;
