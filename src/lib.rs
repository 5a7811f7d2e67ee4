#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod orientation;
pub mod renderer;
pub mod stroke;

pub use app::DrawingApp;
pub use document::Document;
pub use error::{DrawError, DrawResult};
pub use export::{ExportError, ExportResult};
pub use geometry::CurveSegment;
pub use input::PointerTracker;
pub use orientation::{Orientation, rotation_delta_degrees};
pub use renderer::Renderer;
pub use stroke::Stroke;
