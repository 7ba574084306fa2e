//! Rendering backend abstraction for the word cloud
//!
//! The cloud produces self-contained draw commands; backends measure and
//! place them:
//! - Recording backend for headless use and tests
//! - Terminal backend for interactive display

mod backend;
mod recording;
mod surface;
pub mod terminal;

pub use backend::{DrawCommand, RenderBackend, RenderError, TextBounds};
pub use recording::{PlacedText, RecordingBackend};
pub use surface::{Color, SurfaceCapabilities};
