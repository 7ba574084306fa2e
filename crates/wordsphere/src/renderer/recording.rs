//! Headless backend that records what would have been drawn

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::backend::{DrawCommand, RenderBackend, RenderError, TextBounds};
use super::surface::{Color, SurfaceCapabilities};

/// Average glyph advance as a fraction of the text size
const ADVANCE_RATIO: f64 = 0.6;

/// A label as placed on the surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub command: DrawCommand,
    pub left: f64,
    pub top: f64,
    pub bounds: TextBounds,
}

/// In-memory render target
///
/// Uses fixed-advance metrics: every column is `ADVANCE_RATIO * size` wide and
/// a line is `size` tall.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    width: f64,
    height: f64,
    placed: Vec<PlacedText>,
    frames: u64,
}

impl RecordingBackend {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            placed: Vec::new(),
            frames: 0,
        }
    }

    /// Labels drawn since the last `begin_frame`
    pub fn placed(&self) -> &[PlacedText] {
        &self.placed
    }

    /// Frames completed with `end_frame`
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for RecordingBackend {
    fn capabilities(&self) -> SurfaceCapabilities {
        SurfaceCapabilities {
            width: self.width,
            height: self.height,
        }
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.placed.clear();
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }

    fn clear(&mut self, _color: Color) {
        self.placed.clear();
    }

    fn measure_text(&self, text: &str, size: f64) -> TextBounds {
        TextBounds {
            width: text.width() as f64 * size * ADVANCE_RATIO,
            height: size,
        }
    }

    fn draw_text(&mut self, command: &DrawCommand) {
        let bounds = self.measure_text(&command.text, command.size);
        let (left, top) = command.top_left(bounds);
        self.placed.push(PlacedText {
            command: command.clone(),
            left,
            top,
            bounds,
        });
    }
}
