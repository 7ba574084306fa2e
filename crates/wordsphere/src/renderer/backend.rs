//! Render backend trait definition

use serde::Serialize;

use super::surface::{Color, SurfaceCapabilities};
use crate::config::TextShadow;

/// Error type for rendering operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    /// Backend initialization failed
    #[error("Init error: {0}")]
    InitError(String),
    /// Frame rendering failed
    #[error("Frame error: {0}")]
    FrameError(String),
    /// Terminal-specific error
    #[error("Terminal error: {0}")]
    TerminalError(String),
}

/// One label to draw this frame
///
/// Self-contained: everything a backend needs travels with the command, so
/// no styling state is shared between draw calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub text: String,
    /// Anchor x: the label's centre on the surface
    pub x: f64,
    /// Anchor y: the label's centre on the surface
    pub y: f64,
    /// Text size in surface units
    pub size: f64,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<TextShadow>,
}

impl DrawCommand {
    /// Top-left corner that centres `bounds` on the anchor
    pub fn top_left(&self, bounds: TextBounds) -> (f64, f64) {
        (self.x - bounds.width / 2.0, self.y - bounds.height / 2.0)
    }
}

/// Measured extent of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

/// Backend rendering trait for the word cloud
pub trait RenderBackend: Send {
    /// Get surface capabilities
    fn capabilities(&self) -> SurfaceCapabilities;

    /// Begin a new render frame
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// End frame and present to display
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Clear the render surface with a color
    fn clear(&mut self, color: Color);

    /// Measure `text` as it would be drawn at `size`
    fn measure_text(&self, text: &str, size: f64) -> TextBounds;

    /// Draw a label centred on its anchor
    fn draw_text(&mut self, command: &DrawCommand);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_centres_bounds() {
        let command = DrawCommand {
            text: "word".into(),
            x: 100.0,
            y: 50.0,
            size: 20.0,
            opacity: 1.0,
            color: Color::White,
            shadow: None,
        };
        let (left, top) = command.top_left(TextBounds {
            width: 40.0,
            height: 20.0,
        });
        assert_eq!((left, top), (80.0, 40.0));
    }
}
