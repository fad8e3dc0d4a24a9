//! The renderer seam widgets draw against.

use super::font::Font;
use super::types::{Color, Point, Rect};

/// Drawing primitives a host backend must provide.
///
/// Widgets only ever paint through this trait, so the toolkit can be
/// embedded in any shell that can fill rectangles and circles and draw a
/// line of text. Coordinates are widget-local.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a single line of text with its baseline-left at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Point,
        color: Color,
    },
}

/// A renderer that records commands instead of rasterizing.
///
/// Used by widget tests to assert on paint output, and by the demo
/// harness to log what would be drawn.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Count recorded circle fills (page-indicator dots, mostly).
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Find the first drawn text, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color) {
        let _ = font;
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}
