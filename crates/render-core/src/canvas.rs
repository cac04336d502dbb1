use crate::error::RenderError;
use crate::font::StandardFont;
use placemat_types::{Color, Rect, Size};

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

/// A single-page 2D vector drawing surface.
///
/// Coordinates are PDF points with a bottom-left origin. Color, line width, font and
/// the transformation matrix are all part of the graphics state that `save_state` /
/// `restore_state` push and pop; prefer `StateGuard` over calling them directly.
pub trait Canvas {
    /// Size of the page being drawn.
    fn page_size(&self) -> Size;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError>;

    /// Selects the font for subsequent text draws.
    fn set_font(&mut self, font: StandardFont, size: f64) -> Result<(), RenderError>;

    /// Advance width of `text` in points.
    fn measure_text_width(&self, text: &str, font: StandardFont, size: f64) -> f64;

    /// Draws `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError>;

    /// Draws `text` with its baseline centered on `(x, y)`.
    fn draw_text_centered(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError>;

    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Counter-clockwise rotation in degrees.
    fn rotate(&mut self, degrees: f64);

    fn scale(&mut self, sx: f64, sy: f64);
}
