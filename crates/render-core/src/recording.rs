//! An in-memory canvas that records every drawing call.
//!
//! Useful for inspecting what the layout code asks a backend to draw without
//! producing a document.

use crate::canvas::{Canvas, PaintMode};
use crate::error::RenderError;
use crate::font::StandardFont;
use placemat_types::{Color, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    Rect { rect: Rect, paint: PaintMode },
    SetFont { font: StandardFont, size: f64 },
    Text { x: f64, y: f64, text: String, centered: bool },
    SaveState,
    RestoreState,
    Translate { dx: f64, dy: f64 },
    Rotate { degrees: f64 },
    Scale { sx: f64, sy: f64 },
}

/// A recorded text draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText<'a> {
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub centered: bool,
}

pub struct RecordingCanvas {
    page: Size,
    commands: Vec<DrawCommand>,
    font: Option<(StandardFont, f64)>,
    saved_fonts: Vec<Option<(StandardFont, f64)>>,
    unbalanced_restores: usize,
    fail_text: bool,
}

impl RecordingCanvas {
    pub fn new(page: Size) -> Self {
        Self {
            page,
            commands: Vec::new(),
            font: None,
            saved_fonts: Vec::new(),
            unbalanced_restores: 0,
            fail_text: false,
        }
    }

    /// Makes every text draw fail, for exercising error paths.
    pub fn failing_text(mut self) -> Self {
        self.fail_text = true;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current save/restore nesting.
    pub fn depth(&self) -> usize {
        self.saved_fonts.len()
    }

    /// True when every save has been restored and no restore ran without a save.
    pub fn is_balanced(&self) -> bool {
        self.saved_fonts.is_empty() && self.unbalanced_restores == 0
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = RecordedText<'_>> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text {
                x,
                y,
                text,
                centered,
            } => Some(RecordedText {
                text: text.as_str(),
                x: *x,
                y: *y,
                centered: *centered,
            }),
            _ => None,
        })
    }

    fn record_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        centered: bool,
    ) -> Result<(), RenderError> {
        if self.font.is_none() {
            return Err(RenderError::NoFontSelected(text.to_string()));
        }
        if self.fail_text {
            return Err(RenderError::Other(format!("refused to draw '{}'", text)));
        }
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            centered,
        });
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.page
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Rect { rect, paint });
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f64) -> Result<(), RenderError> {
        self.font = Some((font, size));
        self.commands.push(DrawCommand::SetFont { font, size });
        Ok(())
    }

    fn measure_text_width(&self, text: &str, font: StandardFont, size: f64) -> f64 {
        font.text_width(text, size)
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError> {
        self.record_text(x, y, text, false)
    }

    fn draw_text_centered(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError> {
        self.record_text(x, y, text, true)
    }

    fn save_state(&mut self) {
        self.saved_fonts.push(self.font);
        self.commands.push(DrawCommand::SaveState);
    }

    fn restore_state(&mut self) {
        match self.saved_fonts.pop() {
            Some(font) => self.font = font,
            None => {
                log::warn!("restore_state called without a matching save_state");
                self.unbalanced_restores += 1;
            }
        }
        self.commands.push(DrawCommand::RestoreState);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::Rotate { degrees });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }
}
