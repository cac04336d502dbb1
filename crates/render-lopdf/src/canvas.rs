use crate::document::{self, DocumentInfo};
use crate::state::StateStack;
use lopdf::content::Operation;
use lopdf::{Document, Object, StringFormat};
use placemat_render_core::encoding::to_win_ansi;
use placemat_render_core::{Canvas, PaintMode, RenderError, StandardFont};
use placemat_types::{Color, Rect, Size};
use std::io::Write;
use std::path::Path;

/// Values this close to zero are written as zero, so a 90 degree rotation
/// produces a clean matrix.
const SNAP: f64 = 1e-12;

/// A `Canvas` that records PDF content operators for a single page.
///
/// Nothing is written until `finish` or `save_to` assembles the document.
pub struct LopdfCanvas {
    page: Size,
    info: DocumentInfo,
    operations: Vec<Operation>,
    state: StateStack,
}

impl LopdfCanvas {
    pub fn new(page: Size) -> Self {
        Self {
            page,
            info: DocumentInfo::default(),
            operations: Vec::new(),
            state: StateStack::default(),
        }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// The content operators recorded so far.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Current `q` nesting depth.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Closes any open graphics states and assembles the page into a document.
    pub fn finish(mut self) -> Result<Document, RenderError> {
        if self.state.depth() > 0 {
            log::warn!(
                "Closing {} unrestored graphics state(s) before finishing the page",
                self.state.depth()
            );
            while self.state.pop() {
                self.push("Q", vec![]);
            }
        }
        log::debug!(
            "Assembling {:.2}x{:.2}pt page from {} content operators",
            self.page.width,
            self.page.height,
            self.operations.len()
        );
        document::assemble(self.page, &self.info, self.operations)
    }

    /// Assembles the document and writes it to `writer`.
    pub fn save_to<W: Write>(self, writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.finish()?;
        doc.save_to(writer)?;
        Ok(())
    }

    pub fn save(self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut file = std::fs::File::create(path)?;
        self.save_to(&mut file)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn push_color(&mut self, operator: &str, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.push(operator, vec![Object::Real(r), Object::Real(g), Object::Real(b)]);
    }

    fn push_matrix(&mut self, m: [f64; 6]) {
        let operands = m.iter().map(|&v| real(v)).collect();
        self.push("cm", operands);
    }

    fn current_font(&self, text: &str) -> Result<(StandardFont, f64), RenderError> {
        self.state
            .current()
            .font
            .ok_or_else(|| RenderError::NoFontSelected(text.to_string()))
    }

    fn show_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError> {
        let (font, size) = self.current_font(text)?;
        if text.is_empty() {
            return Ok(());
        }
        let resource = document::font_resource_name(font);
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(resource.as_bytes().to_vec()), real(size)],
        );
        self.push("Td", vec![real(x), real(y)]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }
}

fn real(value: f64) -> Object {
    let value = if value.abs() < SNAP { 0.0 } else { value };
    Object::Real(value as f32)
}

impl Canvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.current().fill == Some(color) {
            return;
        }
        self.state.current_mut().fill = Some(color);
        self.push_color("rg", color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.current().stroke == Some(color) {
            return;
        }
        self.state.current_mut().stroke = Some(color);
        self.push_color("RG", color);
    }

    fn set_line_width(&mut self, width: f64) {
        if self.state.current().line_width == width {
            return;
        }
        self.state.current_mut().line_width = width;
        // A zero-width line would be a device hairline; draw_rect skips the stroke instead.
        if width > 0.0 {
            self.push("w", vec![real(width)]);
        }
    }

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError> {
        let stroke = self.state.current().line_width > 0.0;
        let operator = match (paint, stroke) {
            (PaintMode::Fill, _) | (PaintMode::FillStroke, false) => "f",
            (PaintMode::FillStroke, true) => "B",
            (PaintMode::Stroke, true) => "S",
            (PaintMode::Stroke, false) => return Ok(()),
        };
        self.push(
            "re",
            vec![
                real(rect.x),
                real(rect.y),
                real(rect.width),
                real(rect.height),
            ],
        );
        self.push(operator, vec![]);
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f64) -> Result<(), RenderError> {
        if size <= 0.0 {
            return Err(RenderError::Other(format!(
                "font size must be positive, got {}",
                size
            )));
        }
        self.state.current_mut().font = Some((font, size));
        Ok(())
    }

    fn measure_text_width(&self, text: &str, font: StandardFont, size: f64) -> f64 {
        font.text_width(text, size)
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError> {
        self.show_text(x, y, text)
    }

    fn draw_text_centered(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError> {
        let (font, size) = self.current_font(text)?;
        let width = font.text_width(text, size);
        self.show_text(x - width / 2.0, y, text)
    }

    fn save_state(&mut self) {
        self.state.push();
        self.push("q", vec![]);
    }

    fn restore_state(&mut self) {
        if self.state.pop() {
            self.push("Q", vec![]);
        } else {
            log::warn!("Ignoring restore_state without a matching save_state");
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push_matrix([1.0, 0.0, 0.0, 1.0, dx, dy]);
    }

    fn rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.push_matrix([cos, sin, -sin, cos, 0.0, 0.0]);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push_matrix([sx, 0.0, 0.0, sy, 0.0, 0.0]);
    }
}
