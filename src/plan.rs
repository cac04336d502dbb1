//! A fully positioned description of the placemat, built before anything is drawn.

use placemat_render_core::StandardFont;
use placemat_style::BoxStyle;
use placemat_types::{Color, Point, Rect, SectionId, Size};

/// A single labeled box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBox {
    pub rect: Rect,
    pub label: String,
    pub style: BoxStyle,
}

/// Free text with its baseline starting at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedText {
    pub origin: Point,
    pub text: String,
    pub font: StandardFont,
    pub size: f64,
    pub color: Color,
}

/// Labels packed into `region` by the grid packer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedGrid {
    pub region: Rect,
    pub items: &'static [&'static str],
    pub columns: usize,
    pub border_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSection {
    pub id: SectionId,
    pub header: Option<PlannedBox>,
    pub boxes: Vec<PlannedBox>,
    pub texts: Vec<PlannedText>,
    pub grid: Option<PlannedGrid>,
}

impl PlannedSection {
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            header: None,
            boxes: Vec::new(),
            texts: Vec::new(),
            grid: None,
        }
    }

    pub fn with_header(mut self, header: PlannedBox) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_box(mut self, planned: PlannedBox) -> Self {
        self.boxes.push(planned);
        self
    }

    pub fn with_text(mut self, text: PlannedText) -> Self {
        self.texts.push(text);
        self
    }

    pub fn with_grid(mut self, grid: PlannedGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Header label, if the section has a header box.
    pub fn title(&self) -> Option<&str> {
        self.header.as_ref().map(|h| h.label.as_str())
    }

    /// Every rectangle the section paints, header first.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.header
            .iter()
            .chain(self.boxes.iter())
            .map(|b| b.rect)
            .chain(self.grid.iter().map(|g| g.region))
    }
}

/// The whole page, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacematPlan {
    pub page: Size,
    pub sections: Vec<PlannedSection>,
}

impl PlacematPlan {
    pub fn section(&self, id: &str) -> Option<&PlannedSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    /// Number of labels across every grid.
    pub fn item_count(&self) -> usize {
        self.sections
            .iter()
            .filter_map(|s| s.grid.as_ref())
            .map(|g| g.items.len())
            .sum()
    }
}
