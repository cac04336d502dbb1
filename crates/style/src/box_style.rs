use crate::font::FontWeight;
use crate::palette::Palette;
use placemat_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrientation {
    #[default]
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, reading bottom to top.
    Vertical,
}

/// Visual style of a single labeled box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    pub fill: Color,
    pub text_color: Color,
    pub border_color: Color,
    /// Zero suppresses the visible border.
    pub border_width: f64,
    pub font_size: f64,
    pub weight: FontWeight,
    pub orientation: TextOrientation,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            text_color: Color::BLACK,
            border_color: Palette::DEEP_BLUE,
            border_width: 0.5,
            font_size: 7.0,
            weight: FontWeight::Regular,
            orientation: TextOrientation::Horizontal,
        }
    }
}

impl BoxStyle {
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn borderless(self) -> Self {
        self.with_border_width(0.0)
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = TextOrientation::Vertical;
        self
    }

    /// A solid header: colored fill, white bold text.
    pub fn header(fill: Color) -> Self {
        Self::default()
            .with_fill(fill)
            .with_text_color(Color::WHITE)
            .bold()
    }
}
