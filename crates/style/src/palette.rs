use placemat_types::Color;
use serde::{Deserialize, Serialize};

/// Which header color a section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Purple,
    Grey,
}

/// Every color the placemat draws with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub blue_header: Color,
    pub purple_header: Color,
    pub grey_header: Color,
    pub red_text: Color,
    pub legend_entitled: Color,
    pub legend_opportunity: Color,
    pub legend_explore: Color,
    pub legend_at_risk: Color,
    pub badge_fill: Color,
    pub footer_fill: Color,
}

impl Palette {
    pub const DEEP_BLUE: Color = Color::rgb(0x16, 0x36, 0x5C);
    pub const PURPLE: Color = Color::rgb(0x70, 0x30, 0xA0);
    pub const DARK_GREY: Color = Color::rgb(0x40, 0x40, 0x40);
    pub const DARK_RED: Color = Color::rgb(0xC0, 0x00, 0x00);

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Blue => self.blue_header,
            Tone::Purple => self.purple_header,
            Tone::Grey => self.grey_header,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            blue_header: Self::DEEP_BLUE,
            purple_header: Self::PURPLE,
            grey_header: Self::DARK_GREY,
            red_text: Self::DARK_RED,
            legend_entitled: Color::rgb(0xBD, 0xD7, 0xEE),
            legend_opportunity: Color::rgb(0xA9, 0xD0, 0x8E),
            legend_explore: Color::rgb(0xFF, 0xE6, 0x99),
            legend_at_risk: Color::rgb(0xF4, 0xB0, 0x84),
            badge_fill: Color::rgb(0xE7, 0xE6, 0xE6),
            footer_fill: Color::rgb(0xF2, 0xF2, 0xF2),
        }
    }
}
