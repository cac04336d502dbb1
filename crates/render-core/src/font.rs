use crate::encoding::win_ansi_code;
use crate::metrics;
use placemat_style::FontWeight;
use std::fmt;

/// The standard PDF Type1 faces used by the placemat. They need no embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    pub fn for_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Regular => StandardFont::Helvetica,
            FontWeight::Bold => StandardFont::HelveticaBold,
        }
    }

    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of a WinAnsi character code, in 1/1000 em.
    pub fn advance_width(self, code: u8) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &metrics::HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &metrics::HELVETICA_BOLD_WIDTHS,
        };
        metrics::lookup(table, code)
    }

    /// Width of `text` set at `size` points.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        let units: u32 = text
            .chars()
            .map(|c| self.advance_width(win_ansi_code(c)) as u32)
            .sum();
        units as f64 * size / 1000.0
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}
