use placemat_style::Length;
use placemat_types::inch;
use serde::{Deserialize, Serialize};

/// Settings shared by every item grid on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Space between neighbouring cells, both horizontally and vertically.
    ///
    /// Defaults to `0.08in`.
    pub gap: Length,
    /// Upper bound on a cell's height. Sparse grids stay top-anchored and leave
    /// the rest of their region empty instead of stretching their cells.
    ///
    /// Defaults to `0.35in`.
    pub max_cell_height: Length,
    pub font_size: f64,
    pub border_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            gap: Length::pt(inch(0.08)),
            max_cell_height: Length::pt(inch(0.35)),
            font_size: 7.0,
            border_width: 0.5,
        }
    }
}
