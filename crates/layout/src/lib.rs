//! Placemat layout primitives.
//!
//! - `draw_box`: one filled, bordered rectangle with a fitted label
//! - `fit_text`: decides whether a label is rotated, condensed or drawn as is
//! - `pack_cells` / `draw_grid`: tiles an ordered list of labels into a region

pub mod box_renderer;
pub mod config;
pub mod grid;
pub mod text_fit;

pub use self::box_renderer::draw_box;
pub use self::config::GridConfig;
pub use self::grid::{draw_grid, item_style, pack_cells, GridCell};
pub use self::text_fit::{fit_text, TextPlacement};

#[cfg(test)]
mod test_utils;
