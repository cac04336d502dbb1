use crate::box_renderer::draw_box;
use crate::config::GridConfig;
use placemat_render_core::{Canvas, RenderError};
use placemat_style::BoxStyle;
use placemat_types::{Color, Rect};

/// One packed cell, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
}

/// Tiles `count` equal cells into `region`, `columns` to a row.
///
/// Cells are as wide as the columns allow and as tall as the rows allow, but never
/// taller than `max_cell_height`. Packing starts at the top edge of the region, and
/// the clipped height is also the row step, so a sparse grid leaves its bottom empty.
///
/// # Panics
///
/// Panics if `count > 0` and `columns == 0`.
pub fn pack_cells(
    region: Rect,
    count: usize,
    columns: usize,
    gap: f64,
    max_cell_height: f64,
) -> Vec<GridCell> {
    if count == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let cell_width = (region.width - (columns - 1) as f64 * gap) / columns as f64;
    let cell_height = ((region.height - (rows - 1) as f64 * gap) / rows as f64).min(max_cell_height);
    let first_row_y = region.top() - cell_height;

    (0..count)
        .map(|index| {
            let row = index / columns;
            let column = index % columns;
            GridCell {
                index,
                row,
                column,
                rect: Rect::new(
                    region.x + column as f64 * (cell_width + gap),
                    first_row_y - row as f64 * (cell_height + gap),
                    cell_width,
                    cell_height,
                ),
            }
        })
        .collect()
}

/// The style every grid item is drawn with: white fill, black regular text.
pub fn item_style(border_color: Color, config: &GridConfig) -> BoxStyle {
    BoxStyle::default()
        .with_border_color(border_color)
        .with_border_width(config.border_width)
        .with_font_size(config.font_size)
}

/// Packs `items` into `region` and draws one box per item.
///
/// An empty item list draws nothing.
pub fn draw_grid<C, S>(
    canvas: &mut C,
    region: Rect,
    items: &[S],
    columns: usize,
    border_color: Color,
    config: &GridConfig,
) -> Result<(), RenderError>
where
    C: Canvas + ?Sized,
    S: AsRef<str>,
{
    if items.is_empty() {
        return Ok(());
    }
    let cells = pack_cells(
        region,
        items.len(),
        columns,
        config.gap.points(),
        config.max_cell_height.points(),
    );
    if let Some(first) = cells.first() {
        log::debug!(
            "Packing {} items into {} columns, cell {:.2}x{:.2}pt",
            items.len(),
            columns,
            first.rect.width,
            first.rect.height
        );
    }

    let style = item_style(border_color, config);
    for (cell, item) in cells.iter().zip(items) {
        draw_box(canvas, cell.rect, item.as_ref(), &style)?;
    }
    Ok(())
}
