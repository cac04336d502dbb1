use crate::text_fit::{fit_text, TextPlacement};
use placemat_render_core::{Canvas, PaintMode, RenderError, StandardFont, StateGuard};
use placemat_style::BoxStyle;
use placemat_types::Rect;

/// Draws a filled, bordered rectangle with `text` centered inside it.
///
/// Horizontal labels wider than the box are condensed horizontally rather than
/// shrunk. Vertical labels are rotated 90 degrees about the box center. Any
/// transform is confined to this call, even when the canvas reports an error.
///
/// The fill color and font stay selected on the canvas afterwards.
pub fn draw_box<C: Canvas + ?Sized>(
    canvas: &mut C,
    rect: Rect,
    text: &str,
    style: &BoxStyle,
) -> Result<(), RenderError> {
    if rect.is_degenerate() {
        log::warn!(
            "Box '{}' has a degenerate size {:.2}x{:.2}",
            text,
            rect.width,
            rect.height
        );
    }

    canvas.set_fill_color(style.fill);
    canvas.set_stroke_color(style.border_color);
    canvas.set_line_width(style.border_width);
    canvas.draw_rect(rect, PaintMode::FillStroke)?;

    let font = StandardFont::for_weight(style.weight);
    canvas.set_fill_color(style.text_color);
    canvas.set_font(font, style.font_size)?;

    // Drops the baseline so cap height sits roughly centered.
    let baseline_drop = style.font_size / 3.0;
    let center = rect.center();
    let text_width = canvas.measure_text_width(text, font, style.font_size);

    match fit_text(text_width, rect.width, style.orientation) {
        TextPlacement::Rotated => {
            let mut scoped = StateGuard::new(canvas);
            scoped.translate(center.x + baseline_drop, center.y);
            scoped.rotate(90.0);
            scoped.draw_text_centered(0.0, 0.0, text)?;
        }
        TextPlacement::Condensed { scale } => {
            let mut scoped = StateGuard::new(canvas);
            scoped.translate(center.x, center.y - baseline_drop);
            scoped.scale(scale, 1.0);
            scoped.draw_text_centered(0.0, 0.0, text)?;
        }
        TextPlacement::Centered => {
            canvas.draw_text_centered(center.x, center.y - baseline_drop, text)?;
        }
        TextPlacement::Hidden => {
            log::debug!("Box {:.2}pt wide is too narrow for '{}'", rect.width, text);
        }
    }
    Ok(())
}
