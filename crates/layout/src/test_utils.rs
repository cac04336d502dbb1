use placemat_render_core::{DrawCommand, RecordingCanvas};
use placemat_types::Size;

/// A recording canvas the size of an A3 landscape page.
pub fn canvas() -> RecordingCanvas {
    RecordingCanvas::new(Size::new(1190.551_181_102_362, 841.889_763_779_527_6))
}

/// Horizontal factors of every scale transform that was applied.
pub fn scale_factors(canvas: &RecordingCanvas) -> Vec<f64> {
    canvas
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Scale { sx, .. } => Some(*sx),
            _ => None,
        })
        .collect()
}
