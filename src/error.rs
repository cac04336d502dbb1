// src/error.rs
use placemat_render_core::RenderError;
use placemat_style::StyleParseError;
use thiserror::Error;

/// A comprehensive error type for placemat generation.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),

    #[error("Configuration JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
