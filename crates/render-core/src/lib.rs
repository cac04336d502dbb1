//! Core drawing abstractions for placemat rendering.
//!
//! This crate provides the pieces shared by every drawing backend:
//! - `Canvas` trait, the 2D vector drawing surface the layout code talks to
//! - `StateGuard`, a scope guard around save/restore of the graphics state
//! - Standard font metrics and WinAnsi encoding for Helvetica
//! - `RecordingCanvas`, an in-memory canvas that records every call

mod canvas;
pub mod encoding;
mod error;
pub mod font;
mod guard;
pub mod metrics;
pub mod recording;

pub use canvas::{Canvas, PaintMode};
pub use error::RenderError;
pub use font::StandardFont;
pub use guard::StateGuard;
pub use recording::{DrawCommand, RecordingCanvas};
