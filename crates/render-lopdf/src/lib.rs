//! PDF canvas backend built on lopdf.
//!
//! `LopdfCanvas` turns `Canvas` calls into a single page content stream and assembles
//! a complete single-page document around it, using the standard Type1 Helvetica fonts.

mod canvas;
mod document;
mod state;

pub use canvas::LopdfCanvas;
pub use document::{font_resource_name, DocumentInfo};
