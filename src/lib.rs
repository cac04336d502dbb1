//! Renders the IBM technology placemat: a single-page, fixed-layout grid of
//! labeled product boxes grouped into named sections.
//!
//! Layout happens in two steps. [`LayoutDriver::plan`] positions every section
//! from the configured geometry, then [`LayoutDriver::render`] draws the plan onto
//! any [`Canvas`](placemat_render_core::Canvas). [`PlacematPipeline`] wires this to
//! the lopdf backend.

pub mod config;
pub mod content;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod plan;

pub use config::{GeometryConfig, PlacematConfig};
pub use driver::LayoutDriver;
pub use error::PipelineError;
pub use geometry::LayoutConstants;
pub use pipeline::{PlacematBuilder, PlacematPipeline};
pub use plan::{PlacematPlan, PlannedBox, PlannedGrid, PlannedSection, PlannedText};

pub use placemat_layout::GridConfig;
pub use placemat_style::{Orientation, PageSetup, PageSize, Palette};
