//! Placemat generation pipeline.
//!
//! - [`PlacematBuilder`]: fluent builder that collects configuration
//! - [`PlacematPipeline`]: plans the page and writes it as a PDF
//!
//! # Example
//!
//! ```no_run
//! use placemat::PlacematBuilder;
//!
//! let pipeline = PlacematBuilder::new()
//!     .with_config_file("placemat.json")?
//!     .with_output("out/placemat.pdf")
//!     .build()?;
//!
//! let path = pipeline.generate_to_file()?;
//! println!("PDF Generated: {}", path.display());
//! # Ok::<(), placemat::PipelineError>(())
//! ```

mod builder;
mod orchestrator;

pub use builder::PlacematBuilder;
pub use orchestrator::PlacematPipeline;
