// src/pipeline/orchestrator.rs
use crate::config::PlacematConfig;
use crate::driver::LayoutDriver;
use crate::error::PipelineError;
use crate::plan::PlacematPlan;
use log::{debug, info};
use placemat_render_core::Canvas;
use placemat_render_lopdf::{DocumentInfo, LopdfCanvas};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Plans the placemat once and renders it to PDF.
#[derive(Debug)]
pub struct PlacematPipeline {
    config: PlacematConfig,
    driver: LayoutDriver,
}

impl PlacematPipeline {
    pub(crate) fn new(config: PlacematConfig, driver: LayoutDriver) -> Self {
        Self { config, driver }
    }

    pub fn config(&self) -> &PlacematConfig {
        &self.config
    }

    pub fn plan(&self) -> PlacematPlan {
        self.driver.plan()
    }

    /// Draws the placemat onto any canvas.
    pub fn render_to<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), PipelineError> {
        let plan = self.plan();
        debug!(
            "Planned {} sections holding {} items",
            plan.sections.len(),
            plan.item_count()
        );
        self.driver.render(&plan, canvas)?;
        Ok(())
    }

    /// Renders into an in-memory lopdf document without serializing it.
    pub fn build_document(&self) -> Result<lopdf::Document, PipelineError> {
        let mut canvas = self.canvas();
        self.render_to(&mut canvas)?;
        Ok(canvas.finish()?)
    }

    /// Writes the PDF to `writer`.
    pub fn generate<W: Write>(&self, writer: &mut W) -> Result<(), PipelineError> {
        let start = Instant::now();
        let mut canvas = self.canvas();
        self.render_to(&mut canvas)?;
        canvas.save_to(writer)?;
        info!("Placemat rendered in {:.2?}", start.elapsed());
        Ok(())
    }

    /// Writes the PDF to the configured output path and returns that path.
    pub fn generate_to_file(&self) -> Result<PathBuf, PipelineError> {
        let path = self.config.output.clone();
        self.generate_to_path(&path)?;
        Ok(path)
    }

    pub fn generate_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path.display(), e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        self.generate(&mut writer)?;
        writer.flush()?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn canvas(&self) -> LopdfCanvas {
        LopdfCanvas::new(self.driver.constants().page).with_info(DocumentInfo {
            title: Some(self.config.title.clone()),
            subject: Some("Product placemat".to_string()),
        })
    }
}
