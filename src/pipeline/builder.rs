// src/pipeline/builder.rs
use super::orchestrator::PlacematPipeline;
use crate::config::PlacematConfig;
use crate::driver::LayoutDriver;
use crate::error::PipelineError;
use placemat_style::{Orientation, PageSize, StyleParseError};
use std::path::{Path, PathBuf};

/// A builder for creating a `PlacematPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PlacematBuilder {
    config: PlacematConfig,
}

impl PlacematBuilder {
    /// Creates a builder that reproduces the standard placemat.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: PlacematConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file. Fields missing from the file keep
    /// their defaults.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = PlacematConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.output = path.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Selects a named paper size such as `A3` or `Letter`.
    pub fn with_page_size(mut self, name: &str) -> Result<Self, PipelineError> {
        self.config.page.size =
            PageSize::parse(name).map_err(|_| StyleParseError::InvalidValue {
                property: "page.size".to_string(),
                value: name.to_string(),
            })?;
        Ok(self)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.config.page.orientation = orientation;
        self
    }

    pub fn config(&self) -> &PlacematConfig {
        &self.config
    }

    /// Derives the layout and creates the pipeline. Fails when the geometry does
    /// not fit the page.
    pub fn build(self) -> Result<PlacematPipeline, PipelineError> {
        let driver = LayoutDriver::new(&self.config)?;
        Ok(PlacematPipeline::new(self.config, driver))
    }
}
