pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use placemat::{PipelineError, PlacematBuilder, PlacematConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Every string shown with `Tj` on the first page, in drawing order
    pub fn shown_text(&self) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc, 1)
    }

    /// How many times `label` is drawn on the first page
    pub fn count_of(&self, label: &str) -> usize {
        self.shown_text().iter().filter(|t| *t == label).count()
    }
}

/// Generate the placemat with the given configuration
pub fn generate_pdf(config: PlacematConfig) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PlacematBuilder::new().with_config(config).build()?;
    let mut bytes = Vec::new();
    pipeline.generate(&mut bytes)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Generate the standard placemat
pub fn generate_default_pdf() -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf(PlacematConfig::default())
}

/// Build a pipeline from JSON configuration text
pub fn build_from_json(json: &str) -> Result<placemat::PlacematPipeline, PipelineError> {
    PlacematBuilder::new()
        .with_config(PlacematConfig::from_json(json)?)
        .build()
}
