// src/config.rs
use crate::error::PipelineError;
use placemat_layout::GridConfig;
use placemat_style::{Length, PageSetup, Palette};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "IBM_Product_Placemat.pdf";
pub const DEFAULT_TITLE: &str = "IBM Technology";

/// Everything that controls a placemat run. Every field is optional in JSON;
/// the defaults reproduce the standard A3 landscape placemat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacematConfig {
    /// Where `generate_to_file` writes the PDF.
    pub output: PathBuf,
    /// Heading drawn in the top-left corner, also stored as the document title.
    pub title: String,
    pub page: PageSetup,
    pub geometry: GeometryConfig,
    pub grid: GridConfig,
    pub palette: Palette,
}

impl Default for PlacematConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            page: PageSetup::default(),
            geometry: GeometryConfig::default(),
            grid: GridConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl PlacematConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fixed widths, heights and gaps of the page layout.
///
/// The center column is not listed: it takes whatever width the margins and the
/// fixed columns leave over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeometryConfig {
    pub margin: Length,
    pub gap: Length,
    pub client_engineering_width: Length,
    pub security_width: Length,
    pub right_width: Length,

    pub header_height: Length,
    pub footer_height: Length,
    pub infrastructure_height: Length,
    pub banner_height: Length,

    /// Height of a section's colored header box.
    pub section_header_height: Length,
    /// Distance from the body top to the first grid below a top-row header.
    pub header_advance: Length,

    pub data_security_height: Length,
    pub identity_height: Length,
    pub client_applications_height: Length,
    pub pillars_height: Length,
    pub app_row_height: Length,
    pub it_automation_height: Length,

    pub legend_width: Length,
    pub legend_height: Length,
    pub badge_width: Length,
    pub badge_height: Length,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            margin: Length::inches(0.3),
            gap: Length::inches(0.08),
            client_engineering_width: Length::inches(0.4),
            security_width: Length::inches(2.4),
            right_width: Length::inches(2.4),
            header_height: Length::inches(1.0),
            footer_height: Length::inches(0.5),
            infrastructure_height: Length::inches(1.4),
            banner_height: Length::inches(0.4),
            section_header_height: Length::inches(0.3),
            header_advance: Length::inches(0.35),
            data_security_height: Length::inches(3.2),
            identity_height: Length::inches(3.6),
            client_applications_height: Length::inches(1.2),
            pillars_height: Length::inches(4.2),
            app_row_height: Length::inches(1.4),
            it_automation_height: Length::inches(4.2),
            legend_width: Length::inches(1.2),
            legend_height: Length::inches(0.3),
            badge_width: Length::inches(1.5),
            badge_height: Length::inches(0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placemat_style::{Orientation, PageSize};

    #[test]
    fn test_empty_json_is_default() {
        let config = PlacematConfig::from_json("{}").unwrap();
        assert_eq!(config, PlacematConfig::default());
        assert_eq!(config.output, PathBuf::from("IBM_Product_Placemat.pdf"));
    }

    #[test]
    fn test_lengths_accept_units() {
        let config = PlacematConfig::from_json(
            r#"{ "geometry": { "margin": "10mm", "gap": 4, "securityWidth": "2in", "rightWidth": "5cm" } }"#,
        )
        .unwrap();
        let g = config.geometry;
        assert!((g.margin.points() - 28.346_456_692).abs() < 1e-6);
        assert_eq!(g.gap.points(), 4.0);
        assert_eq!(g.security_width.points(), 144.0);
        assert!((g.right_width.points() - 141.732_283_465).abs() < 1e-6);
        assert_eq!(g.footer_height, GeometryConfig::default().footer_height);
    }

    #[test]
    fn test_page_and_palette_overrides() {
        let config = PlacematConfig::from_json(
            r##"{ "page": { "size": "Letter", "orientation": "portrait" },
                  "palette": { "redText": "#f00" } }"##,
        )
        .unwrap();
        assert_eq!(config.page.size, PageSize::Letter);
        assert_eq!(config.page.orientation, Orientation::Portrait);
        assert_eq!(config.palette.red_text.to_string(), "#FF0000");
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = PlacematConfig::default();
        config.title = "Portfolio".to_string();
        config.geometry.gap = Length::pt(6.0);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(PlacematConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_length_is_reported() {
        let err = PlacematConfig::from_json(r#"{ "geometry": { "margin": "3 furlongs" } }"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = PlacematConfig::from_file("/nonexistent/placemat.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/placemat.json"));
    }
}
