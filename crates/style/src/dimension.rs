//! Defines lengths and page sizes.
use crate::parsers::{parse_length, run_parser};
use placemat_types::{mm, Size};
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// A length in PDF points.
///
/// Deserializes from a bare number (points) or a string with a unit suffix
/// (`"0.3in"`, `"12pt"`, `"10mm"`, `"1.5cm"`). Always serializes as points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(pub f64);

impl Length {
    pub const fn pt(value: f64) -> Self {
        Self(value)
    }

    pub fn inches(value: f64) -> Self {
        Self(placemat_types::inch(value))
    }

    pub fn points(self) -> f64 {
        self.0
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Num(f64),
            Str(String),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Num(n) => Ok(Length(n)),
            LengthDef::Str(s) => run_parser(parse_length, &s)
                .map(Length)
                .map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A3,
    A4,
    Letter,
    Legal,
    Custom { width: f64, height: f64 },
}

impl PageSize {
    /// Portrait dimensions in points.
    pub fn dimensions_pt(&self) -> (f64, f64) {
        match self {
            PageSize::A3 => (mm(297.0), mm(420.0)),
            PageSize::A4 => (mm(210.0), mm(297.0)),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A3", "Letter", "Legal")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "a3" => Ok(PageSize::A3),
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A3 => serializer.serialize_str("A3"),
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: Length, height: Length },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom {
                width: width.points(),
                height: height.points(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Paper size plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub size: PageSize,
    pub orientation: Orientation,
}

impl PageSetup {
    /// Final page dimensions in points, orientation applied.
    pub fn dimensions_pt(&self) -> Size {
        let (w, h) = self.size.dimensions_pt();
        let portrait = Size::new(w.min(h), w.max(h));
        match self.orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.transposed(),
        }
    }
}
