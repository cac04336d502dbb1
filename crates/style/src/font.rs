use crate::parsers::parse_font_weight;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Font weight. The standard Helvetica faces only come in two weights.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn from_bold(bold: bool) -> Self {
        if bold { FontWeight::Bold } else { FontWeight::Regular }
    }

    pub fn is_bold(self) -> bool {
        self == FontWeight::Bold
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => parse_font_weight(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_bold(n >= 600)),
        }
    }
}
