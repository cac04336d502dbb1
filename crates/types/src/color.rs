use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`, the form PDF color operators take.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_and_three_digit_hex() {
        assert_eq!(Color::from_hex("#16365C").unwrap(), Color::rgb(0x16, 0x36, 0x5C));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_rejects_missing_hash_and_bad_length() {
        assert!(Color::from_hex("16365C").is_err());
        assert!(Color::from_hex("#1234").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(0x70, 0x30, 0xA0)).unwrap();
        assert_eq!(json, "\"#7030A0\"");

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Color::rgb(0x70, 0x30, 0xA0));

        let from_map: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(from_map, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_unit_rgb() {
        assert_eq!(Color::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_unit_rgb(), [0.0, 0.0, 0.0]);
    }
}
