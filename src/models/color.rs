//! Color scheme data structures
//!
//! This module contains the typed shape of a `/scheme` response from the
//! color service. Fields the service sends that are not listed here (image
//! links, fractional channels, ...) are ignored on decode.

use serde::{Deserialize, Serialize};

use super::enums::SchemeMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexValue {
    /// `#RRGGBB`
    pub value: String,
    /// `RRGGBB`
    pub clean: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbValue {
    pub value: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslValue {
    pub value: String,
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub value: String,
}

/// One generated color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hex: HexValue,
    pub rgb: RgbValue,
    pub hsl: HslValue,
    pub name: NamedValue,
    /// Text color readable on top of this color
    pub contrast: NamedValue,
}

impl ColorEntry {
    pub fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

/// A generated scheme; `colors` keeps the order the service produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeResult {
    pub mode: SchemeMode,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u32,
    pub colors: Vec<ColorEntry>,
    pub seed: ColorEntry,
}

impl SchemeResult {
    pub fn color(&self, index: usize) -> Option<&ColorEntry> {
        self.colors.get(index)
    }
}

// The live service sends `count` as a string ("5"); accept numbers too
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Unexpected, Visitor};

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
