//! Enums used throughout chroma-tui
//!
//! This module contains the scheme mode tag sent to the color API and the
//! input mode used by the modal key handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color-theory algorithm the remote service applies to the seed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeMode {
    Monochrome,
    MonochromeDark,
    MonochromeLight,
    #[default]
    Analogic,
    Complement,
    AnalogicComplement,
    Triad,
    Quad,
}

impl SchemeMode {
    /// All modes in selector order
    pub const ALL: [SchemeMode; 8] = [
        SchemeMode::Monochrome,
        SchemeMode::MonochromeDark,
        SchemeMode::MonochromeLight,
        SchemeMode::Analogic,
        SchemeMode::Complement,
        SchemeMode::AnalogicComplement,
        SchemeMode::Triad,
        SchemeMode::Quad,
    ];

    /// Wire tag used in the `mode` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeMode::Monochrome => "monochrome",
            SchemeMode::MonochromeDark => "monochrome-dark",
            SchemeMode::MonochromeLight => "monochrome-light",
            SchemeMode::Analogic => "analogic",
            SchemeMode::Complement => "complement",
            SchemeMode::AnalogicComplement => "analogic-complement",
            SchemeMode::Triad => "triad",
            SchemeMode::Quad => "quad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchemeMode::Monochrome => "Monochrome",
            SchemeMode::MonochromeDark => "Dark",
            SchemeMode::MonochromeLight => "Light",
            SchemeMode::Analogic => "Analogic",
            SchemeMode::Complement => "Complement",
            SchemeMode::AnalogicComplement => "Analogic Comp",
            SchemeMode::Triad => "Triad",
            SchemeMode::Quad => "Quad",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for SchemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheme mode '{0}' (expected one of: monochrome, monochrome-dark, monochrome-light, analogic, complement, analogic-complement, triad, quad)")]
pub struct UnknownSchemeMode(pub String);

impl FromStr for SchemeMode {
    type Err = UnknownSchemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| UnknownSchemeMode(s.to_string()))
    }
}

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal, // Palette navigation and actions
    EditingSeed, // Typing a new seed hex value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_mode_wire_tags() {
        assert_eq!(SchemeMode::MonochromeDark.as_str(), "monochrome-dark");
        assert_eq!(SchemeMode::AnalogicComplement.as_str(), "analogic-complement");
        assert_eq!(SchemeMode::Triad.to_string(), "triad");
    }

    #[test]
    fn test_scheme_mode_serde_matches_wire_tag() {
        for mode in SchemeMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            let back: SchemeMode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
        }
    }

    #[test]
    fn test_scheme_mode_from_str() {
        assert_eq!("quad".parse::<SchemeMode>().unwrap(), SchemeMode::Quad);
        assert_eq!(" Monochrome-Light ".parse::<SchemeMode>().unwrap(), SchemeMode::MonochromeLight);
        assert!("pastel".parse::<SchemeMode>().is_err());
    }

    #[test]
    fn test_scheme_mode_cycle_wraps() {
        assert_eq!(SchemeMode::Quad.next(), SchemeMode::Monochrome);
        assert_eq!(SchemeMode::Monochrome.previous(), SchemeMode::Quad);
        assert_eq!(SchemeMode::Analogic.next().previous(), SchemeMode::Analogic);
    }

    #[test]
    fn test_scheme_mode_default() {
        assert_eq!(SchemeMode::default(), SchemeMode::Analogic);
    }

    #[test]
    fn test_input_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }
}
