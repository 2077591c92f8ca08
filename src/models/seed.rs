//! Seed color normalization
//!
//! A `SeedColor` is always `#RRGGBB` with uppercase digits, so anything
//! holding one can hand it to the API client without further checks.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default seed used on startup (indigo)
pub const DEFAULT_SEED: &str = "#6366F1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedColorError {
    #[error("seed color is empty")]
    Empty,
    #[error("'{0}' is not a hex digit")]
    InvalidDigit(char),
    #[error("seed color needs 6 hex digits, got {0}")]
    Length(usize),
}

/// Canonical `#RRGGBB` seed color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedColor(String);

impl SeedColor {
    /// Normalize user input: trim, optional leading `#`, exactly 6 hex digits, uppercase
    pub fn parse(input: &str) -> Result<Self, SeedColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(SeedColorError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SeedColorError::InvalidDigit(bad));
        }
        if digits.len() != 6 {
            return Err(SeedColorError::Length(digits.len()));
        }

        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six digits without the leading `#`
    pub fn hex_digits(&self) -> &str {
        self.0.trim_start_matches('#')
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let value = u32::from_str_radix(self.hex_digits(), 16).unwrap_or(0);
        ((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl Default for SeedColor {
    fn default() -> Self {
        Self(DEFAULT_SEED.to_string())
    }
}

impl FromStr for SeedColor {
    type Err = SeedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
