//! Random seed colors for the randomize action. Not cryptographically strong.

use rand::Rng;

use crate::models::SeedColor;

/// Largest 24-bit color value (`#FFFFFF`)
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// Six uppercase, zero-padded hex digits without a leading `#`
pub fn random_hex() -> String {
    let value = rand::thread_rng().gen_range(0..=MAX_COLOR);
    format!("{value:06X}")
}

pub fn random_seed() -> SeedColor {
    SeedColor::parse(&random_hex()).unwrap_or_default()
}
